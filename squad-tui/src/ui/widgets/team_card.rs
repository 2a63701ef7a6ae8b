//! Team grid card — compact badge layout.
//!
//! Displays:
//! - Rating and position (top left), flag and club crest labels
//! - Photo reference and name
//! - Attribute sextet in two columns (PAC/SHO/PAS | DRI/DEF/PHY)
//! - Slot number doubling as the delete target

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use squad_core::view::{AttributeBadge, TeamCardView};

use crate::theme;
use crate::ui::widgets::asset_label;

pub const CARD_WIDTH: u16 = 22;
pub const CARD_HEIGHT: u16 = 10;

pub struct TeamCard<'a> {
    card: &'a TeamCardView,
    selected: bool,
}

impl<'a> TeamCard<'a> {
    pub fn new(card: &'a TeamCardView, selected: bool) -> Self {
        Self { card, selected }
    }

    fn badge_row(&self, left: &AttributeBadge, right: &AttributeBadge) -> Line<'static> {
        let cell = |b: &AttributeBadge| {
            vec![
                Span::styled(
                    format!("{:>3} ", b.value),
                    Style::default()
                        .fg(theme::attribute_color(b.value))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(b.label, theme::gold()),
            ]
        };
        let mut spans = cell(left);
        spans.push(Span::styled(" │", theme::muted()));
        spans.extend(cell(right));
        Line::from(spans)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let c = self.card;
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{:<3}", c.rating),
                    theme::gold().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<4}", c.position), theme::gold()),
                Span::styled(asset_label(&c.flag).to_string(), theme::muted()),
            ]),
            Line::from(Span::styled(
                format!("▣ {}", asset_label(&c.photo)),
                theme::neutral(),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                c.name.to_uppercase(),
                theme::gold().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        ];
        for (left, right) in c.left.iter().zip(c.right.iter()) {
            lines.push(self.badge_row(left, right).alignment(Alignment::Center));
        }
        lines.push(
            Line::from(Span::styled(asset_label(&c.logo).to_string(), theme::muted()))
                .alignment(Alignment::Center),
        );
        lines
    }
}

impl<'a> Widget for TeamCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.selected {
            (theme::accent_bold(), theme::selected())
        } else {
            (theme::gold(), theme::gold())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(format!(" {} ", self.card.slot + 1), title_style))
            .title_bottom(Line::from(Span::styled(" x ✖ ", theme::negative())).right_aligned())
            .style(Style::default().bg(theme::BACKGROUND));

        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}

/// Placeholder for an unfilled squad slot.
pub struct EmptySlot {
    slot: usize,
}

impl EmptySlot {
    pub fn new(slot: usize) -> Self {
        Self { slot }
    }
}

impl Widget for EmptySlot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted())
            .title(Span::styled(format!(" {} ", self.slot + 1), theme::muted()));
        let inner_lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled("empty", theme::muted())).alignment(Alignment::Center),
        ];
        Paragraph::new(inner_lines).block(block).render(area, buf);
    }
}
