//! One-line labeled attribute bar.
//!
//! `Pace        88 ██████████████░░`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use squad_core::view::StatBar;

use crate::theme;

const LABEL_WIDTH: u16 = 10;
const VALUE_WIDTH: u16 = 4;

pub struct StatBarWidget<'a> {
    bar: &'a StatBar,
}

impl<'a> StatBarWidget<'a> {
    pub fn new(bar: &'a StatBar) -> Self {
        Self { bar }
    }

    fn line(&self, width: u16) -> Line<'static> {
        let track = width.saturating_sub(LABEL_WIDTH + VALUE_WIDTH);
        let filled = self.bar.filled(track);
        let color = theme::attribute_color(self.bar.value);

        Line::from(vec![
            Span::styled(
                format!("{:<w$}", self.bar.label, w = LABEL_WIDTH as usize),
                theme::muted(),
            ),
            Span::styled(
                format!("{:>3} ", self.bar.value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled("█".repeat(filled as usize), Style::default().fg(color)),
            Span::styled(
                "░".repeat(track.saturating_sub(filled) as usize),
                theme::muted(),
            ),
        ])
    }
}

impl<'a> Widget for StatBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line = self.line(area.width);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
