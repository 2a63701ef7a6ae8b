//! Panel 1 — Team: the squad grid.
//!
//! Eleven slots laid out `TEAM_COLUMNS` per row. Filled slots render a
//! [`TeamCard`]; the card under the cursor is highlighted and is the target
//! of the delete key.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use squad_core::view;

use crate::app::{AppState, RosterState, TEAM_COLUMNS};
use crate::theme;
use crate::ui::widgets::team_card::{EmptySlot, CARD_HEIGHT, CARD_WIDTH};
use crate::ui::widgets::TeamCard;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let [header_area, grid_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    render_header(f, header_area, app);

    let capacity = app.squad.capacity();
    let cards = view::team_cards(app.squad.players());
    let rows = capacity.div_ceil(TEAM_COLUMNS);

    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(grid_area);
    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas =
            Layout::horizontal(vec![Constraint::Length(CARD_WIDTH); TEAM_COLUMNS]).split(*row_area);
        for (col, slot_area) in col_areas.iter().enumerate() {
            let slot = row * TEAM_COLUMNS + col;
            if slot >= capacity {
                break;
            }
            match cards.get(slot) {
                Some(card) => {
                    let selected = slot == app.team_cursor && !app.modal.is_open();
                    f.render_widget(TeamCard::new(card, selected), *slot_area);
                }
                None => f.render_widget(EmptySlot::new(slot), *slot_area),
            }
        }
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = vec![
        Span::styled(
            format!("Squad {}/{}", app.squad.len(), app.squad.capacity()),
            theme::gold(),
        ),
        Span::raw("   "),
    ];
    match &app.roster {
        RosterState::Loading => {
            spans.push(Span::styled("Loading roster...", theme::warning()));
        }
        RosterState::Failed(_) => {
            spans.push(Span::styled(
                "Roster unavailable (see error history) ",
                theme::negative(),
            ));
        }
        RosterState::Ready(_) => {
            spans.push(Span::styled("[a]dd player ", theme::accent()));
            if !app.squad.is_empty() {
                spans.push(Span::styled("[x] remove ", theme::accent()));
            }
        }
    }
    if app.squad.is_full() {
        spans.push(Span::styled(" squad full", theme::positive()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
