//! Player picker modal — browse (search, dropdowns, result grid) and detail.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use squad_core::view;
use squad_core::{PlayerId, RosterField};

use crate::app::{AppState, FilterFocus, Modal, RESULT_COLUMNS};
use crate::theme;
use crate::ui::centered_rect;
use crate::ui::widgets::{asset_label, DetailCard};

/// Height of one result tile, borders included.
const TILE_HEIGHT: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    match &app.modal {
        Modal::Closed => {}
        Modal::Browse => render_browse(f, area, app),
        Modal::Detail(id) => render_detail(f, area, app, id),
    }
}

fn render_browse(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(90, 90, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Pick a Player [Tab]focus [Enter]add [Esc]close ")
        .title_style(theme::accent_bold());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let [search_area, dropdown_area, results_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_search(f, search_area, app);
    render_dropdowns(f, dropdown_area, app);
    render_results(f, results_area, app);
}

fn control_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(format!(" {title} "))
        .title_style(theme::panel_title(focused))
}

fn render_search(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.picker.focus == FilterFocus::Name;
    let mut spans = vec![
        Span::styled("> ", theme::accent()),
        Span::styled(app.picker.name_query.as_str(), theme::accent_bold()),
    ];
    if focused {
        spans.push(Span::styled("_", theme::accent()));
    }
    let para = Paragraph::new(Line::from(spans)).block(control_block("Search by name", focused));
    f.render_widget(para, area);
}

fn render_dropdowns(f: &mut Frame, area: Rect, app: &AppState) {
    let cols = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
    for (field, col) in RosterField::ALL.iter().zip(cols.iter()) {
        let focused = app.picker.focus == FilterFocus::Dropdown(*field);
        let dropdown = app.picker.dropdown(*field);
        let style = if dropdown.value().is_some() {
            theme::gold()
        } else {
            theme::muted()
        };
        let line = Line::from(vec![
            Span::styled("◂ ", theme::muted()),
            Span::styled(dropdown.label().to_string(), style),
            Span::styled(" ▸", theme::muted()),
        ]);
        let para = Paragraph::new(line).block(control_block(field.label(), focused));
        f.render_widget(para, *col);
    }
}

fn render_results(f: &mut Frame, area: Rect, app: &AppState) {
    let results = app.filtered();
    let focused = app.picker.focus == FilterFocus::Results;

    let block = control_block(&format!("Results ({})", results.len()), focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if results.is_empty() {
        let msg = if app.roster.players().is_empty() {
            "No players loaded."
        } else {
            "No players match the current filters."
        };
        f.render_widget(Paragraph::new(Span::styled(msg, theme::muted())), inner);
        return;
    }

    // Scroll so the cursor row stays visible.
    let visible_rows = (inner.height / TILE_HEIGHT).max(1) as usize;
    let cursor_row = app.picker.cursor / RESULT_COLUMNS;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    let row_areas =
        Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); visible_rows]).split(inner);
    for (r, row_area) in row_areas.iter().enumerate() {
        let col_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, RESULT_COLUMNS as u32); RESULT_COLUMNS])
                .split(*row_area);
        for (c, tile_area) in col_areas.iter().enumerate() {
            let idx = (first_row + r) * RESULT_COLUMNS + c;
            let Some(player) = results.get(idx) else {
                return;
            };
            let tile = view::search_result(player);
            let selected = idx == app.picker.cursor;
            let border = if selected && focused {
                theme::accent_bold()
            } else if selected {
                theme::accent()
            } else {
                theme::muted()
            };
            let name_style = if selected {
                theme::selected()
            } else {
                theme::text()
            };
            let lines = vec![
                Line::from(Span::styled(
                    format!("▣ {}", asset_label(&tile.thumbnail)),
                    theme::neutral(),
                )),
                Line::from(Span::styled(tile.name, name_style)),
            ];
            let para = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border),
            );
            f.render_widget(para, *tile_area);
        }
    }
}

fn render_detail(f: &mut Frame, area: Rect, app: &AppState, id: &PlayerId) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::gold())
        .title(" Player Detail ")
        .title_style(theme::gold().add_modifier(Modifier::BOLD))
        .title_bottom(
            Line::from(Span::styled(
                format!(
                    " Squad {}/{}  [Enter] confirm team  [Esc] back ",
                    app.squad.len(),
                    app.squad.capacity()
                ),
                theme::accent(),
            ))
            .centered(),
        );
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    match app.roster.get(id) {
        Some(player) => {
            let detail = view::detail(player);
            f.render_widget(DetailCard::new(&detail), inner);
        }
        None => {
            let text = Paragraph::new(Span::styled("Player not found.", theme::muted()));
            f.render_widget(text, inner);
        }
    }
}
