//! Top-level UI layout — active panel, status bar, picker modal and overlays.

pub mod help_panel;
pub mod overlays;
pub mod picker;
pub mod status_bar;
pub mod team_panel;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    if app.modal.is_open() {
        picker::render(f, main_area, app);
    }

    if app.overlay == Overlay::ErrorHistory {
        overlays::render_error_history(f, main_area, app);
    }

    // Alerts sit above everything else.
    if let Some(notice) = &app.notice {
        overlays::render_notice(f, main_area, notice);
    }
}

/// Draw a single panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;
    let is_active = !app.modal.is_open();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(is_active))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(is_active));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Team => team_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Modal, StatusLevel};
    use crate::test_helpers::{loaded_app, two_player_roster};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn screen(app: &AppState) -> String {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let r = centered_rect(60, 40, area);
        assert!(r.x >= area.x && r.right() <= area.right());
        assert!(r.y >= area.y && r.bottom() <= area.bottom());
        assert_eq!(r.width, 60);
        assert_eq!(r.height, 20);
    }

    #[test]
    fn team_panel_shows_squad_count() {
        let app = loaded_app(two_player_roster());
        let text = screen(&app);
        assert!(text.contains("Team [1]"));
        assert!(text.contains("Squad 0/11"));
    }

    #[test]
    fn picked_player_appears_on_team_grid() {
        let mut app = loaded_app(two_player_roster());
        app.open_picker();
        app.pick(&"2".into());
        app.close_picker();
        let text = screen(&app);
        assert!(text.contains("Squad 1/11"));
        assert!(text.contains("BOB"));
    }

    #[test]
    fn browse_modal_lists_results_and_dropdowns() {
        let mut app = loaded_app(two_player_roster());
        app.open_picker();
        let text = screen(&app);
        assert!(text.contains("All Nationalities"));
        assert!(text.contains("All Positions"));
        assert!(text.contains("All Clubs"));
        assert!(text.contains("Alice"));
        assert!(text.contains("Bob"));
    }

    #[test]
    fn detail_modal_shows_confirm_hint() {
        let mut app = loaded_app(two_player_roster());
        app.open_picker();
        app.pick(&"1".into());
        assert_eq!(app.modal, Modal::Detail("1".into()));
        let text = screen(&app);
        assert!(text.contains("Lyon - GK"));
        assert!(text.contains("confirm team"));
    }

    #[test]
    fn notice_is_drawn_on_top() {
        let mut app = loaded_app(two_player_roster());
        app.alert("You can only select 11 players!", StatusLevel::Warning);
        let text = screen(&app);
        assert!(text.contains("You can only select 11 players!"));
    }
}
