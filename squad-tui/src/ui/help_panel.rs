//! Panel 2 — Help: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1 / 2", "Switch to Team / Help panel");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1 — Team");
    key(&mut lines, "a / Enter", "Open the player picker");
    key(&mut lines, "h j k l / arrows", "Move between squad slots");
    key(&mut lines, "x / Delete", "Remove the player in the selected slot");
    lines.push(Line::from(""));

    section(&mut lines, "Player Picker");
    key(&mut lines, "Tab / Shift+Tab", "Focus search, dropdowns, results");
    key(&mut lines, "type", "Search by name (search focused)");
    key(&mut lines, "h / l / Space", "Change dropdown value (dropdown focused)");
    key(&mut lines, "Up / Down", "Move through result rows (any focus)");
    key(&mut lines, "h / l / Left / Right", "Move through results (results focused)");
    key(&mut lines, "Enter", "Add the highlighted player to the squad");
    key(&mut lines, "Esc", "Close the picker");
    lines.push(Line::from(""));

    section(&mut lines, "Player Detail");
    key(&mut lines, "Enter / c", "Confirm team");
    key(&mut lines, "Esc / Backspace", "Back to the picker");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2 — Help (this panel)");
    key(&mut lines, "e", "Open error history overlay");

    f.render_widget(Paragraph::new(lines), area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
