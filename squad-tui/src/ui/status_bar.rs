//! Bottom status bar — roster state, squad count, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, RosterState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(" 1:Team 2:Help q:Quit", theme::muted()));
    spans.push(Span::raw(" | "));

    let (roster, roster_style) = match &app.roster {
        RosterState::Loading => ("roster: loading".to_string(), theme::warning()),
        RosterState::Ready(r) => (format!("roster: {} players", r.len()), theme::muted()),
        RosterState::Failed(_) => ("roster: unavailable".to_string(), theme::negative()),
    };
    spans.push(Span::styled(roster, roster_style));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("squad {}/{}", app.squad.len(), app.squad.capacity()),
        theme::gold(),
    ));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
