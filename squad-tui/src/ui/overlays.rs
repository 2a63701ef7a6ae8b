//! Overlay widgets — alert notice and error history.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, Notice, StatusLevel};
use crate::theme;
use crate::ui::centered_rect;

/// Blocking alert; any key dismisses it.
pub fn render_notice(f: &mut Frame, area: Rect, notice: &Notice) {
    let popup = centered_rect(50, 25, area);
    f.render_widget(Clear, popup);

    let (title, style) = match notice.level {
        StatusLevel::Info => (" Squad Builder ", theme::positive()),
        StatusLevel::Warning => (" Heads up ", theme::warning()),
        StatusLevel::Error => (" Error ", theme::negative()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
        .title_style(style.add_modifier(Modifier::BOLD));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(notice.message.as_str(), style.add_modifier(Modifier::BOLD)))
            .centered(),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::muted())).centered(),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme::negative());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.error_scroll;
    let end = (start + visible_height).min(app.error_history.len());

    let mut lines: Vec<Line> = Vec::new();
    for (i, err) in app.error_history.iter().enumerate().take(end).skip(start) {
        let style = if i == app.error_scroll {
            theme::negative().add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", err.timestamp.format("%H:%M:%S")),
                theme::muted(),
            ),
            Span::styled(format!("[{}] ", err.category.label()), theme::warning()),
            Span::styled(err.message.as_str(), style),
        ]));

        if !err.context.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(err.context.as_str(), theme::muted()),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ErrorCategory;
    use crate::test_helpers::loaded_app;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_contains(draw: impl FnOnce(&mut Frame), needle: &str) -> bool {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(draw).unwrap();
        let buf = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
        }
        text.contains(needle)
    }

    #[test]
    fn error_history_lists_categories() {
        let mut app = loaded_app(vec![]);
        app.push_error(ErrorCategory::Storage, "disk full".into(), "add".into());
        assert!(screen_contains(
            |f| {
                let area = f.area();
                render_error_history(f, area, &app)
            },
            "[STORE] disk full"
        ));
    }

    #[test]
    fn empty_error_history_says_so() {
        let app = loaded_app(vec![]);
        assert!(screen_contains(
            |f| {
                let area = f.area();
                render_error_history(f, area, &app)
            },
            "No errors recorded."
        ));
    }

    #[test]
    fn notice_shows_message() {
        let notice = Notice {
            message: "Please select at least one player.".into(),
            level: StatusLevel::Warning,
        };
        assert!(screen_contains(
            |f| {
                let area = f.area();
                render_notice(f, area, &notice)
            },
            "Please select at least one player."
        ));
    }
}
