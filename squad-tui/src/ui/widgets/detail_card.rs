//! Detail card shown after a pick: identity block plus seven stat bars.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use squad_core::view::DetailView;

use super::{asset_label, StatBarWidget};
use crate::theme;

/// Identity rows above the stat bars.
const HEADER_ROWS: u16 = 5;

pub struct DetailCard<'a> {
    view: &'a DetailView,
}

impl<'a> DetailCard<'a> {
    pub fn new(view: &'a DetailView) -> Self {
        Self { view }
    }

    fn header(&self) -> Vec<Line<'static>> {
        let v = self.view;
        vec![
            Line::from(Span::styled(
                v.name.clone(),
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("photo  ", theme::muted()),
                Span::styled(format!("▣ {}", asset_label(&v.photo)), theme::neutral()),
            ]),
            Line::from(vec![
                Span::styled("nation ", theme::muted()),
                Span::styled(v.nationality.clone(), theme::text()),
                Span::styled(format!("  [{}]", asset_label(&v.flag)), theme::muted()),
            ]),
            Line::from(vec![
                Span::styled("club   ", theme::muted()),
                Span::styled(v.club_line(), theme::text()),
                Span::styled(format!("  [{}]", asset_label(&v.logo)), theme::muted()),
            ]),
            Line::from(""),
        ]
    }
}

impl<'a> Widget for DetailCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, stats_area] =
            Layout::vertical([Constraint::Length(HEADER_ROWS), Constraint::Min(0)]).areas(area);

        Paragraph::new(self.header()).render(header_area, buf);

        let rows = Layout::vertical(
            self.view
                .stats
                .iter()
                .map(|_| Constraint::Length(1))
                .collect::<Vec<_>>(),
        )
        .split(stats_area);

        for (bar, row) in self.view.stats.iter().zip(rows.iter()) {
            StatBarWidget::new(bar).render(*row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::player;
    use squad_core::view;

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
    fn shows_identity_and_all_seven_stats() {
        let p = player("4", "Lucas Moreau", "France", "CB", "Lyon");
        let detail = view::detail(&p);
        let area = Rect::new(0, 0, 50, 14);
        let mut buf = Buffer::empty(area);
        DetailCard::new(&detail).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Lucas Moreau"));
        assert!(text.contains("Lyon - CB"));
        assert!(text.contains("France"));
        for label in [
            "Rating", "Pace", "Shooting", "Passing", "Dribbling", "Defending", "Physical",
        ] {
            assert!(text.contains(label), "missing {label}");
        }
    }
}
