//! Experience section: one block per role, in reverse-chronological
//! order as authored in the catalog.

use ratatui::prelude::*;

use crate::content::Role;
use crate::tui::theme::Styles;
use crate::tui::widgets::wrap_text;

pub fn experience_lines(roles: &[Role], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, role) in roles.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "─".repeat(width.min(60)),
                Styles::border(),
            ));
            lines.push(Line::from(""));
        }
        lines.extend(role_lines(role, width));
    }

    lines
}

fn role_lines(role: &Role, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(role.title.to_string(), Styles::heading()),
        Line::styled(role.period.to_string(), Styles::text_muted()),
        Line::styled(role.organisation.to_string(), Styles::text()),
        Line::from(""),
    ];

    bullet_list(&mut lines, role.duties, width);

    if !role.achievements.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Key Achievements:".to_string(),
            Styles::heading(),
        ));
        bullet_list(&mut lines, role.achievements, width);
    }

    lines
}

fn bullet_list(lines: &mut Vec<Line<'static>>, items: &[&str], width: usize) {
    for item in items {
        let mut rows = wrap_text(item, width.saturating_sub(2)).into_iter();
        if let Some(first) = rows.next() {
            lines.push(Line::from(vec![
                Span::styled("• ", Styles::text_muted()),
                Span::styled(first, Styles::text()),
            ]));
        }
        for rest in rows {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(rest, Styles::text()),
            ]));
        }
    }
}
