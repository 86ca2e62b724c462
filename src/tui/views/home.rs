//! Hero section: name, rotating subtitle, primary actions.

use ratatui::prelude::*;

use crate::content::Profile;
use crate::tui::theme::Styles;

/// Render the hero block. The subtitle row is always emitted, blank
/// while the rotating label is faded out, so the section height never
/// changes mid-rotation.
pub fn home_lines(profile: &Profile, subtitle: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::styled(profile.name.to_string(), Styles::hero_name()).centered(),
        Line::from(""),
        match subtitle {
            Some(text) => Line::styled(text.to_string(), Styles::subtitle()).centered(),
            None => Line::from(""),
        },
        Line::from(""),
    ];

    let mut action_spans: Vec<Span<'static>> = Vec::new();
    for (i, action) in profile.actions.iter().enumerate() {
        if i > 0 {
            action_spans.push(Span::raw("   "));
        }
        action_spans.push(Span::styled(
            format!("[ {} ]", action.label),
            Styles::link(),
        ));
    }
    lines.push(Line::from(action_spans).centered());

    for action in profile.actions {
        lines.push(
            Line::styled(action.target.to_string(), Styles::text_muted()).centered(),
        );
    }

    lines
}
