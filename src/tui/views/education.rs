//! Education section.

use ratatui::prelude::*;

use crate::content::Degree;
use crate::tui::theme::Styles;

pub fn education_lines(degrees: &[Degree]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, degree) in degrees.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(degree.title.to_string(), Styles::heading()));
        lines.push(Line::styled(
            degree.institution.to_string(),
            Styles::text_muted(),
        ));
        lines.push(Line::from(""));
        lines.push(Line::styled("Areas of Focus:".to_string(), Styles::text()));
        for area in degree.focus_areas {
            lines.push(Line::from(vec![
                Span::styled("• ", Styles::text_muted()),
                Span::styled(area.to_string(), Styles::text()),
            ]));
        }
    }

    lines
}
