//! About section: summary paragraph, highlights, profile links.

use ratatui::prelude::*;

use crate::content::About;
use crate::tui::theme::Styles;
use crate::tui::widgets::wrap_text;

pub fn about_lines(about: &About, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for row in wrap_text(about.summary, width) {
        lines.push(Line::styled(row, Styles::text()));
    }
    lines.push(Line::from(""));

    for highlight in about.highlights {
        let mut rows = wrap_text(highlight, width.saturating_sub(2)).into_iter();
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
    lines.push(Line::from(""));

    let mut link_spans: Vec<Span<'static>> = Vec::new();
    for (i, link) in about.links.iter().enumerate() {
        if i > 0 {
            link_spans.push(Span::raw("   "));
        }
        link_spans.push(Span::styled(format!("[ {} ]", link.label), Styles::link()));
        link_spans.push(Span::styled(
            format!(" {}", link.target),
            Styles::text_muted(),
        ));
    }
    lines.push(Line::from(link_spans));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    #[test]
    fn narrow_width_produces_more_rows() {
        let about = &Catalog::builtin().about;
        let wide = about_lines(about, 120);
        let narrow = about_lines(about, 40);
        assert!(narrow.len() > wide.len());
    }

    #[test]
    fn every_highlight_gets_a_bullet() {
        let about = &Catalog::builtin().about;
        let lines = about_lines(about, 200);
        let bullets = lines
            .iter()
            .filter(|l| l.spans.first().is_some_and(|s| s.content.starts_with('•')))
            .count();
        assert_eq!(bullets, about.highlights.len());
    }
}
