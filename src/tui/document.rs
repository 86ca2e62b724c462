//! The virtual document: every section rendered and stacked into one
//! tall column of rows.
//!
//! Sections are padded to at least one viewport height, matching the
//! full-screen feel of the page, so scroll thresholds and the spy band
//! behave sensibly on any terminal size. The builder measures each
//! section while rendering and returns the geometry alongside the rows.

use ratatui::prelude::*;

use super::theme::Styles;
use super::views;
use crate::content::Catalog;
use crate::page::{PageLayout, SectionExtent, SectionId, SECTIONS};

/// A fully rendered page: rows plus measured section geometry.
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
}

impl Document {
    /// Render the catalog at the given width. `subtitle` is the rotating
    /// label's current value, `None` while faded.
    #[must_use]
    pub fn build(
        catalog: &Catalog,
        width: usize,
        viewport_height: usize,
        subtitle: Option<&str>,
    ) -> Self {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut extents = Vec::with_capacity(SECTIONS.len());

        for section in &SECTIONS {
            let top = lines.len();
            let mut body = section_lines(catalog, section.id, width, subtitle);

            if section.id != SectionId::Home {
                let mut headed = vec![
                    Line::from(""),
                    Line::styled(section.id.title().to_uppercase(), Styles::heading()),
                    Line::styled("━".repeat(width.min(40)), Styles::border()),
                    Line::from(""),
                ];
                headed.append(&mut body);
                body = headed;
            }

            // Full-height sections: pad to at least one viewport.
            while body.len() < viewport_height {
                body.push(Line::from(""));
            }

            let height = body.len();
            lines.append(&mut body);
            extents.push(SectionExtent {
                id: section.id,
                top,
                height,
            });
        }

        lines.push(Line::from(""));
        lines.push(footer_line(catalog).centered());
        lines.push(Line::from(""));

        let total_height = lines.len();
        Self {
            lines,
            layout: PageLayout::new(extents, total_height),
        }
    }

    /// The rows visible at the given scroll offset.
    #[must_use]
    pub fn visible(&self, offset: usize, viewport_height: usize) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .skip(offset)
            .take(viewport_height)
            .cloned()
            .collect()
    }
}

fn section_lines(
    catalog: &Catalog,
    id: SectionId,
    width: usize,
    subtitle: Option<&str>,
) -> Vec<Line<'static>> {
    match id {
        SectionId::Home => views::home_lines(&catalog.profile, subtitle),
        SectionId::About => views::about_lines(&catalog.about, width),
        SectionId::Experience => views::experience_lines(catalog.experience, width),
        SectionId::Education => views::education_lines(catalog.education),
        SectionId::Skills => views::skills_lines(catalog.skills, width),
    }
}

fn footer_line(catalog: &Catalog) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, link) in catalog.footer.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  ·  "));
        }
        spans.push(Span::styled(link.label.to_string(), Styles::link()));
    }
    Line::from(spans)
}
