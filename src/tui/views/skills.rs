//! Skills section: named categories of badge chips, flowed to width.

use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::content::SkillCategory;
use crate::tui::theme::{skill_badge, Styles};

pub fn skills_lines(categories: &[SkillCategory], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(category.name.to_string(), Styles::heading()));
        lines.extend(badge_rows(category.skills, width));
    }

    lines
}

/// Flow badges onto rows, wrapping when the next chip would overflow.
fn badge_rows(skills: &[&str], width: usize) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0usize;

    for skill in skills {
        // Chip renders as " label " plus a separating space.
        let chip_width = UnicodeWidthStr::width(*skill) + 3;
        if row_width + chip_width > width && !spans.is_empty() {
            rows.push(Line::from(std::mem::take(&mut spans)));
            row_width = 0;
        }
        spans.push(skill_badge(skill));
        spans.push(Span::raw(" "));
        row_width += chip_width;
    }
    if !spans.is_empty() {
        rows.push(Line::from(spans));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    #[test]
    fn every_category_has_a_heading_and_chips() {
        let categories = Catalog::builtin().skills;
        let lines = skills_lines(categories, 80);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone())
            .collect();
        for category in categories {
            assert!(text.contains(category.name));
            for skill in category.skills {
                assert!(text.contains(skill), "missing chip {skill}");
            }
        }
    }

    #[test]
    fn narrow_width_wraps_chips() {
        let categories = Catalog::builtin().skills;
        let wide = skills_lines(categories, 200);
        let narrow = skills_lines(categories, 30);
        assert!(narrow.len() > wide.len());
    }
}
