//! Non-interactive output: render the catalog as plain text or JSON.

use std::fmt::Write as _;

use clap::ValueEnum;

use crate::content::Catalog;
use crate::error::Result;
use crate::page::SectionId;

/// Output format for the `print` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    /// Plain text, suitable for pagers and pipes
    Text,
    /// Machine-readable JSON
    Json,
}

/// Render the whole catalog as plain text, in document order.
#[must_use]
pub fn render_text(catalog: &Catalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", catalog.profile.name);
    let _ = writeln!(out, "{}", catalog.profile.subtitles.join(" | "));
    for action in catalog.profile.actions {
        let _ = writeln!(out, "  {}: {}", action.label, action.target);
    }

    section_header(&mut out, SectionId::About);
    let _ = writeln!(out, "{}", catalog.about.summary);
    let _ = writeln!(out);
    for highlight in catalog.about.highlights {
        let _ = writeln!(out, "  - {highlight}");
    }
    for link in catalog.about.links {
        let _ = writeln!(out, "  {}: {}", link.label, link.target);
    }

    section_header(&mut out, SectionId::Experience);
    for role in catalog.experience {
        let _ = writeln!(out, "{} — {}", role.title, role.organisation);
        let _ = writeln!(out, "{}", role.period);
        for duty in role.duties {
            let _ = writeln!(out, "  - {duty}");
        }
        if !role.achievements.is_empty() {
            let _ = writeln!(out, "  Key Achievements:");
            for achievement in role.achievements {
                let _ = writeln!(out, "  - {achievement}");
            }
        }
        let _ = writeln!(out);
    }

    section_header(&mut out, SectionId::Education);
    for degree in catalog.education {
        let _ = writeln!(out, "{} — {}", degree.title, degree.institution);
        for area in degree.focus_areas {
            let _ = writeln!(out, "  - {area}");
        }
    }

    section_header(&mut out, SectionId::Skills);
    for category in catalog.skills {
        let _ = writeln!(out, "{}: {}", category.name, category.skills.join(", "));
    }

    let _ = writeln!(out);
    let footer: Vec<String> = catalog
        .footer
        .iter()
        .map(|l| format!("{}: {}", l.label, l.target))
        .collect();
    let _ = writeln!(out, "{}", footer.join("  |  "));

    out
}

/// Render the whole catalog as pretty-printed JSON.
pub fn render_json(catalog: &Catalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

fn section_header(out: &mut String, id: SectionId) {
    let _ = writeln!(out);
    let _ = writeln!(out, "## {}", id.title());
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report_contains_every_section() {
        let text = render_text(Catalog::builtin());
        for heading in ["About Me", "Experience", "Education", "Skills"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("D.B. Morris"));
    }

    #[test]
    fn json_report_is_valid_and_complete() {
        let json = render_json(Catalog::builtin()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["profile"]["name"], "D.B. Morris");
        assert_eq!(
            value["experience"].as_array().map(Vec::len),
            Some(Catalog::builtin().experience.len())
        );
        assert_eq!(
            value["skills"].as_array().map(Vec::len),
            Some(Catalog::builtin().skills.len())
        );
    }
}
