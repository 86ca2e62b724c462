//! Static page content.
//!
//! Everything the page displays lives in one `'static` catalog so the
//! renderer, the plain-text report, and the JSON report all read the
//! same data. The types are plain serializable structs; nothing here
//! knows about scrolling or the terminal.

mod data;

use serde::Serialize;

/// A labelled external contact target (mail address, profile URL, or
/// scheduling link).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub target: &'static str,
}

/// Hero block: name, the rotating subtitle set, and the primary actions.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub subtitles: &'static [&'static str],
    pub actions: &'static [ContactLink],
}

/// About section: a summary paragraph, bullet highlights, and profile
/// links.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct About {
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub links: &'static [ContactLink],
}

/// One employment entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Role {
    pub title: &'static str,
    pub period: &'static str,
    pub organisation: &'static str,
    pub duties: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

/// One qualification entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Degree {
    pub title: &'static str,
    pub institution: &'static str,
    pub focus_areas: &'static [&'static str],
}

/// A named group of skill badges.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// The complete page content, in document order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Catalog {
    pub profile: Profile,
    pub about: About,
    pub experience: &'static [Role],
    pub education: &'static [Degree],
    pub skills: &'static [SkillCategory],
    pub footer: &'static [ContactLink],
}

impl Catalog {
    /// The built-in catalog.
    #[must_use]
    pub const fn builtin() -> &'static Self {
        &data::CATALOG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_populated() {
        let catalog = Catalog::builtin();
        assert!(!catalog.profile.name.is_empty());
        assert!(catalog.profile.subtitles.len() >= 2);
        assert!(!catalog.experience.is_empty());
        assert!(!catalog.education.is_empty());
        assert!(!catalog.skills.is_empty());
        assert!(!catalog.footer.is_empty());
    }

    #[test]
    fn every_skill_category_has_badges() {
        for category in Catalog::builtin().skills {
            assert!(!category.skills.is_empty(), "empty group: {}", category.name);
        }
    }

    #[test]
    fn catalog_serializes_to_json() {
        let value = serde_json::to_value(Catalog::builtin()).unwrap();
        assert!(value.get("profile").is_some());
        assert!(value["experience"].as_array().is_some());
    }
}
