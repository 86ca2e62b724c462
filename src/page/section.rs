//! The static section set that makes up the page.

use serde::Serialize;

/// Identifier for one vertically-stacked content section.
///
/// Declaration order is document order; navigation, layout, and the
/// scroll spy all iterate sections in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Experience,
    Education,
    Skills,
}

impl SectionId {
    /// All sections in document order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Home,
            Self::About,
            Self::Experience,
            Self::Education,
            Self::Skills,
        ]
    }

    /// Stable string id (used for display and logging).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
        }
    }

    /// Heading shown above the section body (empty for the home section).
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::About => "About Me",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
        }
    }

    /// Position within the document, starting at zero.
    #[must_use]
    pub const fn display_order(self) -> usize {
        match self {
            Self::Home => 0,
            Self::About => 1,
            Self::Experience => 2,
            Self::Education => 3,
            Self::Skills => 4,
        }
    }

    /// The section after this one in document order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::About,
            Self::About => Self::Experience,
            Self::Experience => Self::Education,
            Self::Education => Self::Skills,
            Self::Skills => Self::Home,
        }
    }

    /// The section before this one in document order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Home => Self::Skills,
            Self::About => Self::Home,
            Self::Experience => Self::About,
            Self::Education => Self::Experience,
            Self::Skills => Self::Education,
        }
    }
}

/// One member of the static section set.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    pub display_order: usize,
}

impl Section {
    const fn of(id: SectionId) -> Self {
        Self {
            id,
            display_order: id.display_order(),
        }
    }
}

/// The static section set. Defined at startup, never mutated.
pub const SECTIONS: [Section; 5] = [
    Section::of(SectionId::Home),
    Section::of(SectionId::About),
    Section::of(SectionId::Experience),
    Section::of(SectionId::Education),
    Section::of(SectionId::Skills),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_in_document_order() {
        for (i, section) in SECTIONS.iter().enumerate() {
            assert_eq!(section.display_order, i);
            assert_eq!(section.id.display_order(), i);
        }
    }

    #[test]
    fn next_prev_cycle() {
        let mut id = SectionId::Home;
        for _ in 0..5 {
            id = id.next();
        }
        assert_eq!(id, SectionId::Home);
        assert_eq!(SectionId::Home.prev(), SectionId::Skills);
    }
}
