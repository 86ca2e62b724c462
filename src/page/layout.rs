//! Document geometry: where each section sits in the virtual page.
//!
//! The page is a single column of rows. The document builder measures
//! every section while rendering and records its extent here; navigation
//! and the scroll spy read the extents back to do their offset math.

use super::section::SectionId;

/// Document-relative extent of one section, in rows.
#[derive(Debug, Clone, Copy)]
pub struct SectionExtent {
    pub id: SectionId,
    /// First row of the section, relative to the document top.
    pub top: usize,
    /// Number of rows the section occupies.
    pub height: usize,
}

impl SectionExtent {
    /// One past the last row of the section.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// Geometry of the whole page, in document order.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    extents: Vec<SectionExtent>,
    total_height: usize,
}

impl PageLayout {
    /// Build a layout from measured extents. `total_height` may exceed the
    /// last extent's bottom when trailing content (the footer) follows the
    /// sections.
    #[must_use]
    pub fn new(extents: Vec<SectionExtent>, total_height: usize) -> Self {
        let sections_end = extents.last().map_or(0, SectionExtent::bottom);
        Self {
            extents,
            total_height: total_height.max(sections_end),
        }
    }

    /// Look up the extent for a section, if it is part of this layout.
    #[must_use]
    pub fn extent(&self, id: SectionId) -> Option<&SectionExtent> {
        self.extents.iter().find(|e| e.id == id)
    }

    /// All extents in document order.
    #[must_use]
    pub fn extents(&self) -> &[SectionExtent] {
        &self.extents
    }

    /// Total document height in rows.
    #[must_use]
    pub const fn total_height(&self) -> usize {
        self.total_height
    }

    /// Largest valid scroll offset for a viewport of the given height.
    #[must_use]
    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.total_height.saturating_sub(viewport_height)
    }
}
