//! Scroll spy: decides which section is "current" from viewport
//! intersection.
//!
//! One observation is registered per section. The observation band is the
//! viewport inset by [`BAND_INSET`] from top and bottom, so a section must
//! occupy the vertical middle of the screen to count. A query reports
//! every intersecting section in document order and never reorders
//! entries; the caller folds them in order, so the last reported section
//! wins when several intersect during a fast scroll.
//!
//! The spy must be disconnected on teardown. A disconnected spy holds no
//! observations and reports nothing.

use super::layout::PageLayout;
use super::section::{Section, SectionId};

/// Fraction of the viewport height trimmed from each end of the
/// observation band.
pub const BAND_INSET: f64 = 0.10;

/// Minimum intersection ratio for a section to count as visible.
pub const INTERSECTION_RATIO: f64 = 0.1;

/// Per-section viewport observation with an explicit release lifecycle.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    observed: Vec<SectionId>,
    connected: bool,
}

impl ScrollSpy {
    /// Register one observation per section, in the order given
    /// (document order for the static set).
    #[must_use]
    pub fn mount(sections: &[Section]) -> Self {
        Self {
            observed: sections.iter().map(|s| s.id).collect(),
            connected: true,
        }
    }

    /// Release every observation. Idempotent; after this the spy reports
    /// nothing.
    pub fn disconnect(&mut self) {
        self.observed.clear();
        self.connected = false;
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Number of live observations.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observed.len()
    }

    /// Report every observed section currently intersecting the
    /// observation band, in registration (document) order.
    #[must_use]
    pub fn entries(
        &self,
        layout: &PageLayout,
        offset: usize,
        viewport_height: usize,
    ) -> Vec<SectionId> {
        if !self.connected || viewport_height == 0 {
            return Vec::new();
        }

        let inset = viewport_height as f64 * BAND_INSET;
        let band_top = offset as f64 + inset;
        let band_bottom = (offset + viewport_height) as f64 - inset;
        let band_height = band_bottom - band_top;
        if band_height <= 0.0 {
            return Vec::new();
        }

        self.observed
            .iter()
            .copied()
            .filter(|id| {
                layout.extent(*id).is_some_and(|extent| {
                    let top = extent.top as f64;
                    let bottom = extent.bottom() as f64;
                    let overlap = bottom.min(band_bottom) - top.max(band_top);
                    if overlap <= 0.0 {
                        return false;
                    }
                    // Normalize against the smaller of the two extents so a
                    // short section fully inside the band counts, and a
                    // section taller than the band can still reach the
                    // threshold.
                    let base = (bottom - top).min(band_height);
                    base > 0.0 && overlap / base >= INTERSECTION_RATIO
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::layout::SectionExtent;
    use crate::page::section::SECTIONS;

    fn layout_of(heights: &[usize]) -> PageLayout {
        let mut top = 0;
        let extents = SECTIONS
            .iter()
            .zip(heights)
            .map(|(s, &height)| {
                let e = SectionExtent {
                    id: s.id,
                    top,
                    height,
                };
                top += height;
                e
            })
            .collect();
        PageLayout::new(extents, top)
    }

    #[test]
    fn reports_section_in_middle_band() {
        let layout = layout_of(&[40, 40, 40, 40, 40]);
        let spy = ScrollSpy::mount(&SECTIONS);

        // Viewport [40, 80): the about section fills it.
        assert_eq!(spy.entries(&layout, 40, 40), vec![SectionId::About]);
    }

    #[test]
    fn edge_sections_outside_band_are_ignored() {
        let layout = layout_of(&[40, 40, 40, 40, 40]);
        let spy = ScrollSpy::mount(&SECTIONS);

        // Viewport [38, 78): home occupies rows [38, 40) — only the top
        // 2 rows, entirely inside the 4-row top inset, so it must not
        // count; about does.
        assert_eq!(spy.entries(&layout, 38, 40), vec![SectionId::About]);
    }

    #[test]
    fn multiple_intersections_are_reported_in_document_order() {
        let layout = layout_of(&[40, 20, 20, 40, 40]);
        let spy = ScrollSpy::mount(&SECTIONS);

        // Viewport [30, 70) spans home tail, about, experience.
        let entries = spy.entries(&layout, 30, 40);
        assert_eq!(
            entries,
            vec![SectionId::Home, SectionId::About, SectionId::Experience]
        );
    }

    #[test]
    fn disconnected_spy_reports_nothing() {
        let layout = layout_of(&[40, 40, 40, 40, 40]);
        let mut spy = ScrollSpy::mount(&SECTIONS);
        assert_eq!(spy.observer_count(), SECTIONS.len());

        spy.disconnect();
        assert!(!spy.is_connected());
        assert_eq!(spy.observer_count(), 0);
        assert!(spy.entries(&layout, 40, 40).is_empty());

        // Double release is a no-op.
        spy.disconnect();
        assert_eq!(spy.observer_count(), 0);
    }

    #[test]
    fn mount_unmount_pairs_are_matched() {
        for _ in 0..5 {
            let mut spy = ScrollSpy::mount(&SECTIONS);
            assert_eq!(spy.observer_count(), SECTIONS.len());
            spy.disconnect();
            assert_eq!(spy.observer_count(), 0);
        }
    }
}
