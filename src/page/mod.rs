//! View state for the single-page portfolio.
//!
//! [`PageState`] owns everything the renderer derives from scroll
//! position: the active section, header and hint chrome, the back-to-top
//! control, the rotating subtitle, and the scroll animator. Two writers
//! touch the active section — navigation sets it optimistically when a
//! nav entry is activated, and the scroll spy overwrites it as sections
//! cross the observation band. There is no suppression window: whichever
//! writes last wins, and the spy re-converges within one scroll event.

pub mod chrome;
pub mod layout;
pub mod rotator;
pub mod scroll;
pub mod section;
pub mod spy;

use std::time::Duration;

use tracing::debug;

pub use chrome::{BackToTop, ScrollChrome};
pub use layout::{PageLayout, SectionExtent};
pub use rotator::RotatingLabel;
pub use scroll::SmoothScroll;
pub use section::{Section, SectionId, SECTIONS};
pub use spy::ScrollSpy;

/// Aggregate view state for the page.
#[derive(Debug, Clone)]
pub struct PageState {
    active_section: Option<SectionId>,
    pub chrome: ScrollChrome,
    pub back_to_top: BackToTop,
    spy: ScrollSpy,
    pub rotator: RotatingLabel,
    pub scroll: SmoothScroll,
}

impl PageState {
    /// Mount the page: register scroll-spy observations for the static
    /// section set and start the subtitle rotation. No section is active
    /// until the spy's first report.
    #[must_use]
    pub fn mount<I, S>(subtitles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active_section: None,
            chrome: ScrollChrome::new(),
            back_to_top: BackToTop::new(),
            spy: ScrollSpy::mount(&SECTIONS),
            rotator: RotatingLabel::new(subtitles),
            scroll: SmoothScroll::new(),
        }
    }

    /// Current scroll offset in rows.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.scroll.offset()
    }

    /// Section the navigation highlights, if any.
    #[must_use]
    pub const fn active_section(&self) -> Option<SectionId> {
        self.active_section
    }

    /// Recompute every scroll-derived flag for the current offset and let
    /// the spy report intersecting sections. Entries arrive in document
    /// order and are folded in order, so the last one wins.
    pub fn on_scroll(&mut self, layout: &PageLayout, viewport_height: usize) {
        let offset = self.scroll.offset();
        self.chrome.update(offset);
        self.back_to_top.update(offset);
        for id in self.spy.entries(layout, offset, viewport_height) {
            if self.active_section != Some(id) {
                debug!(section = id.as_str(), offset, "active section changed");
            }
            self.active_section = Some(id);
        }
    }

    /// Advance time-driven state: the subtitle rotation and any scroll
    /// animation in flight. A moving animation re-runs the scroll handler
    /// so chrome and spy state track the animated offset.
    pub fn on_tick(&mut self, now: Duration, layout: &PageLayout, viewport_height: usize) {
        self.rotator.poll(now);
        if self.scroll.tick() {
            self.on_scroll(layout, viewport_height);
        }
    }

    /// Navigate to a section: start a smooth scroll toward its top,
    /// compensated for the fixed header, and optimistically mark it
    /// active. The spy may overwrite the highlight while the animation
    /// passes other sections; it settles on the destination.
    pub fn navigate_to(&mut self, layout: &PageLayout, viewport_height: usize, id: SectionId) {
        let Some(extent) = layout.extent(id) else {
            return;
        };
        let offset = self.scroll.offset();
        let viewport_top = extent.top as i64 - offset as i64;
        let target = scroll::nav_target(viewport_top, offset).min(layout.max_scroll(viewport_height));
        debug!(section = id.as_str(), target, "navigating");
        self.scroll.scroll_to(target);
        self.active_section = Some(id);
    }

    /// Instant relative scroll, clamped to the document.
    pub fn scroll_by(
        &mut self,
        layout: &PageLayout,
        viewport_height: usize,
        delta: i64,
    ) {
        self.scroll.scroll_by(delta, layout.max_scroll(viewport_height));
        self.on_scroll(layout, viewport_height);
    }

    /// Animated scroll back to the document origin. Only acts while the
    /// back-to-top control is visible.
    pub fn back_to_top(&mut self) {
        if self.back_to_top.visible {
            self.scroll.scroll_to(0);
            self.active_section = Some(SectionId::Home);
        }
    }

    /// Release observers and timers. Safe to call more than once; after
    /// teardown no callback path mutates the state.
    pub fn teardown(&mut self) {
        self.spy.disconnect();
        self.rotator.cancel();
    }

    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        !self.spy.is_connected() && self.rotator.is_cancelled()
    }
}
