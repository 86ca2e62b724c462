//! Scroll-derived chrome state: header background, scroll hint, and the
//! back-to-top control.
//!
//! All three are pure derivations from the latest scroll offset with
//! strict thresholds and no hysteresis; they are recomputed synchronously
//! inside the scroll handler, so no stale combination survives a scroll
//! event.

/// Offset above which the navigation header gets a solid background.
pub const HEADER_SOLID_THRESHOLD: usize = 10;

/// Offset below which the scroll-down hint is shown.
pub const SCROLL_HINT_THRESHOLD: usize = 100;

/// Offset above which the back-to-top control appears.
pub const BACK_TO_TOP_THRESHOLD: usize = 300;

/// Header and scroll-hint flags.
#[derive(Debug, Clone, Copy)]
pub struct ScrollChrome {
    pub header_solid: bool,
    pub scroll_hint_visible: bool,
}

impl ScrollChrome {
    /// State at the document origin: transparent header, hint showing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            header_solid: false,
            scroll_hint_visible: true,
        }
    }

    pub fn update(&mut self, offset: usize) {
        self.header_solid = offset > HEADER_SOLID_THRESHOLD;
        self.scroll_hint_visible = offset < SCROLL_HINT_THRESHOLD;
    }
}

impl Default for ScrollChrome {
    fn default() -> Self {
        Self::new()
    }
}

/// Back-to-top control visibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackToTop {
    pub visible: bool,
}

impl BackToTop {
    #[must_use]
    pub const fn new() -> Self {
        Self { visible: false }
    }

    pub fn update(&mut self, offset: usize) {
        self.visible = offset > BACK_TO_TOP_THRESHOLD;
    }
}
