//! Smooth scroll animation and navigation offset math.
//!
//! The animator keeps a floating-point position that eases toward the
//! target a fraction of the remaining distance per tick, then snaps once
//! the remainder drops below half a row. Overlapping navigations simply
//! retarget the animator mid-flight; the damping converges on the newest
//! target.

/// Rows of scroll compensation for the fixed navigation header: a section
/// scrolled flush to the viewport top would sit underneath it.
pub const FIXED_HEADER_OFFSET: i64 = 60;

/// Fraction of the remaining distance covered per tick.
const EASE_FACTOR: f64 = 0.45;

/// Snap-to-target threshold, in rows.
const SETTLE_EPSILON: f64 = 0.5;

/// Compute the scroll target for a section measured at `viewport_top`
/// rows from the top of the viewport while the page is scrolled to
/// `offset`, compensating for the fixed header. Clamped at the document
/// origin; the caller clamps against the document end.
#[must_use]
pub fn nav_target(viewport_top: i64, offset: usize) -> usize {
    let target = viewport_top + offset as i64 - FIXED_HEADER_OFFSET;
    target.max(0) as usize
}

/// Eased scroll-position animator.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    position: f64,
    target: f64,
}

impl SmoothScroll {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: 0.0,
            target: 0.0,
        }
    }

    /// Current offset in whole rows.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.position.round().max(0.0) as usize
    }

    /// Offset the animation is heading toward.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target.round().max(0.0) as usize
    }

    /// Begin (or retarget) an animated scroll.
    pub fn scroll_to(&mut self, target: usize) {
        self.target = target as f64;
    }

    /// Move instantly, cancelling any animation in flight.
    pub fn jump_to(&mut self, offset: usize) {
        self.position = offset as f64;
        self.target = self.position;
    }

    /// Instant relative scroll (keys, mouse wheel), clamped to `[0, max]`.
    pub fn scroll_by(&mut self, delta: i64, max: usize) {
        let next = (self.offset() as i64 + delta).clamp(0, max as i64);
        self.jump_to(next as usize);
    }

    /// Keep position and target inside a document that may have shrunk.
    pub fn clamp(&mut self, max: usize) {
        let max = max as f64;
        if self.target > max {
            self.target = max;
        }
        if self.position > max {
            self.position = max;
        }
    }

    /// Advance the animation one tick. Returns true if the offset moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }
        let before = self.offset();
        self.position += (self.target - self.position) * EASE_FACTOR;
        if (self.target - self.position).abs() < SETTLE_EPSILON {
            self.position = self.target;
        }
        self.offset() != before || !self.is_animating()
    }

    /// True while the animation has not settled on its target.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        (self.target - self.position).abs() >= f64::EPSILON
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new()
    }
}
