//! Rotating subtitle label.
//!
//! Cycles through a fixed list of strings on a timer with a fade between
//! values: every [`ROTATION_PERIOD`] the label hides; [`FADE_HALF`] later
//! the index advances modulo the list length and the label shows again.
//! Net effect: each value is fully shown for 2500 ms and fading for
//! 500 ms.
//!
//! The timer is an explicit handle. `cancel()` removes it exactly once;
//! a cancelled rotator performs no further state writes, so teardown can
//! never race a late tick into a destroyed view.

use std::time::Duration;

/// Full rotation period.
pub const ROTATION_PERIOD: Duration = Duration::from_millis(3000);

/// Fade-out half-duration; the index advances when it elapses.
pub const FADE_HALF: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Label visible, waiting for the next period boundary.
    Shown,
    /// Label hidden, waiting for the fade half-duration to elapse.
    Fading,
}

#[derive(Debug, Clone)]
struct RotationTimer {
    deadline: Duration,
    phase: Phase,
}

/// Fade-cycling label state.
#[derive(Debug, Clone)]
pub struct RotatingLabel {
    labels: Vec<String>,
    index: usize,
    visible: bool,
    timer: Option<RotationTimer>,
}

impl RotatingLabel {
    /// Start the cycle at elapsed time zero. An empty list yields an
    /// inert rotator that never shows anything.
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let timer = (!labels.is_empty()).then_some(RotationTimer {
            deadline: ROTATION_PERIOD,
            phase: Phase::Shown,
        });
        Self {
            labels,
            index: 0,
            visible: true,
            timer,
        }
    }

    /// Advance the cycle to the given elapsed time. Deadlines missed
    /// during a stall are replayed in order so the index stays consistent
    /// with wall time. No-op once cancelled.
    pub fn poll(&mut self, now: Duration) {
        while let Some(timer) = self.timer.as_mut() {
            if now < timer.deadline {
                break;
            }
            match timer.phase {
                Phase::Shown => {
                    self.visible = false;
                    timer.phase = Phase::Fading;
                    timer.deadline += FADE_HALF;
                }
                Phase::Fading => {
                    self.index = (self.index + 1) % self.labels.len();
                    self.visible = true;
                    timer.phase = Phase::Shown;
                    timer.deadline += ROTATION_PERIOD - FADE_HALF;
                }
            }
        }
    }

    /// Cancel the timer. Further polls write nothing.
    pub fn cancel(&mut self) {
        self.timer = None;
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.timer.is_none()
    }

    /// The label currently displayed, or `None` while fading (or for an
    /// empty list).
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        if self.visible {
            self.labels.get(self.index).map(String::as_str)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn titles() -> Vec<&'static str> {
        vec!["one", "two", "three"]
    }

    #[test]
    fn index_tracks_elapsed_periods() {
        let mut label = RotatingLabel::new(titles());
        for k in 1..10u64 {
            label.poll(at(k * 3000 + 500));
            assert_eq!(label.index(), (k as usize) % 3, "after period {k}");
            assert!(label.is_visible());
        }
    }

    #[test]
    fn hidden_during_fade_window() {
        let mut label = RotatingLabel::new(titles());

        label.poll(at(2999));
        assert!(label.is_visible());

        label.poll(at(3000));
        assert!(!label.is_visible());
        assert_eq!(label.label(), None);

        label.poll(at(3499));
        assert!(!label.is_visible());

        label.poll(at(3500));
        assert!(label.is_visible());
        assert_eq!(label.label(), Some("two"));
    }

    #[test]
    fn single_label_still_cycles_visibility() {
        let mut label = RotatingLabel::new(vec!["only"]);

        label.poll(at(3100));
        assert_eq!(label.index(), 0);
        assert!(!label.is_visible());

        label.poll(at(3600));
        assert_eq!(label.index(), 0);
        assert!(label.is_visible());
        assert_eq!(label.label(), Some("only"));
    }

    #[test]
    fn stalled_polls_replay_missed_deadlines() {
        let mut label = RotatingLabel::new(titles());
        // Jump straight past four full periods.
        label.poll(at(4 * 3000 + 600));
        assert_eq!(label.index(), 4 % 3);
        assert!(label.is_visible());
    }

    #[test]
    fn cancel_stops_all_state_writes() {
        let mut label = RotatingLabel::new(titles());
        label.poll(at(3500));
        let index = label.index();

        label.cancel();
        assert!(label.is_cancelled());
        label.poll(at(60_000));
        assert_eq!(label.index(), index);
        assert!(label.is_visible());

        // Cancelling twice is harmless.
        label.cancel();
    }

    #[test]
    fn empty_list_is_inert() {
        let mut label = RotatingLabel::new(Vec::<String>::new());
        label.poll(at(10_000));
        assert_eq!(label.label(), None);
    }
}
