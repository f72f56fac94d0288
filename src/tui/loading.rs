//! Loading indicator state machine.
//!
//! Two states: Idle and Loading. While loading, the quote region cycles
//! through four animation frames on a fixed interval, wrapping around.
//! Starting a new loading session first tears down the previous
//! animation, so two timers never run concurrently.

use std::time::{Duration, Instant};

/// Animation frames shown in the quote text region while a request is in
/// flight.
pub const LOADING_FRAMES: [&str; 4] = [
    "Fetching quote",
    "Fetching quote.",
    "Fetching quote..",
    "Fetching quote...",
];

/// Interval between animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy)]
struct Animation {
    frame: usize,
    next_frame_at: Instant,
}

/// Idle/Loading state machine driving the animation.
#[derive(Debug, Default)]
pub struct LoadingIndicator {
    active: Option<Animation>,
}

impl LoadingIndicator {
    /// Create an idle indicator.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Idle -> Loading. Tears down any running animation first.
    pub fn start(&mut self, now: Instant) {
        self.stop();
        self.active = Some(Animation {
            frame: 0,
            next_frame_at: now + FRAME_INTERVAL,
        });
    }

    /// Loading -> Idle.
    pub fn stop(&mut self) {
        self.active = None;
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.active.is_some()
    }

    /// Advance the animation to `now`. Returns whether the visible frame
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = &mut self.active else {
            return false;
        };

        let mut changed = false;
        while now >= animation.next_frame_at {
            animation.frame = (animation.frame + 1) % LOADING_FRAMES.len();
            animation.next_frame_at += FRAME_INTERVAL;
            changed = true;
        }
        changed
    }

    /// Current animation frame, or `None` while idle.
    #[must_use]
    pub fn frame(&self) -> Option<&'static str> {
        self.active.map(|a| LOADING_FRAMES[a.frame])
    }
}
