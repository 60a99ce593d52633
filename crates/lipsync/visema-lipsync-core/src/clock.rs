//! Audio-relative playback clock.
//!
//! The core never reads wall clocks: the host advances the clock once per
//! animation tick with its frame dt, keeping elapsed time aligned with the
//! host's own audio position.

use serde::{Deserialize, Serialize};

/// Tracks elapsed seconds since playback start.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PlaybackClock {
    elapsed: f32,
    running: bool,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)stamp the start instant: elapsed resets to zero and the clock runs.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance by the host frame dt. Ignored while stopped; negative or
    /// non-finite dt is ignored rather than rewinding time.
    pub fn advance(&mut self, dt: f32) {
        if self.running && dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
