//! Output contracts from the core engine.
//!
//! A ParamBatch carries the nine named parameter writes for one tick plus
//! any semantic events. Adapters apply the writes to the host model and
//! transport the events.

use serde::{Deserialize, Serialize};

use crate::pose::{MouthParam, MouthPose};

/// One named parameter write for this tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamWrite {
    pub param: MouthParam,
    pub value: f32,
}

/// Discrete semantic signals emitted by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EngineEvent {
    /// A phoneme sequence was generated and armed for the next start.
    SessionArmed { provider: String, phonemes: usize },
    /// Audio start was confirmed; the clock is running.
    PlaybackStarted { duration: f32 },
    /// Playback ended; the engine is returning to neutral.
    PlaybackEnded,
    /// The provider rejected a prepare; the prior session was kept.
    ProviderFailed { provider: String, reason: String },
}

/// Per-tick outputs: parameter writes plus events.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamBatch {
    #[serde(default)]
    pub writes: Vec<ParamWrite>,
    #[serde(default)]
    pub events: Vec<EngineEvent>,
}

impl ParamBatch {
    #[inline]
    pub fn clear(&mut self) {
        self.writes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: EngineEvent) {
        self.events.push(event);
    }

    /// Stage the nine channel writes for a pose.
    pub fn push_pose(&mut self, pose: &MouthPose) {
        for (param, value) in pose.params() {
            self.writes.push(ParamWrite { param, value });
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty() && self.events.is_empty()
    }
}
