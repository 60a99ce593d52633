//! Core configuration for visema-lipsync-core.

use serde::{Deserialize, Serialize};

/// Smoothing rates and thresholds for the engine.
///
/// Rates are per-second convergence factors; each tick moves the current
/// pose toward the target by `rate * dt` (clamped to 1). At 60 Hz the
/// defaults keep the factor well below 1.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Convergence rate while playing.
    pub active_rate: f32,
    /// Convergence rate while returning to neutral (no session).
    pub return_rate: f32,
    /// Decay rate for the cheek channel once its target is neutral.
    pub cheek_decay_rate: f32,
    /// Cheek target at or below this counts as neutral.
    pub neutral_threshold: f32,
    /// Tolerance for pose equality checks.
    pub pose_epsilon: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_rate: 22.0,
            return_rate: 8.0,
            cheek_decay_rate: 30.0,
            neutral_threshold: 0.02,
            pose_epsilon: 1e-3,
        }
    }
}
