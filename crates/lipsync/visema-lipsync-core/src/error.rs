//! Error types for the lip-sync core.
//!
//! Every variant is recoverable: provider trouble leaves the prior session
//! untouched and the visible effect is a neutral mouth, never a crash of
//! the host process.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum LipSyncError {
    /// Timing provider reported itself unavailable.
    #[error("timing provider unavailable: {name}")]
    ProviderUnavailable { name: String },

    /// Timing provider failed while generating phoneme timings.
    #[error("timing provider '{name}' failed: {reason}")]
    ProviderFailed { name: String, reason: String },

    /// Phoneme sequence violated ordering or time invariants.
    #[error("invalid phoneme sequence: {reason}")]
    InvalidSequence { reason: String },

    /// Negative or non-finite time value.
    #[error("invalid time value: {time}")]
    InvalidTime { time: f32 },
}
