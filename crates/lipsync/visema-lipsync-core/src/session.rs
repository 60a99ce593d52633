//! Playback session owned by the engine.

use serde::{Deserialize, Serialize};

use crate::clock::PlaybackClock;
use crate::timing::PhonemeSequence;

/// Lifecycle position of the engine.
///
/// `Armed` means a phoneme sequence is ready but audio has not been
/// confirmed started (audio may still be buffering); `Playing` means the
/// clock is running. The paused overlay is tracked separately by the
/// engine and is orthogonal to these states.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SessionStatus {
    Idle,
    Armed,
    Playing,
}

/// One utterance's live playback: its sequence plus the running clock.
/// Never handed out for external mutation; the engine exposes read
/// accessors only.
#[derive(Clone, Debug)]
pub(crate) struct PlaybackSession {
    pub phonemes: PhonemeSequence,
    pub clock: PlaybackClock,
}

impl PlaybackSession {
    /// Promote an armed sequence into live playback, stamping the clock.
    pub fn start(phonemes: PhonemeSequence) -> Self {
        let mut clock = PlaybackClock::new();
        clock.start();
        Self { phonemes, clock }
    }
}
