//! Timed phoneme sequences and the timing-provider seam.
//!
//! A sequence is an ordered batch of {symbol, start, end} entries in
//! seconds relative to the start of the utterance's audio, supplied
//! atomically per utterance by an external provider. The engine holds a
//! read-only view for the duration of one playback.

use serde::{Deserialize, Serialize};

use crate::error::LipSyncError;

/// One phoneme with its audio-relative window, start <= end, seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedPhoneme {
    pub symbol: String,
    pub start: f32,
    pub end: f32,
}

impl TimedPhoneme {
    pub fn new(symbol: impl Into<String>, start: f32, end: f32) -> Self {
        Self {
            symbol: symbol.into(),
            start,
            end,
        }
    }
}

/// Options passed through to the provider unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProviderOptions {
    /// BCP-47 language code, if the provider cares.
    #[serde(default)]
    pub language: Option<String>,
    /// Speech-rate multiplier applied by the TTS voice (1.0 = nominal).
    #[serde(default)]
    pub speech_rate: Option<f32>,
}

/// Source of timed phoneme sequences, one call per prepared utterance.
///
/// Implemented by hosts (HTTP aligner clients, local estimators, test
/// doubles). Timeout/retry policy belongs to the implementation, not to
/// the engine.
pub trait TimingProvider {
    /// Identifier used in diagnostics.
    fn name(&self) -> &str;

    /// Whether the provider can currently serve requests.
    fn is_available(&self) -> bool;

    /// Generate phoneme timings for `text` spoken over `audio_duration`
    /// seconds. The options bag is passed through opaquely.
    fn timed_phonemes(
        &self,
        text: &str,
        audio_duration: f32,
        options: &ProviderOptions,
    ) -> Result<Vec<TimedPhoneme>, LipSyncError>;
}

/// Result of locating the playback position inside a sequence.
///
/// `current` is the phoneme whose [start, end) window contains the elapsed
/// time (or the preceding one when elapsed falls in a gap, or the last one
/// once elapsed runs past the end). `next` is the phoneme interpolated
/// toward, when there is one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhonemeWindow<'a> {
    pub current: Option<&'a TimedPhoneme>,
    pub next: Option<&'a TimedPhoneme>,
}

/// An ordered, validated batch of timed phonemes for one utterance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhonemeSequence(Vec<TimedPhoneme>);

impl PhonemeSequence {
    /// Wrap and validate a provider batch. Empty input is valid and means
    /// "no lip motion" (the engine treats it as no session).
    pub fn new(phonemes: Vec<TimedPhoneme>) -> Result<Self, LipSyncError> {
        let seq = Self(phonemes);
        seq.validate()?;
        Ok(seq)
    }

    fn validate(&self) -> Result<(), LipSyncError> {
        let mut last_start = f32::NEG_INFINITY;
        for p in &self.0 {
            if !p.start.is_finite() || !p.end.is_finite() || p.start < 0.0 {
                return Err(LipSyncError::InvalidTime { time: p.start });
            }
            if p.start > p.end {
                return Err(LipSyncError::InvalidSequence {
                    reason: format!("'{}' has start {} after end {}", p.symbol, p.start, p.end),
                });
            }
            if p.start < last_start {
                return Err(LipSyncError::InvalidSequence {
                    reason: format!("'{}' starts before its predecessor", p.symbol),
                });
            }
            last_start = p.start;
        }
        Ok(())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn phonemes(&self) -> &[TimedPhoneme] {
        &self.0
    }

    /// End time of the final phoneme, 0 when empty.
    pub fn duration(&self) -> f32 {
        self.0.last().map(|p| p.end).unwrap_or(0.0)
    }

    /// Locate the phoneme window containing `elapsed` seconds.
    ///
    /// Ordered scan with explicit edges:
    /// - before the first phoneme's start: current = none, next = first;
    /// - at or past the last phoneme's end: current = last, next = none;
    /// - inside a phoneme's [start, end): that phoneme, next = following;
    /// - in a gap between two phonemes: the preceding one, next = following
    ///   (interpolation continues across the gap; see engine).
    pub fn window_at(&self, elapsed: f32) -> PhonemeWindow<'_> {
        let ps = &self.0;
        if ps.is_empty() {
            return PhonemeWindow {
                current: None,
                next: None,
            };
        }
        if elapsed < ps[0].start {
            return PhonemeWindow {
                current: None,
                next: Some(&ps[0]),
            };
        }
        let last = ps.len() - 1;
        if elapsed >= ps[last].end {
            return PhonemeWindow {
                current: Some(&ps[last]),
                next: None,
            };
        }
        // Sequences are tens of entries; a plain scan is fine.
        for i in 0..last {
            if elapsed < ps[i + 1].start {
                return PhonemeWindow {
                    current: Some(&ps[i]),
                    next: Some(&ps[i + 1]),
                };
            }
        }
        PhonemeWindow {
            current: Some(&ps[last]),
            next: None,
        }
    }
}

impl From<PhonemeSequence> for Vec<TimedPhoneme> {
    fn from(seq: PhonemeSequence) -> Self {
        seq.0
    }
}
