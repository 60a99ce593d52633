//! Built-in fallback timing tier: even-spacing estimation from raw text.
//!
//! When the accurate aligner is unreachable, this provider expands the
//! text with a crude grapheme-to-phoneme mapping and spreads the result
//! uniformly over the audio duration. It is always available and never
//! fails; accuracy is explicitly not its job.

use crate::error::LipSyncError;
use crate::timing::{ProviderOptions, TimedPhoneme, TimingProvider};

/// Fallback estimator: one phoneme slot per mapped grapheme, even widths.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvenSpacingEstimator;

/// Rough English grapheme mapping to table symbols. Digraphs first so
/// "sh"/"ch"/"th" don't split into their letters.
fn expand_graphemes(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let pair = if i + 1 < chars.len() {
            Some((chars[i], chars[i + 1]))
        } else {
            None
        };
        match pair {
            Some(('s', 'h')) => {
                out.push("ʃ");
                i += 2;
                continue;
            }
            Some(('c', 'h')) => {
                out.push("tʃ");
                i += 2;
                continue;
            }
            Some(('t', 'h')) => {
                out.push("θ");
                i += 2;
                continue;
            }
            Some(('n', 'g')) => {
                out.push("ŋ");
                i += 2;
                continue;
            }
            Some(('o', 'o')) => {
                out.push("u");
                i += 2;
                continue;
            }
            Some(('e', 'e')) => {
                out.push("i");
                i += 2;
                continue;
            }
            Some(('o', 'u')) => {
                out.push("aʊ");
                i += 2;
                continue;
            }
            _ => {}
        }
        let sym = match chars[i] {
            'a' => Some("æ"),
            'e' => Some("ɛ"),
            'i' => Some("ɪ"),
            'o' => Some("ɑ"),
            'u' => Some("ʌ"),
            'y' => Some("i"),
            'b' => Some("b"),
            'c' | 'k' | 'q' => Some("k"),
            'd' => Some("d"),
            'f' => Some("f"),
            'g' => Some("g"),
            'h' => Some("h"),
            'j' => Some("dʒ"),
            'l' => Some("l"),
            'm' => Some("m"),
            'n' => Some("n"),
            'p' => Some("p"),
            'r' => Some("ɹ"),
            's' => Some("s"),
            't' => Some("t"),
            'v' => Some("v"),
            'w' => Some("w"),
            'x' => Some("s"),
            'z' => Some("z"),
            ' ' | '\t' | '\n' => Some("sil"),
            // Punctuation and anything else contributes no slot.
            _ => None,
        };
        if let Some(s) = sym {
            // Collapse runs of silence so pauses don't eat the budget.
            if s != "sil" || out.last() != Some(&"sil") {
                out.push(s);
            }
        }
        i += 1;
    }
    out
}

impl TimingProvider for EvenSpacingEstimator {
    fn name(&self) -> &str {
        "even-spacing-estimator"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn timed_phonemes(
        &self,
        text: &str,
        audio_duration: f32,
        _options: &ProviderOptions,
    ) -> Result<Vec<TimedPhoneme>, LipSyncError> {
        if !audio_duration.is_finite() || audio_duration <= 0.0 {
            return Err(LipSyncError::InvalidTime {
                time: audio_duration,
            });
        }
        let symbols = expand_graphemes(text);
        if symbols.is_empty() {
            return Ok(Vec::new());
        }
        let slot = audio_duration / symbols.len() as f32;
        Ok(symbols
            .iter()
            .enumerate()
            .map(|(i, s)| TimedPhoneme::new(*s, i as f32 * slot, (i + 1) as f32 * slot))
            .collect())
    }
}
