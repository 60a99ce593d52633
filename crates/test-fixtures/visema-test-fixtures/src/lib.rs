//! Shared fixtures for visema tests: scripted timing providers and canned
//! timed-phoneme sequences loaded from the workspace `fixtures/` tree.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

use visema_lipsync_core::{LipSyncError, ProviderOptions, TimedPhoneme, TimingProvider};

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    sequences: HashMap<String, String>,
}

fn read_fixture(rel: &str) -> Result<String> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../../fixtures")
        .join(rel);
    std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

/// Load a canned timed-phoneme sequence by manifest name.
pub fn load_sequence(name: &str) -> Result<Vec<TimedPhoneme>> {
    let rel = MANIFEST
        .sequences
        .get(name)
        .ok_or_else(|| anyhow!("no sequence fixture named '{name}'"))?;
    let raw = read_fixture(rel)?;
    serde_json::from_str(&raw).with_context(|| format!("sequence fixture '{name}' should parse"))
}

/// Call record kept by [`ScriptedProvider`].
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    pub calls: usize,
    pub last_text: Option<String>,
    pub last_duration: Option<f32>,
    pub last_options: Option<ProviderOptions>,
}

/// Provider returning a canned sequence, recording every call.
pub struct ScriptedProvider {
    name: String,
    sequence: Vec<TimedPhoneme>,
    log: Arc<Mutex<CallLog>>,
}

impl ScriptedProvider {
    pub fn new(sequence: Vec<TimedPhoneme>) -> Self {
        Self {
            name: "scripted".to_string(),
            sequence,
            log: Arc::new(Mutex::new(CallLog::default())),
        }
    }

    pub fn named(name: impl Into<String>, sequence: Vec<TimedPhoneme>) -> Self {
        Self {
            name: name.into(),
            sequence,
            log: Arc::new(Mutex::new(CallLog::default())),
        }
    }

    /// Shared handle to the call log; clones observe later calls.
    pub fn log(&self) -> Arc<Mutex<CallLog>> {
        Arc::clone(&self.log)
    }
}

impl TimingProvider for ScriptedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        true
    }

    fn timed_phonemes(
        &self,
        text: &str,
        audio_duration: f32,
        options: &ProviderOptions,
    ) -> Result<Vec<TimedPhoneme>, LipSyncError> {
        let mut log = self.log.lock().expect("call log poisoned");
        log.calls += 1;
        log.last_text = Some(text.to_string());
        log.last_duration = Some(audio_duration);
        log.last_options = Some(options.clone());
        Ok(self.sequence.clone())
    }
}

/// Provider that rejects every request.
pub struct FailingProvider;

impl TimingProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn timed_phonemes(
        &self,
        _text: &str,
        _audio_duration: f32,
        _options: &ProviderOptions,
    ) -> Result<Vec<TimedPhoneme>, LipSyncError> {
        Err(LipSyncError::ProviderFailed {
            name: "failing".to_string(),
            reason: "scripted failure".to_string(),
        })
    }
}

/// Provider that reports itself unavailable (and errors if called anyway).
pub struct UnavailableProvider;

impl TimingProvider for UnavailableProvider {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn timed_phonemes(
        &self,
        _text: &str,
        _audio_duration: f32,
        _options: &ProviderOptions,
    ) -> Result<Vec<TimedPhoneme>, LipSyncError> {
        Err(LipSyncError::ProviderUnavailable {
            name: "unavailable".to_string(),
        })
    }
}
