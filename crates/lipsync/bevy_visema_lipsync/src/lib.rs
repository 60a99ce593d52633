//! Bevy plugin wrapping the Visema lip-sync core.
//!
//! Hosts send lifecycle events (`AudioReady`, `AudioStarted`, `AudioEnded`,
//! `LipSyncVisibility`); each Update the plugin ticks the engine, stages
//! the nine mouth parameters in [`resources::MouthParams`], and raises the
//! [`resources::MouthChannelClaim`] the host motion system must honor
//! while speech is playing.

use bevy::prelude::*;

use visema_lipsync_core::{Config, EvenSpacingEstimator, LipSyncEngine, ProviderOptions};

pub mod resources;
pub mod systems;

pub use resources::{MouthChannelClaim, MouthParams};

/// Resource wrapper around the core engine.
#[derive(Resource)]
pub struct LipSyncResource(pub LipSyncEngine);

impl Default for LipSyncResource {
    fn default() -> Self {
        // Hosts with an aligner client insert their own resource before the
        // plugin; this default keeps the fallback tier functional.
        Self(LipSyncEngine::new(
            Config::default(),
            Box::new(EvenSpacingEstimator),
        ))
    }
}

/// TTS audio for an utterance is synthesized and its duration known.
#[derive(Event, Clone, Debug)]
pub struct AudioReady {
    pub text: String,
    pub duration: f32,
    pub options: ProviderOptions,
}

/// Audio playback actually began (may lag `AudioReady` by buffering).
#[derive(Event, Clone, Copy, Debug, Default)]
pub struct AudioStarted;

/// Audio playback finished.
#[derive(Event, Clone, Copy, Debug, Default)]
pub struct AudioEnded;

/// Visibility-driven pause/resume of pose computation.
#[derive(Event, Clone, Copy, Debug)]
pub struct LipSyncVisibility {
    pub visible: bool,
}

/// Feature toggle. Disabling drops the live session and returns the mouth
/// to host control; `prepare` requests are ignored until re-enabled.
#[derive(Event, Clone, Copy, Debug)]
pub struct LipSyncEnabled {
    pub enabled: bool,
}

pub struct VisemaLipSyncPlugin;

impl Plugin for VisemaLipSyncPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LipSyncResource>()
            .init_resource::<MouthParams>()
            .init_resource::<MouthChannelClaim>()
            .add_event::<AudioReady>()
            .add_event::<AudioStarted>()
            .add_event::<AudioEnded>()
            .add_event::<LipSyncVisibility>()
            .add_event::<LipSyncEnabled>()
            .add_systems(
                Update,
                (systems::apply_lifecycle_events, systems::tick_lipsync).chain(),
            );
    }
}
