//! Visema Lip-Sync Core (engine-agnostic)
//!
//! Converts a timed sequence of phonetic symbols into a continuous,
//! smoothly-interpolated 9-channel mouth pose, tracking playback time
//! against an externally-driven audio clock. Hosts feed lifecycle events
//! (ready/started/ended) and a per-frame dt; the core hands back a pose
//! and a batch of named parameter writes. No rendering, no networking.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod estimate;
pub mod frame;
pub mod interp;
pub mod outputs;
pub mod pose;
pub mod session;
pub mod table;
pub mod timing;

// Re-exports for consumers (adapters)
pub use clock::PlaybackClock;
pub use config::Config;
pub use engine::{BoxedProvider, LipSyncEngine, TimingTier};
pub use error::LipSyncError;
pub use estimate::EvenSpacingEstimator;
pub use frame::{drive_frame, ChannelClaim, FrameInfo, FrameResult, ParamSink};
pub use outputs::{EngineEvent, ParamBatch, ParamWrite};
pub use pose::{MouthParam, MouthPose};
pub use session::SessionStatus;
pub use table::lookup;
pub use timing::{PhonemeSequence, PhonemeWindow, ProviderOptions, TimedPhoneme, TimingProvider};
