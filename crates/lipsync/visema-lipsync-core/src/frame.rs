//! Per-frame host seam.
//!
//! Hosts implement [`ParamSink`] over their model-parameter store and call
//! [`drive_frame`] once per animation frame. The core writes only the nine
//! mouth channels, and only while playing; when it writes, the returned
//! [`ChannelClaim`] tells the host's own motion system to stop driving
//! those channels for the tick. Ownership is explicit rather than
//! last-writer-wins.

use crate::engine::LipSyncEngine;
use crate::outputs::ParamBatch;
use crate::pose::MouthParam;

/// Narrow parameter sink: the only thing the core needs from the host's
/// per-frame context.
pub trait ParamSink {
    fn set_param(&mut self, param: MouthParam, value: f32);
}

/// Host timing info for one frame (seconds, not milliseconds).
#[derive(Copy, Clone, Debug)]
pub struct FrameInfo {
    pub delta_seconds: f32,
}

/// Exclusive-ownership token over the nine mouth channels for one tick.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChannelClaim {
    pub params: [MouthParam; 9],
}

impl ChannelClaim {
    pub fn mouth() -> Self {
        Self {
            params: MouthParam::ALL,
        }
    }

    pub fn covers(&self, param: MouthParam) -> bool {
        self.params.contains(&param)
    }
}

impl Default for ChannelClaim {
    fn default() -> Self {
        Self::mouth()
    }
}

/// Outcome of one frame: whether pose values were written, and the claim
/// the host must honor for this tick (present only while playing).
#[derive(Clone, Debug, Default)]
pub struct FrameResult {
    pub wrote_pose: bool,
    pub claim: Option<ChannelClaim>,
    pub batch: ParamBatch,
}

/// Tick the engine and write its pose into the host sink.
///
/// When the engine is not playing, no parameters are written at all and no
/// claim is returned, leaving host motion unobstructed.
pub fn drive_frame(
    engine: &mut LipSyncEngine,
    sink: &mut dyn ParamSink,
    frame: FrameInfo,
) -> FrameResult {
    let pose = *engine.tick(frame.delta_seconds);
    let playing = engine.is_active();

    let mut batch = ParamBatch {
        events: engine.take_events(),
        ..ParamBatch::default()
    };

    if !playing {
        return FrameResult {
            wrote_pose: false,
            claim: None,
            batch,
        };
    }

    for (param, value) in pose.params() {
        sink.set_param(param, value);
    }
    batch.push_pose(&pose);

    FrameResult {
        wrote_pose: true,
        claim: Some(ChannelClaim::mouth()),
        batch,
    }
}
