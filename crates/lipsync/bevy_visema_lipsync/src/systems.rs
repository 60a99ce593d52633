use bevy::prelude::*;

use crate::resources::{MouthChannelClaim, MouthParams};
use crate::{
    AudioEnded, AudioReady, AudioStarted, LipSyncEnabled, LipSyncResource, LipSyncVisibility,
};
use visema_lipsync_core::{drive_frame, FrameInfo};

/// Feed host lifecycle events into the engine, in lifecycle order so a
/// ready + started pair arriving in one frame arms before it starts.
pub fn apply_lifecycle_events(
    mut engine: ResMut<LipSyncResource>,
    mut ready: EventReader<AudioReady>,
    mut started: EventReader<AudioStarted>,
    mut ended: EventReader<AudioEnded>,
    mut visibility: EventReader<LipSyncVisibility>,
    mut enabled: EventReader<LipSyncEnabled>,
) {
    for ev in enabled.read() {
        engine.0.set_enabled(ev.enabled);
    }
    for ev in ready.read() {
        engine.0.prepare(&ev.text, ev.duration, &ev.options);
    }
    for _ in started.read() {
        engine.0.confirm_start();
    }
    for _ in ended.read() {
        engine.0.confirm_end();
    }
    for ev in visibility.read() {
        if ev.visible {
            engine.0.resume();
        } else {
            engine.0.pause();
        }
    }
}

/// Tick the engine with the frame dt and stage its writes.
///
/// When the engine is not playing, the staged map is emptied and the claim
/// cleared so host motion proceeds unobstructed.
pub fn tick_lipsync(
    mut engine: ResMut<LipSyncResource>,
    time: Res<Time>,
    mut params: ResMut<MouthParams>,
    mut claim: ResMut<MouthChannelClaim>,
) {
    let frame = FrameInfo {
        delta_seconds: time.delta_seconds(),
    };
    let result = drive_frame(&mut engine.0, &mut *params, frame);

    claim.active = result.claim;
    if !result.wrote_pose {
        params.map.clear();
    }
}
