use bevy::prelude::*;
use hashbrown::HashMap;

use visema_lipsync_core::{ChannelClaim, MouthParam, ParamSink};

/// Staged mouth parameter values for this frame, keyed by the host model's
/// parameter id. Only the nine mouth channels ever appear here; the map is
/// empty whenever the engine is not playing.
#[derive(Resource, Default)]
pub struct MouthParams {
    pub map: HashMap<&'static str, f32>,
}

impl ParamSink for MouthParams {
    fn set_param(&mut self, param: MouthParam, value: f32) {
        self.map.insert(param.as_str(), value);
    }
}

/// Exclusive-ownership token over the mouth channels. While `active` is
/// set, the host's idle/speech motion must not drive those parameters;
/// checking this token replaces racing on write order.
#[derive(Resource, Default)]
pub struct MouthChannelClaim {
    pub active: Option<ChannelClaim>,
}
