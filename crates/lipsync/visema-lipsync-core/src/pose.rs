//! Mouth pose value type and host parameter naming.
//!
//! A pose is nine independent scalar channels. Five run over [0,1]
//! (openings, funnel, shrug, cheek) and four over [-1,1] (form,
//! pucker/widen, press/open, horizontal offset). Poses are immutable
//! value snapshots; the engine holds only a current/target pair.

use serde::{Deserialize, Serialize};

/// Nine-channel facial pose for the mouth region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MouthPose {
    /// Vertical mouth opening, [0,1].
    pub open_y: f32,
    /// Jaw opening, [0,1].
    pub jaw_open: f32,
    /// Mouth corner form, [-1,1] (frown .. smile).
    pub form: f32,
    /// Upper-lip shrug, [0,1].
    pub shrug: f32,
    /// Lip funneling, [0,1].
    pub funnel: f32,
    /// Pucker/widen, [-1,1] (pucker .. widen).
    pub pucker_widen: f32,
    /// Lip press/teeth show, [-1,1] (pressed .. teeth showing).
    pub press_lip_open: f32,
    /// Horizontal mouth offset, [-1,1].
    pub mouth_x: f32,
    /// Cheek puff, [0,1].
    pub cheek_puff: f32,
}

impl MouthPose {
    /// Rest pose: every channel at 0.
    pub const NEUTRAL: MouthPose = MouthPose {
        open_y: 0.0,
        jaw_open: 0.0,
        form: 0.0,
        shrug: 0.0,
        funnel: 0.0,
        pucker_widen: 0.0,
        press_lip_open: 0.0,
        mouth_x: 0.0,
        cheek_puff: 0.0,
    };

    /// Channel value by host parameter.
    #[inline]
    pub fn channel(&self, param: MouthParam) -> f32 {
        match param {
            MouthParam::MouthOpenY => self.open_y,
            MouthParam::JawOpen => self.jaw_open,
            MouthParam::MouthForm => self.form,
            MouthParam::MouthShrug => self.shrug,
            MouthParam::MouthFunnel => self.funnel,
            MouthParam::MouthPuckerWiden => self.pucker_widen,
            MouthParam::MouthPressLipOpen => self.press_lip_open,
            MouthParam::MouthX => self.mouth_x,
            MouthParam::CheekPuff => self.cheek_puff,
        }
    }

    /// The nine (parameter, value) pairs in canonical order.
    pub fn params(&self) -> [(MouthParam, f32); 9] {
        [
            (MouthParam::MouthOpenY, self.open_y),
            (MouthParam::JawOpen, self.jaw_open),
            (MouthParam::MouthForm, self.form),
            (MouthParam::MouthShrug, self.shrug),
            (MouthParam::MouthFunnel, self.funnel),
            (MouthParam::MouthPuckerWiden, self.pucker_widen),
            (MouthParam::MouthPressLipOpen, self.press_lip_open),
            (MouthParam::MouthX, self.mouth_x),
            (MouthParam::CheekPuff, self.cheek_puff),
        ]
    }

    /// True if any channel is NaN (should never happen; used by tests).
    pub fn has_nan(&self) -> bool {
        self.params().iter().any(|(_, v)| v.is_nan())
    }
}

/// Host-facing names for the nine mouth channels.
///
/// The string ids follow the Live2D-style convention the host model uses;
/// the core never writes any parameter outside this set.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MouthParam {
    MouthOpenY,
    JawOpen,
    MouthForm,
    MouthShrug,
    MouthFunnel,
    MouthPuckerWiden,
    MouthPressLipOpen,
    MouthX,
    CheekPuff,
}

impl MouthParam {
    pub const ALL: [MouthParam; 9] = [
        MouthParam::MouthOpenY,
        MouthParam::JawOpen,
        MouthParam::MouthForm,
        MouthParam::MouthShrug,
        MouthParam::MouthFunnel,
        MouthParam::MouthPuckerWiden,
        MouthParam::MouthPressLipOpen,
        MouthParam::MouthX,
        MouthParam::CheekPuff,
    ];

    /// Stable host parameter id.
    pub fn as_str(&self) -> &'static str {
        match self {
            MouthParam::MouthOpenY => "ParamMouthOpenY",
            MouthParam::JawOpen => "ParamJawOpen",
            MouthParam::MouthForm => "ParamMouthForm",
            MouthParam::MouthShrug => "ParamMouthShrug",
            MouthParam::MouthFunnel => "ParamMouthFunnel",
            MouthParam::MouthPuckerWiden => "ParamMouthPuckerWiden",
            MouthParam::MouthPressLipOpen => "ParamMouthPressLipOpen",
            MouthParam::MouthX => "ParamMouthX",
            MouthParam::CheekPuff => "ParamCheekPuff",
        }
    }
}

impl std::fmt::Display for MouthParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
