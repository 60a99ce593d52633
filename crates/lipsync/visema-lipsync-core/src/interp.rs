//! Interpolation helpers:
//! - lerp_clamped (t clamped to [0,1] before use)
//! - ease_in_out_quad (quadratic ease, monotonic on [0,1])
//! - blend_pose (component-wise clamped lerp)
//! - approx_eq (tolerance compare, all channels)
//! - converge_toward (per-tick exponential approach, cheek has its own decay)

use crate::pose::MouthPose;

/// Default tolerance for [`approx_eq`].
pub const DEFAULT_TOLERANCE: f32 = 1e-3;

/// Linear interpolation with t clamped to [0,1].
/// Output is always within [min(a,b), max(a,b)]; the endpoints are
/// returned bit-exact so repeated blending settles instead of jittering.
#[inline]
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    a + (b - a) * t
}

/// Quadratic ease-in-out. Clamps t to [0,1]; f(0)=0, f(0.5)=0.5, f(1)=1,
/// continuous and monotonic over the interval.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - (u * u) / 2.0
    }
}

/// Component-wise clamped lerp between two poses.
#[inline]
pub fn blend_pose(a: &MouthPose, b: &MouthPose, t: f32) -> MouthPose {
    MouthPose {
        open_y: lerp_clamped(a.open_y, b.open_y, t),
        jaw_open: lerp_clamped(a.jaw_open, b.jaw_open, t),
        form: lerp_clamped(a.form, b.form, t),
        shrug: lerp_clamped(a.shrug, b.shrug, t),
        funnel: lerp_clamped(a.funnel, b.funnel, t),
        pucker_widen: lerp_clamped(a.pucker_widen, b.pucker_widen, t),
        press_lip_open: lerp_clamped(a.press_lip_open, b.press_lip_open, t),
        mouth_x: lerp_clamped(a.mouth_x, b.mouth_x, t),
        cheek_puff: lerp_clamped(a.cheek_puff, b.cheek_puff, t),
    }
}

/// True iff every channel differs by less than `tolerance`.
#[inline]
pub fn approx_eq(a: &MouthPose, b: &MouthPose, tolerance: f32) -> bool {
    (a.open_y - b.open_y).abs() < tolerance
        && (a.jaw_open - b.jaw_open).abs() < tolerance
        && (a.form - b.form).abs() < tolerance
        && (a.shrug - b.shrug).abs() < tolerance
        && (a.funnel - b.funnel).abs() < tolerance
        && (a.pucker_widen - b.pucker_widen).abs() < tolerance
        && (a.press_lip_open - b.press_lip_open).abs() < tolerance
        && (a.mouth_x - b.mouth_x).abs() < tolerance
        && (a.cheek_puff - b.cheek_puff).abs() < tolerance
}

/// Move `current` toward `target` by factor `rate * dt` per channel.
///
/// The cheek channel follows its own rule: while the target cheek value is
/// above `neutral_threshold` it converges at `rate` like the rest, but once
/// the target drops to neutral it decays toward zero at `cheek_decay_rate`
/// (defaulting to `rate`). A plosive's puff can then collapse faster than
/// it inflated. The clamped blend factor means the result never leaves the
/// [current, target] interval, so repeated calls never overshoot.
#[inline]
pub fn converge_toward(
    current: &MouthPose,
    target: &MouthPose,
    rate: f32,
    dt: f32,
    cheek_decay_rate: Option<f32>,
    neutral_threshold: f32,
) -> MouthPose {
    let t = rate * dt;
    let mut next = blend_pose(current, target, t);

    if target.cheek_puff <= neutral_threshold {
        let decay = cheek_decay_rate.unwrap_or(rate);
        next.cheek_puff = lerp_clamped(current.cheek_puff, 0.0, decay * dt);
    }
    next
}
