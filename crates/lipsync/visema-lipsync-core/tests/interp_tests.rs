use visema_lipsync_core::interp::{
    approx_eq, blend_pose, converge_toward, ease_in_out_quad, lerp_clamped, DEFAULT_TOLERANCE,
};
use visema_lipsync_core::MouthPose;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn sample_pose() -> MouthPose {
    MouthPose {
        open_y: 0.9,
        jaw_open: 0.8,
        form: -0.3,
        shrug: 0.2,
        funnel: 0.5,
        pucker_widen: -0.6,
        press_lip_open: 0.4,
        mouth_x: 0.1,
        cheek_puff: 0.35,
    }
}

#[test]
fn lerp_clamps_t_outside_unit_interval() {
    approx(lerp_clamped(1.0, 3.0, -0.5), 1.0, 0.0);
    approx(lerp_clamped(1.0, 3.0, 1.5), 3.0, 0.0);
    approx(lerp_clamped(1.0, 3.0, 0.5), 2.0, 1e-6);
    // Reversed endpoints still stay within [min, max]
    approx(lerp_clamped(3.0, 1.0, 2.0), 1.0, 0.0);
}

#[test]
fn ease_endpoints_and_midpoint() {
    approx(ease_in_out_quad(0.0), 0.0, 0.0);
    approx(ease_in_out_quad(0.5), 0.5, 1e-6);
    approx(ease_in_out_quad(1.0), 1.0, 0.0);
    // Clamped outside [0,1]
    approx(ease_in_out_quad(-2.0), 0.0, 0.0);
    approx(ease_in_out_quad(2.0), 1.0, 0.0);
}

#[test]
fn ease_is_monotonic_on_unit_interval() {
    let mut prev = ease_in_out_quad(0.0);
    for i in 1..=100 {
        let t = i as f32 / 100.0;
        let v = ease_in_out_quad(t);
        assert!(v >= prev, "ease decreased at t={t}: {v} < {prev}");
        prev = v;
    }
}

#[test]
fn blend_endpoints_are_exact() {
    let a = sample_pose();
    let b = MouthPose::NEUTRAL;
    assert_eq!(blend_pose(&a, &b, 0.0), a);
    assert_eq!(blend_pose(&a, &b, 1.0), b);
}

#[test]
fn approx_eq_respects_tolerance() {
    let a = sample_pose();
    let mut b = a;
    b.funnel += 0.0009;
    assert!(approx_eq(&a, &b, DEFAULT_TOLERANCE));
    b.funnel = a.funnel + 0.002;
    assert!(!approx_eq(&a, &b, DEFAULT_TOLERANCE));
}

/// it should strictly shrink the error every step and never overshoot
#[test]
fn converge_never_overshoots() {
    let target = sample_pose();
    let mut current = MouthPose::NEUTRAL;
    let mut prev_err = (target.open_y - current.open_y).abs();

    for _ in 0..200 {
        current = converge_toward(&current, &target, 22.0, 1.0 / 60.0, None, 0.02);
        assert!(!current.has_nan());
        let err = (target.open_y - current.open_y).abs();
        assert!(err <= prev_err, "error grew: {err} > {prev_err}");
        // Never past the target
        assert!(current.open_y <= target.open_y + 1e-6);
        // Strict decrease until float resolution is reached
        if err > 1e-5 {
            assert!(err < prev_err, "error did not shrink: {err}");
        }
        prev_err = err;
    }
    assert!(approx_eq(&current, &target, 0.01));
}

#[test]
fn converge_handles_rate_dt_above_one() {
    let target = sample_pose();
    // factor 2.0: the internal clamp pins the blend at the target
    let current = converge_toward(&MouthPose::NEUTRAL, &target, 120.0, 1.0 / 60.0, None, 0.02);
    assert_eq!(current, target);
}

#[test]
fn cheek_decays_at_its_own_rate_when_target_is_neutral() {
    let mut current = MouthPose::NEUTRAL;
    current.cheek_puff = 0.4;
    current.open_y = 0.4;

    // Target neutral: cheek uses the faster decay rate, other channels the base rate
    let next = converge_toward(&current, &MouthPose::NEUTRAL, 6.0, 0.1, Some(9.0), 0.02);
    approx(next.open_y, 0.4 * (1.0 - 0.6), 1e-6);
    approx(next.cheek_puff, 0.4 * (1.0 - 0.9), 1e-6);
    assert!(next.cheek_puff < next.open_y);
}

#[test]
fn cheek_converges_normally_while_target_is_puffed() {
    let mut current = MouthPose::NEUTRAL;
    let mut target = MouthPose::NEUTRAL;
    target.cheek_puff = 0.5;

    current = converge_toward(&current, &target, 6.0, 0.1, Some(9.0), 0.02);
    approx(current.cheek_puff, 0.5 * 0.6, 1e-6);
}

#[test]
fn cheek_decay_defaults_to_base_rate() {
    let mut current = MouthPose::NEUTRAL;
    current.cheek_puff = 0.4;
    let next = converge_toward(&current, &MouthPose::NEUTRAL, 6.0, 0.1, None, 0.02);
    approx(next.cheek_puff, 0.4 * (1.0 - 0.6), 1e-6);
}
