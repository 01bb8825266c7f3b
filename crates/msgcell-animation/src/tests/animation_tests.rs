use super::*;

#[test]
fn inverse_lerp_is_unclamped() {
    assert!((inverse_lerp(32.0, 10.0, 65.0) - 0.4).abs() < 1e-6);
    assert!(inverse_lerp(-10.0, 0.0, 55.0) < 0.0);
    assert!(inverse_lerp(110.0, 0.0, 55.0) > 1.0);
}

#[test]
fn inverse_lerp_of_degenerate_range_is_complete() {
    assert_eq!(inverse_lerp(3.0, 5.0, 5.0), 1.0);
    assert_eq!(inverse_lerp(5.0, 5.0, 5.0), 1.0);
}

#[test]
fn linear_tween_can_begin_from_current_state() {
    let spec = AnimationSpec::linear(100);
    assert_eq!(spec.easing, Easing::LinearEasing);
    assert_eq!(spec.duration_millis, 100);
    assert!(!spec.begin_from_current_state);

    let retargeted = spec.beginning_from_current_state();
    assert!(retargeted.begin_from_current_state);
    assert_eq!(retargeted.duration_millis, 100);
}

#[test]
fn tween_keeps_its_easing() {
    let spec = AnimationSpec::tween(200, Easing::EaseInOut);
    assert_eq!(spec, AnimationSpec {
        duration_millis: 200,
        easing: Easing::EaseInOut,
        begin_from_current_state: false,
    });
}
