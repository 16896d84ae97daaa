use super::*;

#[test]
fn progress_is_zero_before_delay_and_one_after_end() {
    let tw = Tween::new(2.0, 0.8, Ease::InQuad).unwrap();
    assert_eq!(tw.progress(0.0), 0.0);
    assert_eq!(tw.progress(2.0), 0.0);
    assert_eq!(tw.progress(2.8), 1.0);
    assert_eq!(tw.progress(100.0), 1.0);
    assert!((tw.progress(2.4) - 0.25).abs() < 1e-9);
}

#[test]
fn zero_duration_is_a_step() {
    let tw = Tween::new(1.0, 0.0, Ease::Linear).unwrap();
    assert_eq!(tw.progress(0.99), 0.0);
    assert_eq!(tw.progress(1.0), 1.0);
}

#[test]
fn value_interpolates() {
    let tw = Tween::new(0.0, 1.0, Ease::Linear).unwrap();
    assert_eq!(tw.value(30.0, 0.0, 0.5), 15.0);
    assert_eq!(tw.value(30.0, 0.0, 2.0), 0.0);
}

#[test]
fn stagger_offsets_delay_only() {
    let tw = Tween::new(3.0, 2.0, Ease::InOutExpo).unwrap();
    let third = tw.staggered(2, 0.06);
    assert!((third.delay - 3.12).abs() < 1e-12);
    assert_eq!(third.duration, 2.0);
    assert_eq!(third.ease, Ease::InOutExpo);
    assert!((third.end() - 5.12).abs() < 1e-12);
}

#[test]
fn invalid_tweens_are_rejected() {
    assert!(Tween::new(-1.0, 1.0, Ease::Linear).is_err());
    assert!(Tween::new(0.0, f64::NAN, Ease::Linear).is_err());
}
