use super::*;

const BOUNDED: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InOutExpo,
];

#[test]
fn endpoints_are_stable() {
    for ease in BOUNDED {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in BOUNDED.into_iter().chain([Ease::ScrollSettle]) {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn scroll_settle_caps_at_one() {
    assert!((Ease::ScrollSettle.apply(0.0) - 0.001).abs() < 1e-12);
    assert_eq!(Ease::ScrollSettle.apply(1.0), 1.0);
    // 1.001 - 2^-10 is already above 1 before t reaches 1.
    assert_eq!(Ease::ScrollSettle.apply(0.999), 1.0);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-3.0), 0.0);
    assert_eq!(Ease::Linear.apply(7.0), 1.0);
}

#[test]
fn tween_library_aliases_parse() {
    let e: Ease = serde_json::from_str("\"power1.in\"").unwrap();
    assert_eq!(e, Ease::InQuad);
    let e: Ease = serde_json::from_str("\"expo.inOut\"").unwrap();
    assert_eq!(e, Ease::InOutExpo);
    let e: Ease = serde_json::from_str("\"OutCubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
}
