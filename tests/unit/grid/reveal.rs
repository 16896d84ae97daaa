use super::*;

fn cell(order: f64, scale: f64) -> TriangleCell {
    TriangleCell {
        row: 0,
        col: 0,
        order,
        scale,
    }
}

#[test]
fn no_reveal_before_threshold() {
    let p = RevealParams::default();
    for scroll in [0.0, 0.1, 0.5, 0.65] {
        assert_eq!(p.animation_progress(scroll), 0.0);
        assert!(!p.fill_allowed(scroll));
    }
    assert_eq!(target_scale(0.0, 0.0), 0.0);
    assert_eq!(target_scale(1.0 / 66.0, 0.0), 0.0);
    assert_eq!(target_scale(0.0, 1e-6), 1.0);
}

#[test]
fn trailing_window_maps_linearly() {
    let p = RevealParams::default();
    assert!((p.animation_progress(0.825) - 0.5).abs() < 1e-12);
    assert!((p.animation_progress(1.0) - 1.0).abs() < 1e-12);
    assert!(p.fill_allowed(0.66));
    assert_eq!(p.animation_progress(5.0), 1.0);
}

#[test]
fn targets_split_on_order() {
    let a = 0.5;
    assert_eq!(target_scale(0.25, a), 1.0);
    assert_eq!(target_scale(0.5, a), 1.0);
    assert_eq!(target_scale(0.51, a), 0.0);
}

#[test]
fn rank_at_exact_progress_is_revealed_despite_float_error() {
    let p = RevealParams::default();
    let a = p.animation_progress(0.825);
    assert!(a < 0.5);
    assert_eq!(target_scale(33.0 / 66.0, a), 1.0);
    assert_eq!(target_scale(34.0 / 66.0, a), 0.0);
}

#[test]
fn ease_step_is_fifteen_percent() {
    let p = RevealParams::default();
    let mut c = cell(0.0, 0.0);
    assert!(ease_cell(&mut c, 1.0, &p));
    assert!((c.scale - 0.15).abs() < 1e-12);
    assert!(ease_cell(&mut c, 1.0, &p));
    assert!((c.scale - 0.2775).abs() < 1e-12);
}

#[test]
fn converges_to_one_in_bounded_ticks() {
    let p = RevealParams::default();
    let mut c = cell(0.0, 0.0);
    let mut ticks = 0;
    while ease_cell(&mut c, 1.0, &p) {
        ticks += 1;
        assert!(ticks < 64, "did not settle");
    }
    assert_eq!(c.scale, 1.0);
    assert!(p.is_fully_scaled(c.scale));
    assert!(ticks > 20);
}

#[test]
fn converges_back_to_zero() {
    let p = RevealParams::default();
    let mut c = cell(0.9, 1.0);
    let mut ticks = 0;
    while ease_cell(&mut c, 0.0, &p) {
        ticks += 1;
        assert!(ticks < 64);
    }
    assert_eq!(c.scale, 0.0);
}

#[test]
fn settled_cell_reports_no_change() {
    let p = RevealParams::default();
    let mut c = cell(0.0, 1.0);
    assert!(!ease_cell(&mut c, 1.0, &p));
    let mut c = cell(0.0, 0.0);
    assert!(!ease_cell(&mut c, 0.0, &p));
}

#[test]
fn parallax_shifts_left() {
    let p = RevealParams::default();
    assert_eq!(p.canvas_x(0.0), 0.0);
    assert_eq!(p.canvas_x(0.5), -100.0);
    assert_eq!(p.canvas_x(1.0), -200.0);
}

#[test]
fn defaults_validate_and_bad_values_do_not() {
    assert!(RevealParams::default().validate().is_ok());
    let bad = RevealParams {
        reveal_start: 1.0,
        ..RevealParams::default()
    };
    assert!(bad.validate().is_err());
    let bad = RevealParams {
        ease_factor: 0.0,
        ..RevealParams::default()
    };
    assert!(bad.validate().is_err());
    let bad = RevealParams {
        overdraw: 0.5,
        ..RevealParams::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn outline_color_matches_faint_white() {
    let p = RevealParams::default();
    assert_eq!(p.outline_color, Rgba8::new(255, 255, 255, 19));
}
