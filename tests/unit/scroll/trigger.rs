use super::*;

#[test]
fn sticky_height_depends_on_layout_width() {
    assert_eq!(sticky_height(1440.0, 1440.0, 900.0), 900.0);
    assert_eq!(sticky_height(1920.0, 1905.0, 1000.0), 4000.0);
    // A scrollbar can pull a wide window back under the threshold.
    assert_eq!(sticky_height(1450.0, 1435.0, 900.0), 900.0);
}

#[test]
fn progress_tracks_pin_range() {
    let mut t = ScrollTrigger::new(1000.0, 900.0).unwrap();
    assert_eq!(t.progress_at(0.0), 0.0);
    assert_eq!(t.progress_at(1450.0), 0.5);
    assert_eq!(t.progress_at(5000.0), 1.0);
    assert_eq!(t.end(), 1900.0);

    assert_eq!(t.update(500.0), None);
    assert_eq!(t.update(1450.0), Some(0.5));
    assert_eq!(t.update(1450.0), None);
    assert_eq!(t.update(9999.0), Some(1.0));
    assert_eq!(t.progress(), 1.0);
}

#[test]
fn refresh_changes_range() {
    let mut t = ScrollTrigger::new(0.0, 900.0).unwrap();
    t.update(450.0);
    t.refresh(0.0, 3600.0).unwrap();
    assert_eq!(t.update(450.0), Some(0.125));
}

#[test]
fn active_only_inside_range() {
    let t = ScrollTrigger::new(100.0, 100.0).unwrap();
    assert!(!t.is_active(99.0));
    assert!(t.is_active(150.0));
    assert!(!t.is_active(201.0));
}

#[test]
fn invalid_ranges_are_rejected() {
    assert!(ScrollTrigger::new(0.0, 0.0).is_err());
    assert!(ScrollTrigger::new(f64::NAN, 10.0).is_err());
    let mut t = ScrollTrigger::new(0.0, 10.0).unwrap();
    assert!(t.refresh(0.0, -1.0).is_err());
    assert_eq!(t.end(), 10.0);
}
