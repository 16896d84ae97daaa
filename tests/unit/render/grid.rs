use super::*;
use crate::foundation::core::Viewport;
use crate::render::surface::{DrawCmd, RecordingSurface};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn setup() -> (GridRenderer, TriangleStore, Layers<RecordingSurface>) {
    let grid = GridConfig::default();
    let mut store = TriangleStore::new();
    store
        .regenerate(
            &grid,
            &Viewport::new(1440.0, 900.0).unwrap(),
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();
    (
        GridRenderer::new(grid, RevealParams::default()),
        store,
        Layers::new(RecordingSurface::new(), RecordingSurface::new()),
    )
}

#[test]
fn triangle_orientation() {
    let up = triangle_path(Point::new(150.0, 150.0), 150.0, false);
    let down = triangle_path(Point::new(150.0, 150.0), 150.0, true);
    let up_pts: Vec<_> = up.elements().to_vec();
    assert_eq!(up_pts[0], kurbo::PathEl::MoveTo(Point::new(150.0, 0.0)));
    assert_eq!(up_pts[1], kurbo::PathEl::LineTo(Point::new(300.0, 300.0)));
    assert_eq!(up_pts[2], kurbo::PathEl::LineTo(Point::new(0.0, 300.0)));
    assert_eq!(up_pts[3], kurbo::PathEl::ClosePath);
    let down_pts: Vec<_> = down.elements().to_vec();
    assert_eq!(down_pts[0], kurbo::PathEl::MoveTo(Point::new(150.0, 300.0)));
}

#[test]
fn cell_centers_follow_pitch_and_parallax() {
    let (r, _, _) = setup();
    let cell = TriangleCell {
        row: 2,
        col: 3,
        order: 0.0,
        scale: 0.0,
    };
    assert_eq!(r.cell_center(&cell, 0.0), Point::new(600.0, 750.0));
    assert_eq!(r.cell_center(&cell, -200.0), Point::new(400.0, 750.0));
}

#[test]
fn before_reveal_everything_is_wireframe_and_static() {
    let (r, mut store, mut layers) = setup();
    let report = r.draw_tick(&mut store, 0.3, -60.0, &mut layers);
    assert_eq!(report.outlines, 66);
    assert_eq!(report.changed, 0);
    assert_eq!(report.revealed, 0);
    assert!(!report.animating());
    assert_eq!(layers.outline.stroke_count(), 66);
    assert_eq!(layers.fill.fill_count(), 0);
    for cmd in layers.outline.commands() {
        let DrawCmd::Stroke { color, width, .. } = cmd else {
            panic!("expected only strokes");
        };
        assert_eq!(*width, 1.0);
        assert_eq!(color.a, 19);
    }
}

#[test]
fn each_tick_clears_both_layers() {
    let (r, mut store, mut layers) = setup();
    r.draw_tick(&mut store, 0.0, 0.0, &mut layers);
    r.draw_tick(&mut store, 0.0, 0.0, &mut layers);
    assert_eq!(layers.outline.clear_count(), 2);
    assert_eq!(layers.fill.clear_count(), 2);
    assert_eq!(layers.outline.stroke_count(), 66);
}

#[test]
fn half_progress_reveals_half_the_ranks() {
    let (r, mut store, mut layers) = setup();
    let mut last = TickReport::default();
    for _ in 0..100 {
        last = r.draw_tick(&mut store, 0.825, -165.0, &mut layers);
        if !last.animating() {
            break;
        }
    }
    assert!(!last.animating());

    let revealed: Vec<_> = store.cells().iter().filter(|c| c.scale == 1.0).collect();
    assert_eq!(revealed.len(), 34);
    assert!(revealed.iter().all(|c| c.order <= 0.5 + 1e-9));
    assert!(
        store
            .cells()
            .iter()
            .filter(|c| c.order > 0.5 + 1e-9)
            .all(|c| c.scale == 0.0)
    );
    assert_eq!(last.revealed, 34);
    assert_eq!(layers.fill.fill_count(), 34);
    assert_eq!(layers.outline.stroke_count(), 32);
}

#[test]
fn growing_cells_fill_on_outline_layer() {
    let (r, mut store, mut layers) = setup();
    r.draw_tick(&mut store, 1.0, -200.0, &mut layers);
    // First tick: all at 0.15 after easing; outline pass saw 0 and stroked.
    assert_eq!(layers.outline.stroke_count(), 66);
    let report = r.draw_tick(&mut store, 1.0, -200.0, &mut layers);
    assert_eq!(report.growing, 66);
    assert_eq!(report.outlines, 0);
    let DrawCmd::Fill { transform, .. } = &layers.outline.commands()[0] else {
        panic!("expected a fill");
    };
    let coeffs = transform.as_coeffs();
    assert!((coeffs[0] - 0.15 * 1.015).abs() < 1e-12);
}

#[test]
fn fills_need_the_reveal_window() {
    let (r, mut store, mut layers) = setup();
    for cell in store.cells_mut() {
        cell.scale = 1.0;
    }
    let report = r.draw_tick(&mut store, 0.5, 0.0, &mut layers);
    // Cells ease back toward 0 and nothing is filled outside the window.
    assert_eq!(report.revealed, 0);
    assert_eq!(report.changed, 66);
    assert_eq!(layers.fill.fill_count(), 0);
}
