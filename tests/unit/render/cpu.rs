use super::*;
use crate::render::grid::triangle_path;

fn vp(w: f64, h: f64) -> Viewport {
    Viewport::new(w, h).unwrap()
}

#[test]
fn surface_size_honors_device_pixel_ratio() {
    let viewport = vp(32.0, 16.0).with_device_pixel_ratio(2.0);
    let s = CpuSurface::new(&viewport).unwrap();
    assert_eq!(s.pixel_size(), (64, 32));
}

#[test]
fn oversized_surfaces_are_rejected() {
    assert!(CpuSurface::new(&vp(70_000.0, 10.0)).is_err());
}

#[test]
fn empty_surface_is_transparent() {
    let s = CpuSurface::new(&vp(8.0, 8.0)).unwrap();
    let frame = s.rasterize().unwrap();
    assert_eq!(frame.data.len(), 8 * 8 * 4);
    assert!(frame.data.iter().all(|&b| b == 0));
    assert!(frame.premultiplied);
}

#[test]
fn filled_triangle_covers_its_center() {
    let mut s = CpuSurface::new(&vp(64.0, 64.0)).unwrap();
    let path = triangle_path(Point::new(32.0, 32.0), 30.0, false);
    s.fill_path(&path, Affine::IDENTITY, Rgba8::WHITE);
    let frame = s.rasterize().unwrap();
    assert_eq!(frame.pixel(32, 40), Some([255, 255, 255, 255]));
    // Top corners lie outside an apex-up triangle.
    assert_eq!(frame.pixel(3, 4), Some([0, 0, 0, 0]));
}

#[test]
fn clear_discards_commands() {
    let mut s = CpuSurface::new(&vp(16.0, 16.0)).unwrap();
    let path = triangle_path(Point::new(8.0, 8.0), 8.0, false);
    s.fill_path(&path, Affine::IDENTITY, Rgba8::WHITE);
    assert_eq!(s.commands().len(), 1);
    s.clear();
    assert!(s.commands().is_empty());
    assert!(s.rasterize().unwrap().data.iter().all(|&b| b == 0));
}

#[test]
fn resize_changes_backing_store() {
    let mut s = CpuSurface::new(&vp(16.0, 16.0)).unwrap();
    s.resize(&vp(20.0, 10.0)).unwrap();
    assert_eq!(s.pixel_size(), (20, 10));
    assert_eq!(s.rasterize().unwrap().data.len(), 20 * 10 * 4);
}

#[test]
fn compose_puts_fill_layer_on_top_of_background() {
    let mut layers = Layers::cpu(&vp(16.0, 16.0)).unwrap();
    let frame = layers.compose(Some(Rgba8::new(0, 0, 0, 255))).unwrap();
    assert_eq!(frame.pixel(8, 8), Some([0, 0, 0, 255]));

    let path = triangle_path(Point::new(8.0, 8.0), 8.0, false);
    layers.fill.fill_path(&path, Affine::IDENTITY, Rgba8::WHITE);
    let frame = layers.compose(Some(Rgba8::new(0, 0, 0, 255))).unwrap();
    assert_eq!(frame.pixel(8, 12), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn straight_alpha_export() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![19, 19, 19, 19],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight_rgba(), vec![255, 255, 255, 19]);
    assert_eq!(frame.pixel(1, 0), None);
}
