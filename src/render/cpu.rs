use crate::foundation::core::{Affine, BezPath, Point, Rgba8, Viewport};
use crate::foundation::error::{RevealError, RevealResult};
use crate::render::composite::{fill_in_place, over_in_place};
use crate::render::surface::{DrawCmd, DrawSurface, Layers, RecordingSurface};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are premultiplied alpha; the `premultiplied` flag keeps that explicit at API
/// boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy of the pixels with straight alpha, as image encoders expect.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&crate::render::composite::unpremultiply([
                px[0], px[1], px[2], px[3],
            ]));
        }
        out
    }
}

/// Surface rasterized on the CPU by `vello_cpu`.
///
/// Commands are recorded in CSS pixels and replayed into a fresh pixmap, scaled by the device
/// pixel ratio, when [`CpuSurface::rasterize`] is called.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    viewport: Viewport,
    width: u16,
    height: u16,
    recorder: RecordingSurface,
}

impl CpuSurface {
    /// Create a surface sized for `viewport`.
    pub fn new(viewport: &Viewport) -> RevealResult<Self> {
        let (width, height) = pixmap_dims(viewport)?;
        Ok(Self {
            viewport: *viewport,
            width,
            height,
            recorder: RecordingSurface::new(),
        })
    }

    /// Backing-store size in physical pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }

    /// Commands recorded since the last clear.
    pub fn commands(&self) -> &[DrawCmd] {
        self.recorder.commands()
    }

    /// Replay the recorded commands into a premultiplied RGBA8 frame with a transparent
    /// background.
    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn rasterize(&self) -> RevealResult<FrameRGBA> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        let dpr = Affine::scale(self.viewport.device_pixel_ratio);

        for cmd in self.recorder.commands() {
            match cmd {
                DrawCmd::Stroke { path, color, width } => {
                    ctx.set_transform(affine_to_cpu(dpr));
                    ctx.set_paint(color_to_cpu(*color));
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                    ctx.stroke_path(&bezpath_to_cpu(path));
                }
                DrawCmd::Fill {
                    path,
                    transform,
                    color,
                } => {
                    ctx.set_transform(affine_to_cpu(dpr * *transform));
                    ctx.set_paint(color_to_cpu(*color));
                    ctx.fill_path(&bezpath_to_cpu(path));
                }
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl DrawSurface for CpuSurface {
    fn resize(&mut self, viewport: &Viewport) -> RevealResult<()> {
        let (width, height) = pixmap_dims(viewport)?;
        self.viewport = *viewport;
        self.width = width;
        self.height = height;
        self.recorder.resize(viewport)
    }

    fn clear(&mut self) {
        self.recorder.clear();
    }

    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64) {
        self.recorder.stroke_path(path, color, width);
    }

    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Rgba8) {
        self.recorder.fill_path(path, transform, color);
    }
}

impl Layers<CpuSurface> {
    /// CPU layers sized for `viewport`.
    pub fn cpu(viewport: &Viewport) -> RevealResult<Self> {
        let outline = CpuSurface::new(viewport)?;
        let fill = CpuSurface::new(viewport)?;
        Ok(Self::new(outline, fill))
    }

    /// Flatten background, outline layer and fill layer into one frame.
    pub fn compose(&self, background: Option<Rgba8>) -> RevealResult<FrameRGBA> {
        let mut frame = self.outline.rasterize()?;
        let fill = self.fill.rasterize()?;
        if frame.width != fill.width || frame.height != fill.height {
            return Err(RevealError::render("outline/fill layer size mismatch"));
        }

        if let Some(bg) = background {
            let mut base = vec![0u8; frame.data.len()];
            fill_in_place(&mut base, bg.to_premul());
            over_in_place(&mut base, &frame.data)?;
            frame.data = base;
        }
        over_in_place(&mut frame.data, &fill.data)?;
        Ok(frame)
    }
}

fn pixmap_dims(viewport: &Viewport) -> RevealResult<(u16, u16)> {
    let (w, h) = viewport.pixel_size();
    let width: u16 = w
        .try_into()
        .map_err(|_| RevealError::render("surface width exceeds u16"))?;
    let height: u16 = h
        .try_into()
        .map_err(|_| RevealError::render("surface height exceeds u16"))?;
    Ok((width, height))
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
