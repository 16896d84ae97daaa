use crate::foundation::core::{Affine, BezPath, Rgba8, Viewport};
use crate::foundation::error::RevealResult;

/// Two-dimensional drawing target in CSS pixel space.
///
/// Implementations own any device-pixel-ratio scaling; callers always draw in CSS pixels.
pub trait DrawSurface {
    /// Match the backing store to `viewport`. Existing content is discarded.
    fn resize(&mut self, viewport: &Viewport) -> RevealResult<()>;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Stroke `path` with a solid color.
    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64);

    /// Fill `path` after applying `transform`.
    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Rgba8);
}

/// A recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Stroked outline.
    Stroke {
        /// Geometry in CSS pixels.
        path: BezPath,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width in CSS pixels.
        width: f64,
    },
    /// Transformed fill.
    Fill {
        /// Geometry in CSS pixels, before `transform`.
        path: BezPath,
        /// Transform applied to `path`.
        transform: Affine,
        /// Fill color.
        color: Rgba8,
    },
}

/// Surface that keeps the commands issued since the last clear.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    viewport: Option<Viewport>,
    commands: Vec<DrawCmd>,
    clears: u64,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Viewport from the last resize.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Commands issued since the last clear.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Number of times the surface was cleared.
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    /// Number of stroke commands currently recorded.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Stroke { .. }))
            .count()
    }

    /// Number of fill commands currently recorded.
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Fill { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, viewport: &Viewport) -> RevealResult<()> {
        self.viewport = Some(*viewport);
        self.commands.clear();
        Ok(())
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64) {
        self.commands.push(DrawCmd::Stroke {
            path: path.clone(),
            color,
            width,
        });
    }

    fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Rgba8) {
        self.commands.push(DrawCmd::Fill {
            path: path.clone(),
            transform,
            color,
        });
    }
}

/// The two stacked drawing layers: wireframes underneath, solid triangles on top.
#[derive(Clone, Debug, Default)]
pub struct Layers<S> {
    /// Unrevealed wireframes and in-flight fills.
    pub outline: S,
    /// Fully revealed solid triangles.
    pub fill: S,
}

impl<S: DrawSurface> Layers<S> {
    /// Pair two surfaces.
    pub fn new(outline: S, fill: S) -> Self {
        Self { outline, fill }
    }

    pub(crate) fn resize(&mut self, viewport: &Viewport) -> RevealResult<()> {
        self.outline.resize(viewport)?;
        self.fill.resize(viewport)
    }

    pub(crate) fn clear(&mut self) {
        self.outline.clear();
        self.fill.clear();
    }
}
