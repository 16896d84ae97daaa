//! Per-tick drawing of the triangle grid onto the outline and fill layers.

use crate::foundation::core::{Affine, BezPath, Point};
use crate::grid::layout::GridConfig;
use crate::grid::reveal::{RevealParams, ease_cell, target_scale};
use crate::grid::store::{TriangleCell, TriangleStore};
use crate::render::surface::{DrawSurface, Layers};

/// Counters from one rendered tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Cells whose scale changed this tick.
    pub changed: usize,
    /// Wireframes stroked on the outline layer.
    pub outlines: usize,
    /// In-flight scaled fills drawn on the outline layer.
    pub growing: usize,
    /// Fully revealed fills drawn on the fill layer.
    pub revealed: usize,
}

impl TickReport {
    /// Any cell still moving toward its target.
    pub fn animating(&self) -> bool {
        self.changed > 0
    }
}

/// Triangle with apex up (`flipped == false`) or down, inscribed in a `2*half` square at `center`.
pub fn triangle_path(center: Point, half: f64, flipped: bool) -> BezPath {
    let Point { x, y } = center;
    let mut path = BezPath::new();
    if flipped {
        path.move_to((x, y + half));
        path.line_to((x + half, y - half));
        path.line_to((x - half, y - half));
    } else {
        path.move_to((x, y - half));
        path.line_to((x + half, y + half));
        path.line_to((x - half, y + half));
    }
    path.close_path();
    path
}

/// Scale about `center`.
fn scale_about(center: Point, factor: f64) -> Affine {
    let c = center.to_vec2();
    Affine::translate(c) * Affine::scale(factor) * Affine::translate(-c)
}

/// Draws the grid for a given scroll progress.
#[derive(Clone, Copy, Debug)]
pub struct GridRenderer {
    grid: GridConfig,
    params: RevealParams,
}

impl GridRenderer {
    /// Create a renderer for a grid geometry and reveal tuning.
    pub fn new(grid: GridConfig, params: RevealParams) -> Self {
        Self { grid, params }
    }

    /// Reveal tuning in use.
    pub fn params(&self) -> &RevealParams {
        &self.params
    }

    /// Center of `cell` shifted horizontally by `canvas_x`.
    ///
    /// Columns sit at half-cell pitch so neighbouring up/down triangles interlock; rows sit at a
    /// full cell pitch.
    pub fn cell_center(&self, cell: &TriangleCell, canvas_x: f64) -> Point {
        let size = self.grid.cell_size;
        Point::new(
            f64::from(cell.col) * size * 0.5 + size / 2.0 + canvas_x,
            f64::from(cell.row) * size + size / 2.0,
        )
    }

    /// Clear both layers, draw one frame, and advance every cell's scale by one tick.
    ///
    /// The outline pass runs on pre-tick scales: each unrevealed cell is a wireframe while below
    /// the visibility threshold, or a growing fill once past it (only inside the reveal window).
    /// Scales then ease toward their targets, and fully scaled cells are filled on the fill layer.
    pub fn draw_tick<S: DrawSurface>(
        &self,
        store: &mut TriangleStore,
        scroll_progress: f64,
        canvas_x: f64,
        layers: &mut Layers<S>,
    ) -> TickReport {
        let p = &self.params;
        let half = self.grid.half_cell();
        let fill_allowed = p.fill_allowed(scroll_progress);
        let animation_progress = p.animation_progress(scroll_progress);
        let mut report = TickReport::default();

        layers.clear();

        for cell in store.cells().iter().filter(|c| c.scale < 1.0) {
            let center = self.cell_center(cell, canvas_x);
            let path = triangle_path(center, half, cell.flipped());
            if cell.scale < p.visibility_threshold {
                layers
                    .outline
                    .stroke_path(&path, p.outline_color, p.line_width);
                report.outlines += 1;
            } else if fill_allowed {
                let xf = scale_about(center, cell.scale * p.overdraw);
                layers.outline.fill_path(&path, xf, p.fill_color);
                report.growing += 1;
            }
        }

        for cell in store.cells_mut() {
            let target = target_scale(cell.order, animation_progress);
            if ease_cell(cell, target, p) {
                report.changed += 1;
            }

            if fill_allowed && p.is_fully_scaled(cell.scale) {
                let center = self.cell_center(cell, canvas_x);
                let path = triangle_path(center, half, cell.flipped());
                let xf = scale_about(center, cell.scale * p.overdraw);
                layers.fill.fill_path(&path, xf, p.fill_color);
                report.revealed += 1;
            }
        }

        report
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/grid.rs"]
mod tests;
