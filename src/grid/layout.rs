//! Grid sizing and randomized reveal order.
//!
//! The grid covers the viewport plus the horizontal parallax travel, at half-cell pitch in both
//! axes so neighbouring up/down triangles interlock.

use rand::Rng;

use crate::foundation::core::Viewport;
use crate::foundation::error::{RevealError, RevealResult};

/// Upper bound on `rows * cols` for one grid.
pub const MAX_CELLS: usize = 1 << 22;

/// Static grid geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Triangle edge box size in CSS pixels.
    pub cell_size: f64,
    /// Extra width covered to the right so the parallax shift never exposes an edge.
    pub scroll_offset: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 300.0,
            scroll_offset: 200.0,
        }
    }
}

impl GridConfig {
    /// Check geometric invariants.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(RevealError::validation(format!(
                "grid cell_size must be finite and > 0, got {}",
                self.cell_size
            )));
        }
        if !self.scroll_offset.is_finite() || self.scroll_offset < 0.0 {
            return Err(RevealError::validation(format!(
                "grid scroll_offset must be finite and >= 0, got {}",
                self.scroll_offset
            )));
        }
        Ok(())
    }

    /// Grid pitch: half the cell size.
    pub fn half_cell(&self) -> f64 {
        self.cell_size * 0.5
    }
}

/// Row/column counts of a generated grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridDims {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
}

impl GridDims {
    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major index of `(row, col)`, or `None` when out of range.
    pub fn index_of(&self, row: u32, col: u32) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }
}

/// Compute grid dimensions for a viewport.
///
/// `cols = ceil((width + offset) / (cell/2))`, `rows = ceil(height / (cell/2))`. Grids above
/// [`MAX_CELLS`] are rejected.
pub fn grid_dims(config: &GridConfig, viewport: &Viewport) -> RevealResult<GridDims> {
    config.validate()?;
    let pitch = config.half_cell();
    let cols = ((viewport.width + config.scroll_offset) / pitch).ceil();
    let rows = (viewport.height / pitch).ceil();
    if cols > f64::from(u32::MAX) || rows > f64::from(u32::MAX) {
        return Err(RevealError::validation("grid dimensions overflow u32"));
    }
    let dims = GridDims {
        rows: rows as u32,
        cols: cols as u32,
    };
    match (dims.rows as usize).checked_mul(dims.cols as usize) {
        Some(n) if n <= MAX_CELLS => Ok(dims),
        _ => Err(RevealError::validation(format!(
            "grid of {} x {} cells exceeds the {MAX_CELLS} cell limit",
            dims.rows, dims.cols
        ))),
    }
}

/// In-place Fisher–Yates shuffle drawing `j` uniformly from `0..=i` for `i = n-1 .. 1`.
pub fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Reveal order per cell, indexed row-major.
///
/// Cells are listed row-major, shuffled, and the cell at shuffled position `k` receives order
/// `k / T`. The result is therefore a permutation of `{0, 1/T, ..., (T-1)/T}`.
pub fn reveal_orders<R: Rng>(dims: GridDims, rng: &mut R) -> Vec<f64> {
    let total = dims.cell_count();
    let mut positions: Vec<usize> = (0..total).collect();
    fisher_yates(&mut positions, rng);

    let mut orders = vec![0.0; total];
    for (rank, &cell) in positions.iter().enumerate() {
        orders[cell] = rank as f64 / total as f64;
    }
    orders
}

#[cfg(test)]
#[path = "../../tests/unit/grid/layout.rs"]
mod tests;
