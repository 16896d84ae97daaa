use rand::Rng;

use crate::foundation::core::Viewport;
use crate::foundation::error::RevealResult;
use crate::grid::layout::{GridConfig, GridDims, grid_dims, reveal_orders};

/// One triangle of the reveal grid.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TriangleCell {
    /// Grid row (fixed at creation).
    pub row: u32,
    /// Grid column (fixed at creation).
    pub col: u32,
    /// Normalized reveal rank in `[0, 1)`.
    pub order: f64,
    /// Current render scale in `[0, 1]`.
    pub scale: f64,
}

impl TriangleCell {
    /// Apex-down cells sit on odd `row + col`.
    pub fn flipped(&self) -> bool {
        (self.row + self.col) % 2 != 0
    }
}

/// All cells of the current grid, stored row-major.
#[derive(Clone, Debug, Default)]
pub struct TriangleStore {
    dims: Option<GridDims>,
    cells: Vec<TriangleCell>,
}

impl TriangleStore {
    /// Empty store; call [`TriangleStore::regenerate`] before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every cell and build a fresh grid for `viewport`.
    ///
    /// All scales restart at 0.
    #[tracing::instrument(skip(self, rng), fields(width = viewport.width, height = viewport.height))]
    pub fn regenerate<R: Rng>(
        &mut self,
        config: &GridConfig,
        viewport: &Viewport,
        rng: &mut R,
    ) -> RevealResult<GridDims> {
        let dims = grid_dims(config, viewport)?;
        let orders = reveal_orders(dims, rng);

        self.cells.clear();
        self.cells.reserve(dims.cell_count());
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                let idx = row as usize * dims.cols as usize + col as usize;
                self.cells.push(TriangleCell {
                    row,
                    col,
                    order: orders[idx],
                    scale: 0.0,
                });
            }
        }
        self.dims = Some(dims);

        tracing::debug!(
            rows = dims.rows,
            cols = dims.cols,
            "triangle grid regenerated"
        );
        Ok(dims)
    }

    /// Dimensions of the current grid, if generated.
    pub fn dims(&self) -> Option<GridDims> {
        self.dims
    }

    /// Cell at `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> Option<&TriangleCell> {
        let idx = self.dims?.index_of(row, col)?;
        self.cells.get(idx)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[TriangleCell] {
        &self.cells
    }

    /// Mutable cells in row-major order.
    pub fn cells_mut(&mut self) -> &mut [TriangleCell] {
        &mut self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return `true` before the first regeneration.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/store.rs"]
mod tests;
