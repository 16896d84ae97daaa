use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::foundation::core::Viewport;
use crate::foundation::error::{RevealError, RevealResult};
use crate::grid::layout::{GridConfig, GridDims};
use crate::grid::reveal::RevealParams;
use crate::grid::store::TriangleStore;
use crate::render::grid::{GridRenderer, TickReport};
use crate::render::surface::{DrawSurface, Layers};
use crate::schedule::driver::{TickDriver, TickId};

/// Result of one [`RevealController::draw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    /// What the renderer did.
    pub report: TickReport,
    /// Follow-up tick, when cells are still moving or progress is pinned at 1.
    pub next_tick: Option<TickId>,
}

/// Owns all state of the triangle-grid reveal: viewport, cells, layers, tick driver, random
/// source and the current scroll progress.
pub struct RevealController<S, R = StdRng> {
    grid: GridConfig,
    renderer: GridRenderer,
    viewport: Viewport,
    store: TriangleStore,
    layers: Layers<S>,
    driver: TickDriver,
    rng: R,
    scroll_progress: f64,
    canvas_x: f64,
}

impl<S: DrawSurface> RevealController<S, StdRng> {
    /// Controller with a seeded standard RNG.
    pub fn seeded(
        grid: GridConfig,
        params: RevealParams,
        viewport: Viewport,
        layers: Layers<S>,
        seed: u64,
    ) -> RevealResult<Self> {
        Self::new(grid, params, viewport, layers, StdRng::seed_from_u64(seed))
    }
}

impl<S: DrawSurface, R: Rng> RevealController<S, R> {
    /// Build the grid for `viewport` and draw the resting frame (progress 0).
    pub fn new(
        grid: GridConfig,
        params: RevealParams,
        viewport: Viewport,
        mut layers: Layers<S>,
        mut rng: R,
    ) -> RevealResult<Self> {
        grid.validate()?;
        params.validate()?;
        layers.resize(&viewport)?;

        let mut store = TriangleStore::new();
        store.regenerate(&grid, &viewport, &mut rng)?;

        let mut this = Self {
            grid,
            renderer: GridRenderer::new(grid, params),
            viewport,
            store,
            layers,
            driver: TickDriver::new(),
            rng,
            scroll_progress: 0.0,
            canvas_x: 0.0,
        };
        this.draw(0.0);
        Ok(this)
    }

    /// Scroll-trigger update: set the parallax offset and redraw at `progress`.
    pub fn on_scroll(&mut self, progress: f64) -> RevealResult<DrawOutcome> {
        if !progress.is_finite() {
            return Err(RevealError::validation(format!(
                "scroll progress must be finite, got {progress}"
            )));
        }
        let progress = progress.clamp(0.0, 1.0);
        self.canvas_x = self.renderer.params().canvas_x(progress);
        Ok(self.draw(progress))
    }

    /// Cancel any pending tick, draw one frame at `progress`, and request a follow-up tick when
    /// any cell moved or `progress` is exactly 1.
    pub fn draw(&mut self, progress: f64) -> DrawOutcome {
        self.driver.cancel();
        self.scroll_progress = progress;

        let report =
            self.renderer
                .draw_tick(&mut self.store, progress, self.canvas_x, &mut self.layers);

        let next_tick = if report.animating() || progress == 1.0 {
            Some(self.driver.request_tick())
        } else {
            None
        };
        DrawOutcome { report, next_tick }
    }

    /// Run the pending tick `id`. Stale ids are ignored and return `None`.
    pub fn fire_tick(&mut self, id: TickId) -> Option<DrawOutcome> {
        if !self.driver.take_due(id) {
            return None;
        }
        Some(self.draw(self.scroll_progress))
    }

    /// Fire pending ticks until the driver is idle or `max_ticks` ran. Returns ticks run.
    pub fn run_pending(&mut self, max_ticks: usize) -> usize {
        let mut ran = 0;
        while ran < max_ticks {
            let Some(id) = self.driver.pending() else {
                break;
            };
            if self.fire_tick(id).is_some() {
                ran += 1;
            }
        }
        ran
    }

    /// Regenerate the grid for a new viewport, unconditionally discarding all cells, and redraw
    /// at the current progress.
    ///
    /// On error the controller keeps its previous viewport, cells, layers and pending tick.
    #[tracing::instrument(skip(self), fields(width = viewport.width, height = viewport.height))]
    pub fn resize(&mut self, viewport: Viewport) -> RevealResult<GridDims> {
        let mut store = TriangleStore::new();
        let dims = store.regenerate(&self.grid, &viewport, &mut self.rng)?;
        self.layers.resize(&viewport)?;

        self.driver.cancel();
        self.store = store;
        self.viewport = viewport;
        self.draw(self.scroll_progress);
        Ok(dims)
    }

    /// Current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Cell state.
    pub fn store(&self) -> &TriangleStore {
        &self.store
    }

    /// Drawing layers.
    pub fn layers(&self) -> &Layers<S> {
        &self.layers
    }

    /// Tick bookkeeping.
    pub fn driver(&self) -> &TickDriver {
        &self.driver
    }

    /// Last drawn scroll progress.
    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    /// Current parallax offset in CSS pixels.
    pub fn canvas_x(&self) -> f64 {
        self.canvas_x
    }

    /// Reveal progress derived from the last scroll progress.
    pub fn animation_progress(&self) -> f64 {
        self.renderer
            .params()
            .animation_progress(self.scroll_progress)
    }

    /// Reveal tuning in use.
    pub fn params(&self) -> &RevealParams {
        self.renderer.params()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/controller.rs"]
mod tests;
