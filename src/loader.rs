//! Page-load choreography: a row of overlay blocks that collapse, a fading loader label, and
//! intro items that rise into place. Smooth scroll stays locked until the timeline completes.

use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::foundation::error::{RevealError, RevealResult};

/// Screen width at or below which the overlay uses the minimum block count.
pub const NARROW_SCREEN_MAX: f64 = 425.0;
/// Screen width at or above which the overlay uses the maximum block count.
pub const WIDE_SCREEN_MIN: f64 = 1440.0;

const MIN_BLOCKS: usize = 5;
const MAX_BLOCKS: usize = 20;
const INTERP_FROM: f64 = 426.0;

/// Number of overlay blocks for a screen width.
pub fn block_count(screen_width: f64) -> usize {
    if screen_width <= NARROW_SCREEN_MAX {
        return MIN_BLOCKS;
    }
    if screen_width >= WIDE_SCREEN_MIN {
        return MAX_BLOCKS;
    }
    let p = (screen_width - INTERP_FROM) / (WIDE_SCREEN_MIN - INTERP_FROM);
    let span = (MAX_BLOCKS - MIN_BLOCKS) as f64;
    (MIN_BLOCKS as f64 + p * span).round() as usize
}

/// Overlay block geometry in percent of the overlay width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Block {
    /// Left edge.
    pub left_pct: f64,
    /// Current width.
    pub width_pct: f64,
}

/// Timeline tuning. Times are in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoaderParams {
    /// Collapse of the first block; later blocks are staggered.
    pub blocks: Tween,
    /// Delay between consecutive block collapses.
    pub block_stagger: f64,
    /// Loader label fade-out.
    pub label: Tween,
    /// Horizontal drift of the label while fading, in pixels.
    pub label_shift_x: f64,
    /// Entrance of the first intro item; later items are staggered.
    pub items: Tween,
    /// Delay between consecutive item entrances.
    pub item_stagger: f64,
    /// Starting vertical offset of intro items, in pixels.
    pub item_rise: f64,
}

impl Default for LoaderParams {
    fn default() -> Self {
        Self {
            blocks: Tween {
                delay: 2.0,
                duration: 0.8,
                ease: Ease::InQuad,
            },
            block_stagger: 0.04,
            label: Tween {
                delay: 1.6,
                duration: 1.0,
                ease: Ease::InOutExpo,
            },
            label_shift_x: 2.0,
            items: Tween {
                delay: 3.0,
                duration: 2.0,
                ease: Ease::InOutExpo,
            },
            item_stagger: 0.06,
            item_rise: 30.0,
        }
    }
}

impl LoaderParams {
    /// Check tweens and staggers.
    pub fn validate(&self) -> RevealResult<()> {
        self.blocks.validate()?;
        self.label.validate()?;
        self.items.validate()?;
        for (name, v) in [
            ("block_stagger", self.block_stagger),
            ("item_stagger", self.item_stagger),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(RevealError::validation(format!(
                    "loader {name} must be finite and >= 0"
                )));
            }
        }
        if !self.label_shift_x.is_finite() || !self.item_rise.is_finite() {
            return Err(RevealError::validation("loader offsets must be finite"));
        }
        Ok(())
    }
}

/// Intro item transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemFrame {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical offset in pixels.
    pub y: f64,
}

/// Everything the host applies at one instant of the load animation.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadFrame {
    /// Overlay blocks.
    pub blocks: Vec<Block>,
    /// Loader label horizontal offset.
    pub label_x: f64,
    /// Loader label opacity.
    pub label_opacity: f64,
    /// Intro items, in document order.
    pub items: Vec<ItemFrame>,
    /// `true` once the last intro item has finished.
    pub complete: bool,
}

/// Load animation sampled by elapsed time since page load.
#[derive(Clone, Debug)]
pub struct LoadTimeline {
    params: LoaderParams,
    block_count: usize,
    item_count: usize,
    completion_reported: bool,
}

impl LoadTimeline {
    /// Build the timeline for a screen width and a number of intro items.
    #[tracing::instrument(skip(params))]
    pub fn new(params: LoaderParams, screen_width: f64, item_count: usize) -> RevealResult<Self> {
        params.validate()?;
        if !screen_width.is_finite() || screen_width < 0.0 {
            return Err(RevealError::validation(
                "screen width must be finite and >= 0",
            ));
        }
        let block_count = block_count(screen_width);
        tracing::debug!(screen_width, block_count, "generated loader blocks");
        Ok(Self {
            params,
            block_count,
            item_count,
            completion_reported: false,
        })
    }

    /// Overlay block count.
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Time at which the last intro item settles.
    pub fn end(&self) -> f64 {
        let last = self.item_count.saturating_sub(1);
        self.params
            .items
            .staggered(last, self.params.item_stagger)
            .end()
    }

    /// Sample the timeline at `t` seconds after load.
    pub fn sample(&self, t: f64) -> LoadFrame {
        let p = &self.params;
        let full = 100.0 / self.block_count as f64;

        let blocks = (0..self.block_count)
            .map(|i| Block {
                left_pct: full * i as f64,
                width_pct: p.blocks.staggered(i, p.block_stagger).value(full, 0.0, t),
            })
            .collect();

        let items = (0..self.item_count)
            .map(|i| {
                let tw = p.items.staggered(i, p.item_stagger);
                ItemFrame {
                    opacity: tw.value(0.0, 1.0, t),
                    y: tw.value(p.item_rise, 0.0, t),
                }
            })
            .collect();

        LoadFrame {
            blocks,
            label_x: p.label.value(0.0, p.label_shift_x, t),
            label_opacity: p.label.value(1.0, 0.0, t),
            items,
            complete: t >= self.end(),
        }
    }

    /// `true` exactly once, on the first call at or after completion. The host re-enables
    /// smooth scroll when this fires.
    pub fn take_completion(&mut self, t: f64) -> bool {
        if self.completion_reported || t < self.end() {
            return false;
        }
        self.completion_reported = true;
        true
    }
}

#[cfg(test)]
#[path = "../tests/unit/loader.rs"]
mod tests;
