//! Scroll progress to per-cell scale targets, and the per-tick ease toward them.

use crate::foundation::core::Rgba8;
use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::math::approach;
use crate::grid::store::TriangleCell;

/// Tunables for the reveal animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealParams {
    /// Scroll progress at which the reveal begins; everything before it is the card slide.
    pub reveal_start: f64,
    /// Fraction of the remaining distance a scale covers per tick.
    pub ease_factor: f64,
    /// A scale step at or below this snaps the cell onto its target.
    pub settle_epsilon: f64,
    /// Below this scale a cell is drawn as a wireframe.
    pub visibility_threshold: f64,
    /// Fill scale multiplier that hides hairline seams between neighbours.
    pub overdraw: f64,
    /// Horizontal shift in CSS pixels at full scroll progress.
    pub parallax_px: f64,
    /// Wireframe stroke width in CSS pixels.
    pub line_width: f64,
    /// Wireframe color.
    pub outline_color: Rgba8,
    /// Solid triangle color.
    pub fill_color: Rgba8,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            reveal_start: 0.65,
            ease_factor: 0.15,
            settle_epsilon: 0.001,
            visibility_threshold: 0.02,
            overdraw: 1.015,
            parallax_px: 200.0,
            line_width: 1.0,
            outline_color: Rgba8::with_alpha_f(255, 255, 255, 0.075),
            fill_color: Rgba8::WHITE,
        }
    }
}

impl RevealParams {
    /// Check numeric ranges.
    pub fn validate(&self) -> RevealResult<()> {
        if !(0.0..1.0).contains(&self.reveal_start) {
            return Err(RevealError::validation(
                "reveal_start must be in [0, 1) so the reveal window is non-empty",
            ));
        }
        if !(self.ease_factor > 0.0 && self.ease_factor <= 1.0) {
            return Err(RevealError::validation("ease_factor must be in (0, 1]"));
        }
        if !(self.settle_epsilon > 0.0 && self.settle_epsilon < 1.0) {
            return Err(RevealError::validation("settle_epsilon must be in (0, 1)"));
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(RevealError::validation(
                "visibility_threshold must be in [0, 1]",
            ));
        }
        if !self.overdraw.is_finite() || self.overdraw < 1.0 {
            return Err(RevealError::validation("overdraw must be finite and >= 1"));
        }
        if !self.parallax_px.is_finite() {
            return Err(RevealError::validation("parallax_px must be finite"));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(RevealError::validation("line_width must be finite and > 0"));
        }
        Ok(())
    }

    /// Remap the trailing `1 - reveal_start` of scroll onto `[0, 1]`.
    pub fn animation_progress(&self, scroll_progress: f64) -> f64 {
        if scroll_progress <= self.reveal_start {
            return 0.0;
        }
        let t = (scroll_progress - self.reveal_start) / (1.0 - self.reveal_start);
        t.min(1.0)
    }

    /// Fills are only drawn once scrolling has entered the reveal window.
    pub fn fill_allowed(&self, scroll_progress: f64) -> bool {
        scroll_progress > self.reveal_start
    }

    /// A cell counts as fully scaled within `settle_epsilon` of 1.
    pub fn is_fully_scaled(&self, scale: f64) -> bool {
        scale >= 1.0 - self.settle_epsilon
    }

    /// Parallax offset for the given scroll progress.
    pub fn canvas_x(&self, scroll_progress: f64) -> f64 {
        -scroll_progress * self.parallax_px
    }
}

/// Slack for rank comparisons; progress is derived from float scroll math.
const ORDER_EPSILON: f64 = 1e-9;

/// `1` when the reveal has started and the cell's rank has been reached, else `0`.
///
/// Rank 0 stays hidden at zero progress; nothing is revealed before the window opens.
pub fn target_scale(order: f64, animation_progress: f64) -> f64 {
    if animation_progress > 0.0 && order <= animation_progress + ORDER_EPSILON {
        1.0
    } else {
        0.0
    }
}

/// Ease one cell a single tick toward `target`.
///
/// Returns `true` when the scale changed. Once a step would be no larger than `settle_epsilon`
/// the cell snaps onto `target`, so scales land exactly on 0 or 1 and then stop changing.
pub fn ease_cell(cell: &mut TriangleCell, target: f64, params: &RevealParams) -> bool {
    let next = approach(cell.scale, target, params.ease_factor);
    if (next - cell.scale).abs() > params.settle_epsilon {
        cell.scale = next;
        true
    } else if cell.scale != target {
        cell.scale = target;
        true
    } else {
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/reveal.rs"]
mod tests;
