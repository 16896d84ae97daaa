//! Card strip choreography for the pinned section: slide left, then fade out as the triangle
//! reveal takes over.

use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::math::remap_unit;
use crate::grid::reveal::RevealParams;

/// Delay after page load before the card strip becomes visible.
pub const CARDS_VISIBLE_DELAY_MS: u64 = 1000;

/// Carousel tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CarouselParams {
    /// Scroll progress at which the slide completes.
    pub slide_end: f64,
    /// Slide distance in viewport widths.
    pub travel_viewports: f64,
    /// Reveal progress where the fade starts.
    pub fade_start: f64,
    /// Reveal progress where cards are fully hidden.
    pub fade_end: f64,
}

impl Default for CarouselParams {
    fn default() -> Self {
        Self {
            slide_end: 0.654,
            travel_viewports: 2.0,
            fade_start: 0.1,
            fade_end: 0.3,
        }
    }
}

impl CarouselParams {
    /// Check ranges.
    pub fn validate(&self) -> RevealResult<()> {
        if !(self.slide_end > 0.0 && self.slide_end <= 1.0) {
            return Err(RevealError::validation(
                "carousel slide_end must be in (0, 1]",
            ));
        }
        if !self.travel_viewports.is_finite() {
            return Err(RevealError::validation(
                "carousel travel_viewports must be finite",
            ));
        }
        if !(0.0 <= self.fade_start && self.fade_start < self.fade_end && self.fade_end <= 1.0) {
            return Err(RevealError::validation(
                "carousel fade range must satisfy 0 <= start < end <= 1",
            ));
        }
        Ok(())
    }
}

/// Transform and visibility of the card strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselState {
    /// Horizontal translation in CSS pixels (negative is left).
    pub translate_x: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// `false` once the fade has begun; cards stop taking pointer input.
    pub interactive: bool,
}

/// Card strip state for a scroll progress.
pub fn carousel_state(
    scroll_progress: f64,
    viewport_width: f64,
    carousel: &CarouselParams,
    reveal: &RevealParams,
) -> CarouselState {
    let slide = (scroll_progress / carousel.slide_end).min(1.0);
    let translate_x = -slide * viewport_width * carousel.travel_viewports;

    let a = reveal.animation_progress(scroll_progress);
    let (opacity, interactive) = if a < carousel.fade_start {
        (1.0, true)
    } else {
        (
            1.0 - remap_unit(a, carousel.fade_start, carousel.fade_end),
            false,
        )
    };

    CarouselState {
        translate_x,
        opacity,
        interactive,
    }
}

/// Whether the strip has been revealed `elapsed_ms` after load.
pub fn cards_visible(elapsed_ms: u64) -> bool {
    elapsed_ms >= CARDS_VISIBLE_DELAY_MS
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/carousel.rs"]
mod tests;
