use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::math::remap_unit;

/// Viewports wider than this pin the section four times longer.
pub const WIDE_LAYOUT_MIN_WIDTH: f64 = 1440.0;

/// Pin length for the sticky section.
///
/// The narrower of `inner_width` and `client_width` decides the layout (the latter excludes
/// scrollbars): one viewport height up to 1440px, four viewport heights beyond.
pub fn sticky_height(inner_width: f64, client_width: f64, inner_height: f64) -> f64 {
    let vw = inner_width.min(client_width);
    if vw <= WIDE_LAYOUT_MIN_WIDTH {
        inner_height
    } else {
        inner_height * 4.0
    }
}

/// Progress of a pinned section that starts when its top meets the viewport top and stays
/// pinned for `length` pixels of scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    start: f64,
    length: f64,
    progress: f64,
}

impl ScrollTrigger {
    /// Create a trigger pinned from `start` for `length` pixels.
    pub fn new(start: f64, length: f64) -> RevealResult<Self> {
        validate(start, length)?;
        Ok(Self {
            start,
            length,
            progress: 0.0,
        })
    }

    /// Recompute the pin range, e.g. after a resize. Progress is re-derived on the next update.
    pub fn refresh(&mut self, start: f64, length: f64) -> RevealResult<()> {
        validate(start, length)?;
        self.start = start;
        self.length = length;
        Ok(())
    }

    /// Feed a scroll position; returns the new progress when it changed.
    pub fn update(&mut self, scroll_y: f64) -> Option<f64> {
        let next = self.progress_at(scroll_y);
        if next == self.progress {
            return None;
        }
        self.progress = next;
        Some(next)
    }

    /// Progress for `scroll_y` without updating state.
    pub fn progress_at(&self, scroll_y: f64) -> f64 {
        remap_unit(scroll_y, self.start, self.end())
    }

    /// Last reported progress.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Scroll offset where pinning begins.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Scroll offset where pinning ends.
    pub fn end(&self) -> f64 {
        self.start + self.length
    }

    /// `true` while the section is pinned.
    pub fn is_active(&self, scroll_y: f64) -> bool {
        scroll_y >= self.start && scroll_y <= self.end()
    }
}

fn validate(start: f64, length: f64) -> RevealResult<()> {
    if !start.is_finite() {
        return Err(RevealError::validation(
            "scroll trigger start must be finite",
        ));
    }
    if !length.is_finite() || length <= 0.0 {
        return Err(RevealError::validation(
            "scroll trigger length must be finite and > 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/trigger.rs"]
mod tests;
