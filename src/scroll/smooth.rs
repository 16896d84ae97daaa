//! Smooth-scroll emulation: wheel input sets a target, and the visible scroll position glides
//! toward it on a fixed-duration eased curve driven by frame timestamps.

use crate::animation::ease::Ease;
use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::math::lerp;

/// Smooth-scroll tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothScrollOptions {
    /// Glide length in seconds.
    pub duration: f64,
    /// Glide curve.
    pub ease: Ease,
    /// Multiplier applied to wheel deltas.
    pub wheel_multiplier: f64,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            duration: 1.2,
            ease: Ease::ScrollSettle,
            wheel_multiplier: 1.0,
        }
    }
}

impl SmoothScrollOptions {
    /// Check ranges.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(RevealError::validation(
                "smooth scroll duration must be finite and > 0",
            ));
        }
        if !self.wheel_multiplier.is_finite() {
            return Err(RevealError::validation(
                "smooth scroll wheel_multiplier must be finite",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Glide {
    from: f64,
    to: f64,
    elapsed: f64,
}

/// Smooth scroller state.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    opts: SmoothScrollOptions,
    position: f64,
    limit: f64,
    glide: Option<Glide>,
    last_time_ms: Option<f64>,
    stopped: bool,
}

impl SmoothScroll {
    /// Scroller at position 0 with scrollable range `[0, limit]`.
    pub fn new(opts: SmoothScrollOptions, limit: f64) -> RevealResult<Self> {
        opts.validate()?;
        check_limit(limit)?;
        Ok(Self {
            opts,
            position: 0.0,
            limit,
            glide: None,
            last_time_ms: None,
            stopped: false,
        })
    }

    /// Change the scrollable range (document height changed). Clamps position and target.
    pub fn set_limit(&mut self, limit: f64) -> RevealResult<()> {
        check_limit(limit)?;
        self.limit = limit;
        self.position = self.position.clamp(0.0, limit);
        if let Some(g) = self.glide.as_mut() {
            g.to = g.to.clamp(0.0, limit);
        }
        Ok(())
    }

    /// Visible scroll position.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Where the current glide ends, or the position when idle.
    pub fn target(&self) -> f64 {
        self.glide.map_or(self.position, |g| g.to)
    }

    /// `true` while a glide is in flight.
    pub fn is_scrolling(&self) -> bool {
        self.glide.is_some()
    }

    /// `true` while user input is locked.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Lock user input and freeze any glide in place.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.glide = None;
    }

    /// Unlock user input.
    pub fn start(&mut self) {
        self.stopped = false;
    }

    /// Wheel input; ignored while stopped. Extends the in-flight target.
    pub fn wheel(&mut self, delta_y: f64) {
        if self.stopped || !delta_y.is_finite() {
            return;
        }
        let target = self.target() + delta_y * self.opts.wheel_multiplier;
        self.scroll_to(target);
    }

    /// Glide to `target` (clamped to the scrollable range) from the current position.
    pub fn scroll_to(&mut self, target: f64) {
        if !target.is_finite() {
            return;
        }
        let to = target.clamp(0.0, self.limit);
        if to == self.position {
            self.glide = None;
            return;
        }
        self.glide = Some(Glide {
            from: self.position,
            to,
            elapsed: 0.0,
        });
    }

    /// Jump to the top immediately, dropping any glide. Used instead of browser scroll
    /// restoration on load and unload. Returns the new position when it moved.
    pub fn reset_to_top(&mut self) -> Option<f64> {
        self.glide = None;
        if self.position == 0.0 {
            return None;
        }
        self.position = 0.0;
        Some(0.0)
    }

    /// Advance to frame timestamp `time_ms`; returns the new position when it changed.
    pub fn raf(&mut self, time_ms: f64) -> Option<f64> {
        let dt = match self.last_time_ms {
            Some(prev) if time_ms > prev => (time_ms - prev) / 1000.0,
            _ => 0.0,
        };
        self.last_time_ms = Some(time_ms);

        let glide = self.glide.as_mut()?;
        glide.elapsed += dt;
        let t = (glide.elapsed / self.opts.duration).min(1.0);
        let next = if t >= 1.0 {
            glide.to
        } else {
            lerp(glide.from, glide.to, self.opts.ease.apply(t))
        };
        if t >= 1.0 {
            self.glide = None;
        }

        if next == self.position {
            return None;
        }
        self.position = next;
        Some(next)
    }
}

fn check_limit(limit: f64) -> RevealResult<()> {
    if !limit.is_finite() || limit < 0.0 {
        return Err(RevealError::validation(
            "smooth scroll limit must be finite and >= 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
