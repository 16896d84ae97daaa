use crate::animation::ease::Ease;
use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::math::{lerp, remap_unit};

/// A delayed, eased 0..1 ramp on a seconds timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Seconds before the ramp starts.
    pub delay: f64,
    /// Ramp length in seconds.
    pub duration: f64,
    /// Curve applied to linear progress.
    pub ease: Ease,
}

impl Tween {
    /// Create a validated tween.
    pub fn new(delay: f64, duration: f64, ease: Ease) -> RevealResult<Self> {
        let tween = Self {
            delay,
            duration,
            ease,
        };
        tween.validate()?;
        Ok(tween)
    }

    /// Check that delay and duration are finite and non-negative.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(RevealError::validation(
                "tween delay must be finite and >= 0",
            ));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(RevealError::validation(
                "tween duration must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Eased progress at `t` seconds. Zero-length tweens jump to 1 at `delay`.
    pub fn progress(&self, t: f64) -> f64 {
        self.ease
            .apply(remap_unit(t, self.delay, self.delay + self.duration))
    }

    /// Interpolate `from -> to` at `t` seconds.
    pub fn value(&self, from: f64, to: f64, t: f64) -> f64 {
        lerp(from, to, self.progress(t))
    }

    /// Time at which the ramp reaches 1.
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }

    /// The `index`-th member of a staggered group.
    pub fn staggered(&self, index: usize, stagger: f64) -> Self {
        Self {
            delay: self.delay + index as f64 * stagger,
            ..*self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
