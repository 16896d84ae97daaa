use crate::foundation::error::{RevealError, RevealResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Absolute 0-based frame index in an output sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Visible page area in CSS pixels plus the device pixel ratio of the display.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
    /// Physical pixels per CSS pixel.
    pub device_pixel_ratio: f64,
}

impl Viewport {
    /// Create a validated viewport with a device pixel ratio of 1.
    pub fn new(width: f64, height: f64) -> RevealResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(RevealError::validation(format!(
                "viewport width must be finite and > 0, got {width}"
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(RevealError::validation(format!(
                "viewport height must be finite and > 0, got {height}"
            )));
        }
        Ok(Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        })
    }

    /// Return a copy with the given device pixel ratio.
    ///
    /// Hosts that report `0` or a non-finite ratio fall back to `1`.
    pub fn with_device_pixel_ratio(mut self, dpr: f64) -> Self {
        self.device_pixel_ratio = if dpr.is_finite() && dpr > 0.0 {
            dpr
        } else {
            1.0
        };
        self
    }

    /// Backing-store size in physical pixels (`css * dpr`, truncated).
    pub fn pixel_size(&self) -> (u32, u32) {
        let w = (self.width * self.device_pixel_ratio).floor().max(1.0) as u32;
        let h = (self.height * self.device_pixel_ratio).floor().max(1.0) as u32;
        (w, h)
    }

    /// Return `true` when the CSS size differs from `other` (ratio changes included).
    pub fn size_differs(&self, other: &Viewport) -> bool {
        self.width != other.width
            || self.height != other.height
            || self.device_pixel_ratio != other.device_pixel_ratio
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Construct a color from channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct a color with a fractional alpha in `[0, 1]`.
    pub fn with_alpha_f(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b, a }
    }

    /// Convert into premultiplied RGBA8 bytes.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
