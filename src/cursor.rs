//! Custom cursor: a dot pinned to the pointer and a lagging follower ring, both shown only
//! while the pointer is inside a cursor area.

use crate::foundation::core::Point;
use crate::foundation::error::{RevealError, RevealResult};
use crate::foundation::math::approach;

/// Cursor tuning.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CursorParams {
    /// Follower closes `1 / follower_lag` of the remaining distance per tick.
    pub follower_lag: f64,
    /// Follower is drawn with its top-left this many pixels up-left of its position.
    pub follower_offset: f64,
    /// Label shown while hovering a card.
    pub card_label: String,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            follower_lag: 9.0,
            follower_offset: 20.0,
            card_label: "View Project".to_string(),
        }
    }
}

impl CursorParams {
    /// Check ranges.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.follower_lag.is_finite() || self.follower_lag < 1.0 {
            return Err(RevealError::validation(
                "cursor follower_lag must be finite and >= 1",
            ));
        }
        if !self.follower_offset.is_finite() {
            return Err(RevealError::validation(
                "cursor follower_offset must be finite",
            ));
        }
        Ok(())
    }
}

/// What the host should paint for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorFrame {
    /// Dot position (pointer position).
    pub cursor: Point,
    /// Follower top-left corner.
    pub follower: Point,
    /// Dot is enlarged over a card.
    pub scale_up: bool,
    /// Dot uses a blend mode over highlighted text.
    pub blend: bool,
    /// Follower is raised above the cards.
    pub follower_raised: bool,
    /// Label text, empty when none.
    pub label: String,
}

/// Pointer and hover state owned by the page controller.
#[derive(Clone, Debug)]
pub struct CursorState {
    params: CursorParams,
    mouse: Point,
    follower: Point,
    inside: bool,
    over_card: bool,
    blend: bool,
}

impl CursorState {
    /// Hidden cursor at the origin.
    pub fn new(params: CursorParams) -> RevealResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            mouse: Point::ORIGIN,
            follower: Point::ORIGIN,
            inside: false,
            over_card: false,
            blend: false,
        })
    }

    /// Whether the cursor elements are shown.
    pub fn visible(&self) -> bool {
        self.inside
    }

    /// Last tracked pointer position.
    pub fn mouse(&self) -> Point {
        self.mouse
    }

    /// Current follower position (before the draw offset).
    pub fn follower(&self) -> Point {
        self.follower
    }

    /// Pointer entered a cursor area.
    pub fn enter_area(&mut self) {
        self.inside = true;
    }

    /// Pointer left a cursor area.
    pub fn leave_area(&mut self) {
        self.inside = false;
    }

    /// Pointer moved; ignored outside cursor areas.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.inside {
            self.mouse = Point::new(x, y);
        }
    }

    /// Pointer entered a project card.
    pub fn enter_card(&mut self) {
        self.over_card = true;
    }

    /// Pointer left a project card.
    pub fn leave_card(&mut self) {
        self.over_card = false;
    }

    /// Pointer entered blend-highlighted text.
    pub fn enter_blend(&mut self) {
        self.blend = true;
    }

    /// Pointer left blend-highlighted text.
    pub fn leave_blend(&mut self) {
        self.blend = false;
    }

    /// Advance the follower one step. Returns `None` (and leaves state untouched) while outside.
    pub fn tick(&mut self) -> Option<CursorFrame> {
        if !self.inside {
            return None;
        }
        let k = 1.0 / self.params.follower_lag;
        self.follower = Point::new(
            approach(self.follower.x, self.mouse.x, k),
            approach(self.follower.y, self.mouse.y, k),
        );

        let off = self.params.follower_offset;
        Some(CursorFrame {
            cursor: self.mouse,
            follower: Point::new(self.follower.x - off, self.follower.y - off),
            scale_up: self.over_card,
            blend: self.blend,
            follower_raised: self.over_card,
            label: if self.over_card {
                self.params.card_label.clone()
            } else {
                String::new()
            },
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/cursor.rs"]
mod tests;
