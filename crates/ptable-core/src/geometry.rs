//! Viewport geometry for tooltip anchoring
//!
//! Coordinates are viewport coordinates (terminal cells for the TUI) held as
//! `f32` so that element centers need no rounding.

use serde::{Deserialize, Serialize};

/// An element's bounding rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds that can be measured: finite and non-empty
    pub fn is_measurable(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Which side of the badge a tooltip opens towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Reference point for a paradigm tooltip, relative to the card's top-left
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
    pub side: Side,
}

/// Compute the tooltip anchor for a hovered badge.
///
/// The anchor is the badge's center translated into card-relative
/// coordinates. The tooltip opens away from the nearer card edge: a badge
/// left of the card's horizontal midpoint gets [`Side::Right`], one at or
/// right of it gets [`Side::Left`].
///
/// Returns `None` when either rectangle cannot be measured.
pub fn compute_anchor(badge: ScreenRect, card: ScreenRect) -> Option<Anchor> {
    if !badge.is_measurable() || !card.is_measurable() {
        return None;
    }

    let (badge_cx, badge_cy) = badge.center();
    let x = badge_cx - card.x;
    let y = badge_cy - card.y;
    let side = if x < card.width / 2.0 {
        Side::Right
    } else {
        Side::Left
    };

    Some(Anchor { x, y, side })
}
