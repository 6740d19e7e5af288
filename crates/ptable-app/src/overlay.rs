//! Placement of the transient overlays
//!
//! - Fact bubbles: a fixed row of [`BUBBLE_COUNT`] callouts below a hovered
//!   card, each oscillating vertically while visible.
//! - Paradigm tooltip: a panel beside a hovered badge, opened towards the
//!   side chosen by the badge [`Anchor`].
//!
//! All functions here are pure cell arithmetic; the TUI measures content and
//! draws into the rectangles returned.

use ptable_core::{Anchor, Side};

use crate::hit::CellRect;

/// Number of fact bubbles shown under a hovered card
pub const BUBBLE_COUNT: usize = 5;

/// Duration of one oscillation cycle
pub const BUBBLE_CYCLE_MS: u64 = 4000;

/// Start delay between consecutive bubbles
pub const BUBBLE_STAGGER_MS: u64 = 150;

/// Vertical offsets (rows) at evenly spaced points of a cycle
const BUBBLE_KEYFRAMES: [f32; 5] = [0.0, -1.0, 0.0, 1.0, 0.0];

const BUBBLE_GAP: u16 = 1;
const BUBBLE_MIN_WIDTH: u16 = 12;
const BUBBLE_MAX_WIDTH: u16 = 28;

/// Smooth ease-in-out over `0.0..=1.0`
fn ease_in_out(p: f32) -> f32 {
    p * p * (3.0 - 2.0 * p)
}

/// Vertical offset of bubble `index`, `elapsed_ms` after the bubbles appeared.
///
/// Each bubble starts oscillating after its stagger delay and then cycles
/// forever through the keyframes.
pub fn bubble_offset(elapsed_ms: u64, index: usize) -> i16 {
    let delay = index as u64 * BUBBLE_STAGGER_MS;
    if elapsed_ms < delay {
        return 0;
    }

    let t = (elapsed_ms - delay) % BUBBLE_CYCLE_MS;
    let segments = (BUBBLE_KEYFRAMES.len() - 1) as u64;
    let segment_ms = BUBBLE_CYCLE_MS / segments;
    let segment = (t / segment_ms) as usize;
    let p = (t % segment_ms) as f32 / segment_ms as f32;

    let from = BUBBLE_KEYFRAMES[segment];
    let to = BUBBLE_KEYFRAMES[segment + 1];
    let value = from + (to - from) * ease_in_out(p);
    value.round() as i16
}

/// Offsets for the whole bubble row
pub fn bubble_offsets(elapsed_ms: Option<u64>) -> [i16; BUBBLE_COUNT] {
    let mut offsets = [0; BUBBLE_COUNT];
    if let Some(elapsed) = elapsed_ms {
        for (i, offset) in offsets.iter_mut().enumerate() {
            *offset = bubble_offset(elapsed, i);
        }
    }
    offsets
}

/// Width of each bubble for a screen `area_width` cells wide
pub fn bubble_width(area_width: u16) -> u16 {
    let gaps = BUBBLE_GAP * (BUBBLE_COUNT as u16 - 1);
    let share = area_width.saturating_sub(gaps) / BUBBLE_COUNT as u16;
    if share < BUBBLE_MIN_WIDTH {
        share.max(1)
    } else {
        share.min(BUBBLE_MAX_WIDTH)
    }
}

/// Rectangles of the bubble row under `card`.
///
/// The row is centered on the card, kept within `area` horizontally, and
/// starts one row below it; each bubble is shifted by its oscillation offset.
/// Bubbles never move up onto the card: a row below the bottom of `area` is
/// left for the renderer to clip.
pub fn bubble_row(
    card: CellRect,
    area: CellRect,
    height: u16,
    offsets: &[i16; BUBBLE_COUNT],
) -> Vec<CellRect> {
    let width = bubble_width(area.width);
    let total = (width * BUBBLE_COUNT as u16 + BUBBLE_GAP * (BUBBLE_COUNT as u16 - 1)) as i32;

    let center = card.x + card.width as i32 / 2;
    let x0 = clamp_start(center - total / 2, total, area.x, area.right());

    let top = card.bottom() + 1;

    (0..BUBBLE_COUNT)
        .map(|i| {
            let x = x0 + i as i32 * (width + BUBBLE_GAP) as i32;
            let y = (top + offsets[i] as i32).max(card.bottom());
            CellRect::new(x, y, width, height)
        })
        .collect()
}

/// Rectangle of the paradigm tooltip for a badge anchor on `card`.
///
/// With [`Side::Right`] the tooltip's left edge sits `offset` cells right of
/// the anchor; with [`Side::Left`] its right edge sits `offset` cells left of
/// it. The tooltip is vertically centered on the anchor, then clamped into
/// `area`.
pub fn tooltip_rect(
    anchor: Anchor,
    card: CellRect,
    width: u16,
    height: u16,
    offset: u16,
    area: CellRect,
) -> CellRect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let anchor_x = card.x + anchor.x.floor() as i32;
    let anchor_y = card.y + anchor.y.floor() as i32;

    let x = match anchor.side {
        Side::Right => anchor_x + offset as i32,
        Side::Left => anchor_x - offset as i32 - width as i32,
    };
    let y = anchor_y - height as i32 / 2;

    CellRect::new(
        clamp_start(x, width as i32, area.x, area.right()),
        clamp_start(y, height as i32, area.y, area.bottom()),
        width,
        height,
    )
}

/// Clamp a span's start so `[start, start + len)` stays within `[min, max)`
fn clamp_start(start: i32, len: i32, min: i32, max: i32) -> i32 {
    start.min(max - len).max(min)
}
