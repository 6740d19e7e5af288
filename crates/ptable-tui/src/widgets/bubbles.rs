//! Fact bubbles shown under a hovered card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Clear, Widget},
};

use crate::layout::wrap_text;
use crate::theme::{palette, styles};

/// Bubble heights (including borders) are kept within this range
pub const MIN_BUBBLE_HEIGHT: u16 = 3;
pub const MAX_BUBBLE_HEIGHT: u16 = 6;

/// Common height for a row of bubbles `width` cells wide
///
/// Tall enough for the longest wrapped fact, within the bubble height range.
pub fn bubble_height(facts: &[&str], width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    let lines = facts
        .iter()
        .map(|fact| u16::try_from(wrap_text(fact, inner).len()).unwrap_or(u16::MAX))
        .max()
        .unwrap_or(1);
    lines
        .saturating_add(2)
        .clamp(MIN_BUBBLE_HEIGHT, MAX_BUBBLE_HEIGHT)
}

/// A single fact callout
pub struct FactBubble<'a> {
    fact: &'a str,
}

impl<'a> FactBubble<'a> {
    pub fn new(fact: &'a str) -> Self {
        Self { fact }
    }
}

impl Widget for FactBubble<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let style = Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::BUBBLE_BG);
        let block = styles::glass_block(style.add_modifier(Modifier::BOLD)).style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines = wrap_text(self.fact, inner.width);
        let last = inner.height as usize - 1;
        for (i, line) in lines.iter().take(inner.height as usize).enumerate() {
            let y = inner.y + i as u16;
            // Mark text cut off by the height limit
            if i == last && lines.len() > inner.height as usize {
                let cut = line.chars().count().saturating_sub(1);
                let text: String = line.chars().take(cut).chain(['…']).collect();
                buf.set_stringn(inner.x, y, text, inner.width as usize, style);
            } else {
                buf.set_stringn(inner.x, y, line, inner.width as usize, style);
            }
        }
    }
}
