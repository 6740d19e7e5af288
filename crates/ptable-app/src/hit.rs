//! Hit map recorded by the last render
//!
//! The grid is laid out in *content* coordinates (origin at the top-left of
//! the scrollable grid). The renderer records every card's regions here along
//! with where the grid was drawn and the scroll offset it used, so pointer
//! events can be resolved without access to any terminal types.

use ptable_core::{ParadigmTag, ScreenRect};

/// A rectangle of terminal cells. `x`/`y` may be negative for screen
/// positions of content scrolled above the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn to_screen_rect(&self) -> ScreenRect {
        ScreenRect::new(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

/// Interactive element under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Card body (anything not covered by a more specific target)
    Body,
    Badge(ParadigmTag),
    AttributesButton,
    SnippetButton,
    Link,
}

/// Resolved pointer position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub card: usize,
    pub target: HitTarget,
}

/// Regions of one laid-out card, in content coordinates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardRegions {
    pub bounds: CellRect,
    pub link: CellRect,
    pub badges: Vec<(ParadigmTag, CellRect)>,
    pub attributes_button: CellRect,
    pub snippet_button: CellRect,
}

/// Layout snapshot used to route pointer input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HitMap {
    /// Screen area the grid was drawn into
    pub viewport: CellRect,
    /// Rows of content scrolled above the viewport
    pub scroll: u16,
    /// Total content height
    pub content_height: u16,
    /// Grid columns used for the layout
    pub columns: usize,
    /// Regions per card, indexed like the language list
    pub cards: Vec<CardRegions>,
}

impl HitMap {
    fn origin(&self) -> (i32, i32) {
        (self.viewport.x, self.viewport.y - self.scroll as i32)
    }

    /// Translate a content rectangle to screen coordinates
    pub fn to_screen(&self, rect: CellRect) -> CellRect {
        let (dx, dy) = self.origin();
        rect.offset(dx, dy)
    }

    /// Screen rectangle of a card
    pub fn card_screen_rect(&self, card: usize) -> Option<CellRect> {
        self.cards.get(card).map(|c| self.to_screen(c.bounds))
    }

    /// Screen rectangle of a badge on a card
    pub fn badge_screen_rect(&self, card: usize, tag: ParadigmTag) -> Option<CellRect> {
        self.cards
            .get(card)?
            .badges
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, rect)| self.to_screen(*rect))
    }

    /// Resolve a screen cell to the card element under it
    pub fn resolve(&self, column: u16, row: u16) -> Option<Hit> {
        let (x, y) = (column as i32, row as i32);
        if !self.viewport.contains(x, y) {
            return None;
        }

        let (dx, dy) = self.origin();
        let (cx, cy) = (x - dx, y - dy);

        self.cards.iter().enumerate().find_map(|(index, card)| {
            if !card.bounds.contains(cx, cy) {
                return None;
            }
            let target = if let Some((tag, _)) =
                card.badges.iter().find(|(_, rect)| rect.contains(cx, cy))
            {
                HitTarget::Badge(*tag)
            } else if card.attributes_button.contains(cx, cy) {
                HitTarget::AttributesButton
            } else if card.snippet_button.contains(cx, cy) {
                HitTarget::SnippetButton
            } else if card.link.contains(cx, cy) {
                HitTarget::Link
            } else {
                HitTarget::Body
            };
            Some(Hit {
                card: index,
                target,
            })
        })
    }

    /// Largest valid scroll offset
    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport.height)
    }
}
