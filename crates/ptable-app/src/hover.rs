//! Pointer hover routing
//!
//! The terminal reports raw pointer positions; cards expect enter/leave
//! events. [`HoverTracker`] remembers which card and badge the pointer was
//! last over and turns a new position into the per-card events in the order
//! a browser would dispatch them: a parent is entered before its child and a
//! child is left before its parent.

use ptable_core::ParadigmTag;

use crate::card::CardMessage;
use crate::hit::{Hit, HitMap, HitTarget};

/// Card and badge currently under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverTracker {
    pub card: Option<usize>,
    pub badge: Option<ParadigmTag>,
}

impl HoverTracker {
    /// Hover position described by a hit
    pub fn from_hit(hit: Option<Hit>) -> Self {
        match hit {
            Some(Hit {
                card,
                target: HitTarget::Badge(tag),
            }) => Self {
                card: Some(card),
                badge: Some(tag),
            },
            Some(Hit { card, .. }) => Self {
                card: Some(card),
                badge: None,
            },
            None => Self::default(),
        }
    }

    /// Move the pointer to `next`, returning the card events to dispatch
    ///
    /// Badge enter events carry the badge and card bounds from `hit_map`, in
    /// screen coordinates.
    pub fn move_to(&mut self, next: HoverTracker, hit_map: &HitMap) -> Vec<(usize, CardMessage)> {
        let mut events = Vec::new();
        let prev = *self;

        if prev == next {
            return events;
        }

        // Leaving: child first, then parent
        if let Some(card) = prev.card {
            let card_changed = next.card != Some(card);
            if prev.badge.is_some() && (card_changed || prev.badge != next.badge) {
                events.push((card, CardMessage::PointerLeaveBadge));
            }
            if card_changed {
                events.push((card, CardMessage::PointerLeaveCard));
            }
        }

        // Entering: parent first, then child
        if let Some(card) = next.card {
            let card_changed = prev.card != Some(card);
            if card_changed {
                events.push((card, CardMessage::PointerEnterCard));
            }
            if let Some(tag) = next.badge {
                if card_changed || prev.badge != next.badge {
                    events.push((
                        card,
                        CardMessage::PointerEnterBadge {
                            tag,
                            badge: hit_map
                                .badge_screen_rect(card, tag)
                                .map(|r| r.to_screen_rect()),
                            card: hit_map.card_screen_rect(card).map(|r| r.to_screen_rect()),
                        },
                    ));
                }
            }
        }

        *self = next;
        events
    }

    /// Leave everything the pointer is over
    pub fn clear(&mut self, hit_map: &HitMap) -> Vec<(usize, CardMessage)> {
        self.move_to(HoverTracker::default(), hit_map)
    }
}
