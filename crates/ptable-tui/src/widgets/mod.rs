//! Custom widget components

mod bubbles;
mod card;
mod header;
mod paradigm_tooltip;

pub use bubbles::{bubble_height, FactBubble, MAX_BUBBLE_HEIGHT, MIN_BUBBLE_HEIGHT};
pub use card::LanguageCard;
pub use header::{MainHeader, SUBTITLE, TITLE};
pub use paradigm_tooltip::{render_shadow, ParadigmTooltip, MAX_TOOLTIP_WIDTH};
