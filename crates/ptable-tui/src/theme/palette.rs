//! Color palette (slate background, blue links, green badges).

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(15, 23, 42); // page background
pub const CARD_BG: Color = Color::Rgb(30, 41, 59); // card surface
pub const PANEL_BG: Color = Color::Rgb(17, 24, 39); // attribute/code panels
pub const POPUP_BG: Color = Color::Rgb(24, 24, 27); // paradigm tooltip
pub const SHADOW: Color = Color::Rgb(5, 8, 16);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85);
pub const BORDER_ACTIVE: Color = Color::Cyan; // keyboard focus
pub const BORDER_HOVER: Color = Color::LightBlue; // pointer hover

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(96, 165, 250); // language names, headings
pub const BADGE_BG: Color = Color::Rgb(22, 163, 74);
pub const BADGE_HOVER_BG: Color = Color::Rgb(21, 128, 61);
pub const BUTTON_ATTRIBUTES_BG: Color = Color::Rgb(37, 99, 235);
pub const BUTTON_SNIPPET_BG: Color = Color::Rgb(22, 163, 74);
pub const BUBBLE_BG: Color = Color::Rgb(13, 148, 136);
pub const CONTRAST_FG: Color = Color::White;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(203, 213, 225);
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
pub const TEXT_MUTED: Color = Color::Rgb(71, 85, 105);
pub const TEXT_BRIGHT: Color = Color::White;
pub const CODE_FG: Color = Color::Rgb(74, 222, 128);

// --- Lists ---
pub const PROS_FG: Color = Color::Rgb(134, 239, 172);
pub const CONS_FG: Color = Color::Rgb(248, 113, 113);

// --- Status ---
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_RED: Color = Color::Red;
