//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Language name: bold accent, underlined like a link
pub fn link() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn since() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::ITALIC)
}

pub fn code() -> Style {
    Style::default().fg(palette::CODE_FG).bg(palette::PANEL_BG)
}

pub fn panel() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY).bg(palette::PANEL_BG)
}

// --- Pills and buttons ---
pub fn badge(hovered: bool) -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(if hovered {
            palette::BADGE_HOVER_BG
        } else {
            palette::BADGE_BG
        })
        .add_modifier(Modifier::BOLD)
}

pub fn attributes_button() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::BUTTON_ATTRIBUTES_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn snippet_button() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::BUTTON_SNIPPET_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

pub fn border_hover() -> Style {
    Style::default()
        .fg(palette::BORDER_HOVER)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(border: Style) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

/// Border for a card: hover wins over focus
pub fn card_border(focused: bool, hovered: bool) -> Style {
    if hovered {
        border_hover()
    } else if focused {
        border_active()
    } else {
        border_inactive()
    }
}
