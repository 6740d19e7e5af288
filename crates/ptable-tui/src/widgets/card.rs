//! Language card widget
//!
//! Draws a [`CardLayout`] row by row so the drawn cells line up exactly with
//! the hit regions recorded for the same layout.

use ptable_core::ParadigmTag;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::layout::{badge_text, CardLayout, CardRow, PanelKind, CARD_INSET};
use crate::theme::{palette, styles};

pub struct LanguageCard<'a> {
    layout: &'a CardLayout,
    focused: bool,
    hovered: bool,
    hovered_badge: Option<ParadigmTag>,
}

impl<'a> LanguageCard<'a> {
    pub fn new(layout: &'a CardLayout) -> Self {
        Self {
            layout,
            focused: false,
            hovered: false,
            hovered_badge: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Card body or one of its badges is under the pointer
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn hovered_badge(mut self, tag: Option<ParadigmTag>) -> Self {
        self.hovered_badge = tag;
        self
    }

    fn render_row(&self, row: &CardRow, inner: Rect, y: u16, buf: &mut Buffer) {
        let x = inner.x + CARD_INSET - 1;
        let width = inner.width.saturating_sub((CARD_INSET - 1) * 2);

        if row.is_panel() {
            buf.set_style(Rect::new(inner.x, y, inner.width, 1), styles::panel());
        }

        match row {
            CardRow::Name(name) => {
                buf.set_stringn(x, y, name, width as usize, styles::link());
            }
            CardRow::Since(year) => {
                buf.set_stringn(
                    x,
                    y,
                    format!("Since {year}"),
                    width as usize,
                    styles::since(),
                );
            }
            CardRow::Blank => {}
            CardRow::Description(text) => {
                buf.set_stringn(x, y, text, width as usize, styles::text_primary());
            }
            CardRow::Badges(slots) => {
                for slot in slots {
                    let room = width.saturating_sub(slot.x);
                    if room == 0 {
                        continue;
                    }
                    let hovered = self.hovered_badge == Some(slot.tag);
                    buf.set_stringn(
                        x + slot.x,
                        y,
                        badge_text(slot.tag),
                        room as usize,
                        styles::badge(hovered),
                    );
                }
            }
            CardRow::Button { kind, open } => {
                let style = match kind {
                    PanelKind::Attributes => styles::attributes_button(),
                    PanelKind::Snippet => styles::snippet_button(),
                };
                buf.set_stringn(x, y, kind.button_text(*open), width as usize, style);
            }
            CardRow::Heading(text) => {
                let style = styles::heading().bg(palette::PANEL_BG);
                buf.set_stringn(x, y, text, width as usize, style);
            }
            CardRow::Attribute { label, value } => {
                let (next_x, _) = buf.set_stringn(
                    x,
                    y,
                    format!("{label}: "),
                    width as usize,
                    styles::panel().fg(palette::ACCENT),
                );
                let used = next_x - x;
                buf.set_stringn(
                    next_x,
                    y,
                    value,
                    width.saturating_sub(used) as usize,
                    styles::panel(),
                );
            }
            CardRow::Continuation { indent, text } => {
                let indent = (*indent).min(width);
                buf.set_stringn(
                    x + indent,
                    y,
                    text,
                    (width - indent) as usize,
                    styles::panel(),
                );
            }
            CardRow::Problem(text) => {
                buf.set_stringn(
                    x,
                    y,
                    text,
                    width as usize,
                    styles::panel().fg(palette::TEXT_SECONDARY),
                );
            }
            CardRow::Code(line) => {
                buf.set_stringn(x, y, line, width as usize, styles::code());
            }
        }
    }
}

impl Widget for LanguageCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(styles::card_border(self.focused, self.hovered))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        for (i, row) in self.layout.rows.iter().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            if offset >= inner.height {
                break;
            }
            self.render_row(row, inner, inner.y + offset, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ptable_app::CardUiState;
    use ptable_core::ContentBundle;

    fn js_layout(ui: &CardUiState, width: u16) -> CardLayout {
        let content = ContentBundle::builtin().unwrap();
        let js = content.languages()[0].clone();
        CardLayout::new(&js, &content, ui, width)
    }

    #[test]
    fn test_card_renders_name_year_and_badges() {
        let layout = js_layout(&CardUiState::default(), 40);
        let mut term = TestTerminal::with_size(40, layout.height);
        term.render_widget(LanguageCard::new(&layout), term.area());

        assert!(term.buffer_contains("JavaScript"));
        assert!(term.buffer_contains("Since 1995"));
        assert!(term.buffer_contains(" OOP "));
        assert!(term.buffer_contains(" Declarative "));
        assert!(term.buffer_contains("Show Core Attributes"));
        assert!(term.buffer_contains("Show Example Code"));
    }

    #[test]
    fn test_badge_cell_matches_hit_region() {
        let layout = js_layout(&CardUiState::default(), 40);
        let mut term = TestTerminal::with_size(40, layout.height);
        term.render_widget(LanguageCard::new(&layout), term.area());

        let (tag, rect) = layout.regions.badges[0];
        assert_eq!(tag, ParadigmTag::ObjectOriented);
        let cell = term.cell(rect.x as u16 + 1, rect.y as u16);
        assert_eq!(cell.symbol(), "O");
        assert_eq!(cell.bg, palette::BADGE_BG);
    }

    #[test]
    fn test_hovered_badge_is_highlighted() {
        let layout = js_layout(&CardUiState::default(), 40);
        let mut term = TestTerminal::with_size(40, layout.height);
        term.render_widget(
            LanguageCard::new(&layout)
                .hovered(true)
                .hovered_badge(Some(ParadigmTag::ObjectOriented)),
            term.area(),
        );

        let (_, rect) = layout.regions.badges[0];
        let cell = term.cell(rect.x as u16, rect.y as u16);
        assert_eq!(cell.bg, palette::BADGE_HOVER_BG);
        assert_eq!(term.cell(0, 0).fg, palette::BORDER_HOVER);
    }

    #[test]
    fn test_focus_border() {
        let layout = js_layout(&CardUiState::default(), 40);
        let mut term = TestTerminal::with_size(40, layout.height);
        term.render_widget(LanguageCard::new(&layout).focused(true), term.area());
        assert_eq!(term.cell(0, 0).fg, palette::BORDER_ACTIVE);
    }

    #[test]
    fn test_open_panels_render_content() {
        let ui = CardUiState {
            attributes_panel_open: true,
            snippet_panel_open: true,
            ..Default::default()
        };
        let layout = js_layout(&ui, 60);
        let mut term = TestTerminal::with_size(60, layout.height);
        term.render_widget(LanguageCard::new(&layout), term.area());

        assert!(term.buffer_contains("Hide Core Attributes"));
        assert!(term.buffer_contains("Hide Example Code"));
        assert!(term.buffer_contains("Core Attributes"));
        assert!(term.buffer_contains("Memory Model:"));
        assert!(term.buffer_contains("Example Code"));
    }

    #[test]
    fn test_short_area_clips_rows() {
        let layout = js_layout(&CardUiState::default(), 40);
        let mut term = TestTerminal::with_size(40, 4);
        term.render_widget(LanguageCard::new(&layout), term.area());

        assert!(term.buffer_contains("JavaScript"));
        assert!(!term.buffer_contains("Show Example Code"));
    }
}
