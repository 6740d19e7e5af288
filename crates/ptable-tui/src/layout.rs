//! Screen and grid layout
//!
//! Cards are laid out in *content* coordinates: the grid is as tall as it
//! needs to be and the renderer scrolls a viewport over it. Each card is
//! described as a list of [`CardRow`]s so that drawing and hit regions come
//! from the same computation.

use ptable_app::{CardRegions, CardUiState, CellRect};
use ptable_core::{ContentBundle, LanguageEntry, ParadigmTag};
use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Header height (top border + title row + bottom border)
pub const HEADER_HEIGHT: u16 = 3;

/// Columns between cards in a grid row
pub const COLUMN_GAP: u16 = 2;

/// Rows between grid rows
pub const ROW_GAP: u16 = 1;

/// Border plus one cell of padding on each side
pub const CARD_INSET: u16 = 2;

/// Widths below which the grid drops to fewer columns
pub const TWO_COLUMN_MIN_WIDTH: u16 = 80;
pub const THREE_COLUMN_MIN_WIDTH: u16 = 130;

const MAX_COLUMNS: usize = 6;
const BADGE_GAP: u16 = 1;
const TAB_WIDTH: usize = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub grid: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)]).split(area);
    ScreenAreas {
        header: chunks[0],
        grid: chunks[1],
    }
}

/// Grid columns for a grid `width` cells wide
///
/// `fixed` > 0 overrides the breakpoints.
pub fn grid_columns(width: u16, fixed: usize) -> usize {
    if fixed > 0 {
        return fixed.min(MAX_COLUMNS);
    }
    if width < TWO_COLUMN_MIN_WIDTH {
        1
    } else if width < THREE_COLUMN_MIN_WIDTH {
        2
    } else {
        3
    }
}

/// Greedy word wrap by display width
///
/// Words wider than `width` are split. Always returns at least one line for
/// non-empty input when `width` > 0.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if line_width > 0 && line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
                continue;
            }
            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            // Hard-split an over-long word
            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if line_width + w > width && line_width > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += w;
            }
        }

        if line_width > 0 || paragraph.trim().is_empty() {
            lines.push(line);
        }
    }
    lines
}

/// Cut `text` to at most `width` display cells, expanding tabs
pub fn truncate(text: &str, width: u16) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - used % TAB_WIDTH;
            if used + pad > width as usize {
                break;
            }
            out.extend(std::iter::repeat(' ').take(pad));
            used += pad;
            continue;
        }
        let w = ch.width().unwrap_or(0);
        if used + w > width as usize {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

/// Fit `text` on one line of `width` cells, marking a cut with `…`
pub fn ellipsize(text: &str, width: u16) -> String {
    if text.width() <= width as usize {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = truncate(text, width - 1);
    out.push('…');
    out
}

/// Which disclosure panel a button controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Attributes,
    Snippet,
}

impl PanelKind {
    pub fn label(&self, open: bool) -> &'static str {
        match (self, open) {
            (PanelKind::Attributes, false) => "Show Core Attributes",
            (PanelKind::Attributes, true) => "Hide Core Attributes",
            (PanelKind::Snippet, false) => "Show Example Code",
            (PanelKind::Snippet, true) => "Hide Example Code",
        }
    }

    /// Button text including its padding
    pub fn button_text(&self, open: bool) -> String {
        format!(" {} ", self.label(open))
    }
}

/// A badge placed on a badge row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeSlot {
    pub tag: ParadigmTag,
    /// Offset from the start of the text area
    pub x: u16,
    pub width: u16,
}

/// Badge text including its padding
pub fn badge_text(tag: ParadigmTag) -> String {
    format!(" {} ", tag.label())
}

/// One text row inside a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardRow {
    Name(String),
    Since(u16),
    Blank,
    Description(String),
    Badges(Vec<BadgeSlot>),
    Button { kind: PanelKind, open: bool },
    Heading(&'static str),
    Attribute { label: &'static str, value: String },
    /// Wrapped continuation of a panel line, indented by `indent`
    Continuation { indent: u16, text: String },
    Problem(String),
    Code(String),
}

impl CardRow {
    /// Rows drawn on the panel background
    pub fn is_panel(&self) -> bool {
        matches!(
            self,
            CardRow::Heading(_)
                | CardRow::Attribute { .. }
                | CardRow::Continuation { .. }
                | CardRow::Problem(_)
                | CardRow::Code(_)
        )
    }
}

/// Rows and interactive regions of one card, relative to its top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub rows: Vec<CardRow>,
    pub regions: CardRegions,
    /// Natural height including borders
    pub height: u16,
}

impl CardLayout {
    pub fn new(
        language: &LanguageEntry,
        content: &ContentBundle,
        ui: &CardUiState,
        width: u16,
    ) -> Self {
        let text_width = width.saturating_sub(CARD_INSET * 2);
        let mut rows = Vec::new();

        rows.push(CardRow::Name(language.name.clone()));
        rows.push(CardRow::Since(language.year));
        rows.push(CardRow::Blank);
        rows.extend(
            wrap_text(&language.description, text_width)
                .into_iter()
                .map(CardRow::Description),
        );
        rows.push(CardRow::Blank);

        let badges_start = rows.len();
        rows.extend(badge_rows(&language.paradigms, text_width));
        let badges_end = rows.len();

        rows.push(CardRow::Blank);
        let attributes_row = rows.len();
        rows.push(CardRow::Button {
            kind: PanelKind::Attributes,
            open: ui.attributes_panel_open,
        });
        let snippet_row = rows.len();
        rows.push(CardRow::Button {
            kind: PanelKind::Snippet,
            open: ui.snippet_panel_open,
        });

        if ui.attributes_panel_open {
            rows.push(CardRow::Blank);
            rows.push(CardRow::Heading("Core Attributes"));
            let attributes = content.attributes(&language.name);
            for (label, value) in attributes.rows() {
                push_attribute(&mut rows, label, &value, text_width);
            }
        }

        if ui.snippet_panel_open {
            let snippet = content.snippet(&language.name);
            rows.push(CardRow::Blank);
            rows.push(CardRow::Heading("Example Code"));
            rows.extend(
                wrap_text(&snippet.problem, text_width)
                    .into_iter()
                    .map(CardRow::Problem),
            );
            rows.extend(
                snippet
                    .code
                    .trim_end()
                    .lines()
                    .map(|line| CardRow::Code(truncate(line, text_width))),
            );
        }

        let regions = card_regions(
            &rows,
            language,
            width,
            text_width,
            badges_start..badges_end,
            attributes_row,
            snippet_row,
        );
        let height = u16::try_from(rows.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);

        Self {
            rows,
            regions,
            height,
        }
    }
}

fn badge_rows(tags: &[ParadigmTag], text_width: u16) -> Vec<CardRow> {
    let mut rows = Vec::new();
    let mut current = Vec::new();
    let mut x = 0;

    for tag in tags {
        let width = badge_text(*tag).width() as u16;
        if x > 0 && x + width > text_width {
            rows.push(CardRow::Badges(std::mem::take(&mut current)));
            x = 0;
        }
        current.push(BadgeSlot { tag: *tag, x, width });
        x += width + BADGE_GAP;
    }
    if !current.is_empty() {
        rows.push(CardRow::Badges(current));
    }
    rows
}

fn push_attribute(rows: &mut Vec<CardRow>, label: &'static str, value: &str, text_width: u16) {
    let indent = label.width() as u16 + 2;
    if text_width > indent + 8 {
        let mut lines = wrap_text(value, text_width - indent).into_iter();
        rows.push(CardRow::Attribute {
            label,
            value: lines.next().unwrap_or_default(),
        });
        rows.extend(lines.map(|text| CardRow::Continuation { indent, text }));
    } else {
        rows.push(CardRow::Attribute {
            label,
            value: String::new(),
        });
        rows.extend(
            wrap_text(value, text_width)
                .into_iter()
                .map(|text| CardRow::Continuation { indent: 0, text }),
        );
    }
}

fn card_regions(
    rows: &[CardRow],
    language: &LanguageEntry,
    width: u16,
    text_width: u16,
    badge_rows: std::ops::Range<usize>,
    attributes_row: usize,
    snippet_row: usize,
) -> CardRegions {
    let x0 = CARD_INSET as i32;
    // first text row sits below the top border
    let row_y = |row: usize| row as i32 + 1;

    let mut badges = Vec::new();
    for row in badge_rows {
        if let Some(CardRow::Badges(slots)) = rows.get(row) {
            for slot in slots {
                let w = slot.width.min(text_width.saturating_sub(slot.x));
                badges.push((
                    slot.tag,
                    CellRect::new(x0 + slot.x as i32, row_y(row), w, 1),
                ));
            }
        }
    }

    let button = |row: usize| match rows.get(row) {
        Some(CardRow::Button { kind, open }) => {
            let w = (kind.button_text(*open).width() as u16).min(text_width);
            CellRect::new(x0, row_y(row), w, 1)
        }
        _ => CellRect::default(),
    };

    CardRegions {
        bounds: CellRect::new(
            0,
            0,
            width,
            u16::try_from(rows.len()).unwrap_or(u16::MAX).saturating_add(2),
        ),
        link: CellRect::new(
            x0,
            row_y(0),
            (language.name.width() as u16).min(text_width),
            1,
        ),
        badges,
        attributes_button: button(attributes_row),
        snippet_button: button(snippet_row),
    }
}

/// Layout of the whole grid in content coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    /// Total height including gaps
    pub height: u16,
    pub cards: Vec<CardLayout>,
}

impl GridLayout {
    /// Lay out every language card for a grid `width` cells wide
    ///
    /// Cards in the same grid row are stretched to the tallest one.
    pub fn new(content: &ContentBundle, cards: &[CardUiState], width: u16, columns: usize) -> Self {
        let columns = columns.max(1);
        let gaps = COLUMN_GAP * (columns as u16 - 1);
        let card_width = width.saturating_sub(gaps) / columns as u16;
        let default_ui = CardUiState::default();

        let mut layouts: Vec<CardLayout> = content
            .languages()
            .iter()
            .enumerate()
            .map(|(i, language)| {
                let ui = cards.get(i).unwrap_or(&default_ui);
                CardLayout::new(language, content, ui, card_width)
            })
            .collect();

        let mut y: i32 = 0;
        for (row, chunk) in layouts.chunks_mut(columns).enumerate() {
            if row > 0 {
                y += ROW_GAP as i32;
            }
            let row_height = chunk.iter().map(|c| c.height).max().unwrap_or(0);
            for (col, card) in chunk.iter_mut().enumerate() {
                let dx = col as i32 * (card_width + COLUMN_GAP) as i32;
                let regions = &mut card.regions;
                regions.bounds = CellRect::new(dx, y, card_width, row_height);
                regions.link = regions.link.offset(dx, y);
                regions.attributes_button = regions.attributes_button.offset(dx, y);
                regions.snippet_button = regions.snippet_button.offset(dx, y);
                for (_, rect) in &mut regions.badges {
                    *rect = rect.offset(dx, y);
                }
            }
            y += row_height as i32;
        }

        Self {
            columns,
            height: y.clamp(0, u16::MAX as i32) as u16,
            cards: layouts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> ContentBundle {
        ContentBundle::builtin().unwrap()
    }

    #[test]
    fn test_create_layout() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.grid.y, 3);
        assert_eq!(areas.grid.height, 21);
    }

    #[test]
    fn test_grid_column_breakpoints() {
        assert_eq!(grid_columns(40, 0), 1);
        assert_eq!(grid_columns(79, 0), 1);
        assert_eq!(grid_columns(80, 0), 2);
        assert_eq!(grid_columns(129, 0), 2);
        assert_eq!(grid_columns(130, 0), 3);
        assert_eq!(grid_columns(300, 0), 3);
    }

    #[test]
    fn test_grid_columns_fixed_override() {
        assert_eq!(grid_columns(40, 2), 2);
        assert_eq!(grid_columns(300, 1), 1);
        assert_eq!(grid_columns(300, 50), MAX_COLUMNS);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap_text("anything", 0).is_empty());
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_wrap_text_keeps_paragraphs() {
        assert_eq!(wrap_text("one\ntwo", 20), vec!["one", "two"]);
    }

    #[test]
    fn test_truncate_expands_tabs() {
        assert_eq!(truncate("\tx", 10), "    x");
        assert_eq!(truncate("abcdef", 3), "abc");
    }

    #[test]
    fn test_ellipsize_marks_cut() {
        assert_eq!(ellipsize("abcdef", 10), "abcdef");
        assert_eq!(ellipsize("abcdef", 6), "abcdef");
        assert_eq!(ellipsize("abcdef", 4), "abc…");
        assert_eq!(ellipsize("abcdef", 0), "");
    }

    #[test]
    fn test_card_layout_closed() {
        let content = builtin();
        let js = &content.languages()[0];
        let layout = CardLayout::new(js, &content, &CardUiState::default(), 40);

        assert_eq!(layout.rows[0], CardRow::Name("JavaScript".to_string()));
        assert_eq!(layout.height as usize, layout.rows.len() + 2);
        assert_eq!(layout.regions.link, CellRect::new(2, 1, 10, 1));

        let tags: Vec<_> = layout.regions.badges.iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, js.paradigms);
        assert!(!layout.rows.iter().any(|r| r.is_panel()));
    }

    #[test]
    fn test_card_layout_regions_match_rows() {
        let content = builtin();
        let js = &content.languages()[0];
        let layout = CardLayout::new(js, &content, &CardUiState::default(), 40);

        let attributes_y = layout.regions.attributes_button.y as usize - 1;
        assert_eq!(
            layout.rows[attributes_y],
            CardRow::Button {
                kind: PanelKind::Attributes,
                open: false
            }
        );
        let snippet_y = layout.regions.snippet_button.y as usize - 1;
        assert_eq!(
            layout.rows[snippet_y],
            CardRow::Button {
                kind: PanelKind::Snippet,
                open: false
            }
        );
        let (_, badge) = layout.regions.badges[0];
        assert!(matches!(layout.rows[badge.y as usize - 1], CardRow::Badges(_)));
    }

    #[test]
    fn test_badges_wrap_on_narrow_card() {
        let content = builtin();
        let js = &content.languages()[0];
        // text width 12: " OOP " + " FP " fit, " Declarative " wraps
        let layout = CardLayout::new(js, &content, &CardUiState::default(), 16);
        let badge_rows = layout
            .rows
            .iter()
            .filter(|r| matches!(r, CardRow::Badges(_)))
            .count();
        assert_eq!(badge_rows, 2);
        let ys: Vec<_> = layout.regions.badges.iter().map(|(_, r)| r.y).collect();
        assert_eq!(ys[0], ys[1]);
        assert_eq!(ys[2], ys[0] + 1);
    }

    #[test]
    fn test_open_panels_add_rows() {
        let content = builtin();
        let js = &content.languages()[0];
        let closed = CardLayout::new(js, &content, &CardUiState::default(), 50);

        let ui = CardUiState {
            attributes_panel_open: true,
            ..Default::default()
        };
        let open = CardLayout::new(js, &content, &ui, 50);
        assert!(open.height > closed.height);
        assert!(open.rows.contains(&CardRow::Heading("Core Attributes")));
        assert!(open
            .rows
            .iter()
            .any(|r| matches!(r, CardRow::Attribute { label: "Memory Model", .. })));
        assert!(!open.rows.contains(&CardRow::Heading("Example Code")));

        let ui = CardUiState {
            snippet_panel_open: true,
            ..Default::default()
        };
        let open = CardLayout::new(js, &content, &ui, 50);
        assert!(open.rows.contains(&CardRow::Heading("Example Code")));
        assert!(open.rows.iter().any(|r| matches!(r, CardRow::Code(_))));
        assert!(open.rows.contains(&CardRow::Button {
            kind: PanelKind::Snippet,
            open: true
        }));
    }

    #[test]
    fn test_grid_layout_positions() {
        let content = builtin();
        let cards = vec![CardUiState::default(); content.languages().len()];
        let grid = GridLayout::new(&content, &cards, 82, 2);

        assert_eq!(grid.columns, 2);
        assert_eq!(grid.cards.len(), content.languages().len());

        let first = grid.cards[0].regions.bounds;
        let second = grid.cards[1].regions.bounds;
        let third = grid.cards[2].regions.bounds;
        assert_eq!(first.width, 40);
        assert_eq!(second.x, 42);
        assert_eq!(first.height, second.height, "row is stretched");
        assert_eq!(third.y, first.bottom() + ROW_GAP as i32);
        assert_eq!(grid.cards[1].regions.link.x, 44);

        let last = grid.cards.last().unwrap().regions.bounds;
        assert_eq!(grid.height as i32, last.bottom());
    }

    #[test]
    fn test_grid_layout_grows_with_open_panel() {
        let content = builtin();
        let mut cards = vec![CardUiState::default(); content.languages().len()];
        let closed = GridLayout::new(&content, &cards, 80, 1);
        cards[0].snippet_panel_open = true;
        let open = GridLayout::new(&content, &cards, 80, 1);

        assert!(open.height > closed.height);
        assert!(open.cards[1].regions.bounds.y > closed.cards[1].regions.bounds.y);
    }
}
