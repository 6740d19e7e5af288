//! Paradigm explanation tooltip
//!
//! The name and description run across the top. Core concepts, pros, cons
//! and example languages follow in a 2×2 grid, or one after another on
//! narrow screens. When the viewport is short the tooltip sheds detail
//! (history first, then multi-line items) so that every section stays on
//! screen.

use ptable_core::ParadigmExplanation;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use crate::layout::{ellipsize, wrap_text};
use crate::theme::{palette, styles};

/// Widest the tooltip grows
pub const MAX_TOOLTIP_WIDTH: u16 = 76;

/// Narrowest inner width that still gets the section grid
const TWO_COLUMN_MIN_INNER: u16 = 56;

const COLUMN_GAP: u16 = 3;

/// Border plus one cell of padding each side
const FRAME: u16 = 4;

/// Border rows
const FRAME_ROWS: u16 = 2;

/// How much of the explanation is spelled out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Detail {
    Full,
    NoHistory,
    /// One line per list item
    Compact,
    /// Compact, and a one-line description
    Minimal,
}

const DETAIL_LEVELS: [Detail; 4] = [
    Detail::Full,
    Detail::NoHistory,
    Detail::Compact,
    Detail::Minimal,
];

pub struct ParadigmTooltip<'a> {
    explanation: &'a ParadigmExplanation,
    show_history: bool,
}

impl<'a> ParadigmTooltip<'a> {
    pub fn new(explanation: &'a ParadigmExplanation) -> Self {
        Self {
            explanation,
            show_history: true,
        }
    }

    pub fn show_history(mut self, show: bool) -> Self {
        self.show_history = show;
        self
    }

    /// Tooltip width for a screen `available` cells wide
    pub fn width(available: u16) -> u16 {
        available.min(MAX_TOOLTIP_WIDTH)
    }

    /// Rendered height (including borders) at `width`, using the most
    /// detailed layout no taller than `max_height`
    pub fn height(&self, width: u16, max_height: u16) -> u16 {
        let lines = self.lines(
            width.saturating_sub(FRAME),
            max_height.saturating_sub(FRAME_ROWS),
        );
        u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(FRAME_ROWS)
    }

    /// Most detailed layout that fits `max_lines`, else the least detailed
    fn lines(&self, width: u16, max_lines: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for detail in DETAIL_LEVELS {
            lines = self.lines_at(width, detail);
            if lines.len() <= max_lines as usize {
                break;
            }
        }
        lines
    }

    fn lines_at(&self, width: u16, detail: Detail) -> Vec<Line<'static>> {
        let mut lines = self.summary(width, detail);
        lines.push(Line::default());

        if width >= TWO_COLUMN_MIN_INNER {
            let column = (width - COLUMN_GAP) / 2;
            let [concepts, pros, cons, examples] = self.sections(column, detail);
            lines.extend(side_by_side(&concepts, &pros, column));
            lines.push(Line::default());
            lines.extend(side_by_side(&cons, &examples, column));
        } else {
            for (i, section) in self.sections(width, detail).into_iter().enumerate() {
                if i > 0 {
                    lines.push(Line::default());
                }
                lines.extend(section);
            }
        }
        lines
    }

    /// Name, description and (optionally) history
    fn summary(&self, width: u16, detail: Detail) -> Vec<Line<'static>> {
        let e = self.explanation;
        let mut lines = vec![Line::styled(
            ellipsize(&e.name, width),
            styles::heading().fg(palette::ACCENT),
        )];

        if detail == Detail::Minimal {
            lines.push(Line::styled(
                ellipsize(&e.description, width),
                styles::text_primary(),
            ));
        } else {
            lines.extend(plain(&e.description, width, styles::text_primary()));
        }

        if detail == Detail::Full && self.show_history {
            if let Some(history) = e.history.as_deref().filter(|h| !h.is_empty()) {
                lines.push(Line::default());
                lines.push(Line::styled("History", styles::heading()));
                lines.extend(plain(history, width, styles::text_secondary()));
            }
        }
        lines
    }

    /// Core concepts, pros, cons and example languages, in that order
    fn sections(&self, width: u16, detail: Detail) -> [Vec<Line<'static>>; 4] {
        let e = self.explanation;
        let one_line = matches!(detail, Detail::Compact | Detail::Minimal);

        let list = |title: &'static str, items: &[String], bullet: &'static str, color: Color| {
            bulleted(title, items, bullet, color, width, one_line)
        };

        let examples = e.example_languages.join(", ");
        let mut example_lines = vec![Line::styled("Example Languages", styles::heading())];
        if one_line {
            example_lines.push(Line::styled(
                ellipsize(&examples, width),
                styles::text_secondary(),
            ));
        } else {
            example_lines.extend(plain(&examples, width, styles::text_secondary()));
        }

        [
            list("Core Concepts", &e.core_concepts, "• ", palette::TEXT_PRIMARY),
            list("Pros", &e.pros, "+ ", palette::PROS_FG),
            list("Cons", &e.cons, "- ", palette::CONS_FG),
            example_lines,
        ]
    }
}

fn plain(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|l| Line::styled(l, style))
        .collect()
}

/// Heading followed by bulleted items, continuation lines hang under the text
fn bulleted(
    title: &'static str,
    items: &[String],
    bullet: &'static str,
    color: Color,
    width: u16,
    one_line: bool,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(title, styles::heading())];
    let indent = bullet.chars().count() as u16;
    let text_width = width.saturating_sub(indent);

    for item in items {
        let wrapped = if one_line {
            vec![ellipsize(item, text_width)]
        } else {
            wrap_text(item, text_width)
        };
        for (i, text) in wrapped.into_iter().enumerate() {
            let lead = if i == 0 {
                bullet.to_string()
            } else {
                " ".repeat(indent as usize)
            };
            lines.push(Line::from(vec![
                Span::styled(lead, Style::default().fg(palette::TEXT_MUTED)),
                Span::styled(text, Style::default().fg(color)),
            ]));
        }
    }
    lines
}

/// Two `column`-wide blocks of lines next to each other
fn side_by_side(
    left: &[Line<'static>],
    right: &[Line<'static>],
    column: u16,
) -> Vec<Line<'static>> {
    let rows = left.len().max(right.len());
    (0..rows)
        .map(|i| {
            let mut spans = Vec::new();
            let mut used = 0;
            if let Some(line) = left.get(i) {
                used = line.width();
                spans.extend(line.spans.iter().cloned());
            }
            if let Some(line) = right.get(i) {
                let pad = (column + COLUMN_GAP) as usize;
                spans.push(Span::raw(" ".repeat(pad.saturating_sub(used))));
                spans.extend(line.spans.iter().cloned());
            }
            Line::from(spans)
        })
        .collect()
}

impl Widget for ParadigmTooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let style = Style::default().bg(palette::POPUP_BG);
        let block = styles::glass_block(styles::border_hover()).style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let text_area = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height);
        for (i, line) in self
            .lines(text_area.width, text_area.height)
            .iter()
            .take(text_area.height as usize)
            .enumerate()
        {
            buf.set_line(text_area.x, text_area.y + i as u16, line, text_area.width);
        }
    }
}

/// Darken a 1-cell strip right of and below `rect`
pub fn render_shadow(buf: &mut Buffer, rect: Rect) {
    let shadow = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let bounds = *buf.area();

    let right = rect.x.saturating_add(rect.width);
    let bottom = rect.y.saturating_add(rect.height);
    let cells = (rect.y.saturating_add(1)..=bottom)
        .map(|y| (right, y))
        .chain((rect.x.saturating_add(1)..right).map(|x| (x, bottom)));

    for (x, y) in cells {
        if x < bounds.right() && y < bounds.bottom() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ');
                cell.set_style(shadow);
            }
        }
    }
}
