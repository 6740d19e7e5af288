//! Header bar widget
//!
//! Title and subtitle on the left; key hints or the latest status message on
//! the right when there is room.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const TITLE: &str = "Programming Paradigms Table";
pub const SUBTITLE: &str = "Explore programming paradigms and languages.";

const HINTS: [(&str, &str); 6] = [
    ("Tab", "Focus"),
    ("a/s", "Panels"),
    ("f", "Facts"),
    ("p", "Paradigms"),
    ("o", "Open"),
    ("q", "Quit"),
];

pub struct MainHeader<'a> {
    status: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new() -> Self {
        Self { status: None }
    }

    /// Show a status message in place of the key hints
    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    fn right_line(&self) -> Line<'a> {
        if let Some(status) = self.status {
            return Line::from(Span::styled(
                status,
                Style::default().fg(palette::STATUS_YELLOW),
            ));
        }

        let mut spans = Vec::new();
        for (i, (key, label)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {label}"), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Default for MainHeader<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(styles::border_inactive())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                TITLE,
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let subtitle = Line::from(vec![
            Span::styled(" / ", styles::text_muted()),
            Span::styled(SUBTITLE, styles::text_secondary()),
        ]);
        let right = self.right_line();

        let title_width = title.width() as u16;
        let subtitle_width = subtitle.width() as u16;
        let right_width = right.width() as u16;

        buf.set_line(inner.x, inner.y, &title, inner.width);

        // A status message always shows; hints only when the whole row fits
        let fits = |extra: u16| title_width + extra <= inner.width;
        let show_right = self.status.is_some() || fits(subtitle_width + right_width + 2);
        let right_room = if show_right { right_width + 2 } else { 0 };

        let mut used = title_width;
        if fits(subtitle_width + right_room) {
            buf.set_line(inner.x + used, inner.y, &subtitle, subtitle_width);
            used += subtitle_width;
        }

        if show_right {
            // keep one cell before the border
            let width = right_width.min(inner.width.saturating_sub(used + 2));
            if width > 0 {
                let x = inner.x + inner.width - width - 1;
                buf.set_line(x, inner.y, &right, width);
            }
        }
    }
}
