//! Main render/view function (View in TEA pattern)
//!
//! Besides drawing, `view` records the frame's [`HitMap`] on the state: the
//! pointer handlers resolve events against exactly what was last drawn.
//!
//! [`HitMap`]: ptable_app::HitMap


use ptable_app::overlay::{bubble_offsets, bubble_row, bubble_width, tooltip_rect, BUBBLE_COUNT};
use ptable_app::{AppState, CellRect};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;
use tracing::debug;

use crate::layout::{self, GridLayout};
use crate::theme::palette;
use crate::widgets::{self, FactBubble, LanguageCard, ParadigmTooltip};

/// Render the complete UI
///
/// Updates `state.hit_map` and clamps `state.scroll` to the new content
/// height; nothing else on the state is touched.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    frame.render_widget(
        widgets::MainHeader::new().with_status(state.status.as_deref()),
        areas.header,
    );

    // One cell of margin either side of the grid
    let grid_area = Rect::new(
        areas.grid.x.saturating_add(1),
        areas.grid.y,
        areas.grid.width.saturating_sub(2),
        areas.grid.height,
    );
    if grid_area.is_empty() {
        return;
    }

    let columns = layout::grid_columns(area.width, state.settings.ui.columns);
    let grid = GridLayout::new(&state.content, &state.cards, grid_area.width, columns);
    record_hit_map(state, &grid, grid_area);

    render_grid(frame.buffer_mut(), state, &grid, grid_area);
    render_bubbles(frame.buffer_mut(), state, grid_area);
    render_tooltip(frame.buffer_mut(), state, grid_area);
}

fn record_hit_map(state: &mut AppState, grid: &GridLayout, grid_area: Rect) {
    let hit_map = &mut state.hit_map;
    hit_map.viewport = CellRect::new(
        grid_area.x as i32,
        grid_area.y as i32,
        grid_area.width,
        grid_area.height,
    );
    hit_map.content_height = grid.height;
    hit_map.columns = grid.columns;
    hit_map.cards = grid.cards.iter().map(|c| c.regions.clone()).collect();

    // Content may have shrunk (panel closed, terminal grew)
    let scroll = state.scroll;
    state.set_scroll(scroll);
}

/// Draw every card into an offscreen buffer as tall as the grid, then copy
/// the scrolled window into the frame
fn render_grid(buf: &mut Buffer, state: &AppState, grid: &GridLayout, grid_area: Rect) {
    if grid.height == 0 {
        return;
    }

    let top = state.scroll;
    let bottom = top.saturating_add(grid_area.height);
    let mut content = Buffer::empty(Rect::new(0, 0, grid_area.width, grid.height));
    content.set_style(content.area, Style::default().bg(palette::DEEPEST_BG));

    for (index, card) in grid.cards.iter().enumerate() {
        let bounds = card.regions.bounds;
        let Some(rect) = content_rect(bounds) else {
            continue;
        };
        if rect.bottom() <= top || rect.y >= bottom {
            continue;
        }

        let ui = state.cards.get(index).cloned().unwrap_or_default();
        LanguageCard::new(card)
            .focused(index == state.focused)
            .hovered(ui.is_card_hovered || ui.hovered_paradigm.is_some())
            .hovered_badge(ui.hovered_paradigm)
            .render(rect.intersection(content.area), &mut content);
    }

    for row in 0..grid_area.height {
        let src_y = top.saturating_add(row);
        if src_y >= grid.height {
            break;
        }
        for col in 0..grid_area.width {
            let dst = (grid_area.x + col, grid_area.y + row);
            if let Some(cell) = buf.cell_mut(dst) {
                *cell = content[(col, src_y)].clone();
            }
        }
    }
}

fn render_bubbles(buf: &mut Buffer, state: &AppState, grid_area: Rect) {
    let Some(index) = state.cards.iter().position(|c| c.bubbles_visible()) else {
        return;
    };
    let (Some(card), Some(language)) = (state.hit_map.card_screen_rect(index), state.language(index))
    else {
        return;
    };

    let viewport = state.hit_map.viewport;
    let facts = state.content.fact_slots(&language.name, BUBBLE_COUNT);
    let height = widgets::bubble_height(&facts, bubble_width(viewport.width));
    let offsets = bubble_offsets(state.bubble_elapsed_ms(index));

    for (rect, fact) in bubble_row(card, viewport, height, &offsets)
        .into_iter()
        .zip(facts)
    {
        if let Some(rect) = screen_rect(rect, grid_area) {
            FactBubble::new(fact).render(rect, buf);
        }
    }
}

fn render_tooltip(buf: &mut Buffer, state: &AppState, grid_area: Rect) {
    let Some((index, (tag, anchor))) = state
        .cards
        .iter()
        .enumerate()
        .find_map(|(i, c)| c.tooltip().map(|t| (i, t)))
    else {
        return;
    };
    let Some(card) = state.hit_map.card_screen_rect(index) else {
        return;
    };
    let Some(explanation) = state.content.explanation(tag) else {
        debug!("No explanation for {tag}");
        return;
    };

    let viewport = state.hit_map.viewport;
    let tooltip = ParadigmTooltip::new(explanation).show_history(state.settings.ui.show_history);
    let width = ParadigmTooltip::width(viewport.width);
    let height = tooltip.height(width, viewport.height);
    let rect = tooltip_rect(
        anchor,
        card,
        width,
        height,
        state.settings.ui.tooltip_offset,
        viewport,
    );

    if let Some(rect) = screen_rect(rect, grid_area) {
        widgets::render_shadow(buf, rect);
        tooltip.render(rect, buf);
    }
}

/// Content-space rectangle as a buffer rect; content never has negative
/// coordinates
fn content_rect(rect: CellRect) -> Option<Rect> {
    let x = u16::try_from(rect.x).ok()?;
    let y = u16::try_from(rect.y).ok()?;
    Some(Rect::new(x, y, rect.width, rect.height))
}

/// Clip a screen-space rectangle to `clip`
fn screen_rect(rect: CellRect, clip: Rect) -> Option<Rect> {
    let left = rect.x.max(clip.x as i32);
    let top = rect.y.max(clip.y as i32);
    let right = rect.right().min(clip.right() as i32);
    let bottom = rect.bottom().min(clip.bottom() as i32);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}
