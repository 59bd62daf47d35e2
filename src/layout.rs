//! Screen geometry shared by the renderer and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const TOOLBAR_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;
/// Border, two swatch rows, border.
pub const CARD_HEIGHT: u16 = 4;
pub const TOP_BUTTON: &str = " \u{2191} top ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub toolbar: Rect,
    pub grid: Rect,
    pub status: Rect,
}

pub fn screen(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    ScreenLayout {
        toolbar: rows[0],
        grid: rows[1],
        status: rows[2],
    }
}

/// How many whole cards fit in the grid. Never zero.
pub fn cards_per_page(grid: Rect) -> usize {
    ((grid.height / CARD_HEIGHT) as usize).max(1)
}

/// Rectangle of the card in page slot `slot` (0 = top of the grid).
pub fn card_rect(grid: Rect, slot: usize) -> Rect {
    let y = grid.y.saturating_add(slot as u16 * CARD_HEIGHT);
    let bottom = grid.y.saturating_add(grid.height);
    Rect {
        x: grid.x,
        y,
        width: grid.width,
        height: CARD_HEIGHT.min(bottom.saturating_sub(y)),
    }
}

/// Area inside the card border.
pub fn card_inner(card: Rect) -> Rect {
    Rect {
        x: card.x.saturating_add(1),
        y: card.y.saturating_add(1),
        width: card.width.saturating_sub(2),
        height: card.height.saturating_sub(2),
    }
}

/// Split the card interior into `count` equal-width swatches.
pub fn swatch_rects(inner: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner)
        .to_vec()
}

/// The favorite star sits on the top border, right-aligned.
pub fn star_rect(card: Rect) -> Rect {
    Rect {
        x: card.x + card.width.saturating_sub(4),
        y: card.y,
        width: 3.min(card.width),
        height: 1,
    }
}

pub fn top_button_rect(status: Rect) -> Rect {
    let width = TOP_BUTTON.chars().count() as u16;
    Rect {
        x: status.x + status.width.saturating_sub(width),
        y: status.y,
        width: width.min(status.width),
        height: 1,
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
