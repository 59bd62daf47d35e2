use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::clipboard::ClipboardSink;
use crate::layout;
use crate::palette::{Color, CopyFormat, Palette};
use crate::state::PaletteState;

/// Everything the user can ask for, independent of which key or click produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextCard,
    PrevCard,
    NextSwatch,
    PrevSwatch,
    PageDown,
    PageUp,
    GoToTop,
    GoToBottom,
    CopySwatch,
    ToggleFavorite,
    ToggleFavoritesOnly,
    CycleFormat,
    SetFormat(CopyFormat),
    OpenTagPicker,
    ClearTag,
    /// Focus (and preview) a swatch without copying it.
    Preview { card: usize, color: usize },
    CopyAt { card: usize, color: usize },
    ToggleFavoriteAt { card: usize },
}

/// What sits under a screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Swatch { card: usize, color: usize },
    Star { card: usize },
    TopButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    /// Picking a tag; `cursor` 0 is "All tags", `n` is `tags[n - 1]`.
    TagPicker { cursor: usize },
}

/// Key bindings for browse mode.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::NextCard,
        KeyCode::Char('k') | KeyCode::Up => Action::PrevCard,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Action::NextSwatch,
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Action::PrevSwatch,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoToTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoToBottom,
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => Action::CopySwatch,
        KeyCode::Char('s') | KeyCode::Char('*') => Action::ToggleFavorite,
        KeyCode::Char('v') => Action::ToggleFavoritesOnly,
        KeyCode::Char('f') => Action::CycleFormat,
        KeyCode::Char('1') => Action::SetFormat(CopyFormat::Hex),
        KeyCode::Char('2') => Action::SetFormat(CopyFormat::Rgb),
        KeyCode::Char('3') => Action::SetFormat(CopyFormat::RgbPlain),
        KeyCode::Char('4') => Action::SetFormat(CopyFormat::Hsl),
        KeyCode::Char('t') => Action::OpenTagPicker,
        KeyCode::Char('T') => Action::ClearTag,
        _ => return None,
    };
    Some(action)
}

pub struct App {
    pub state: PaletteState,
    pub should_quit: bool,
    pub mode: Mode,

    // Position within the visible list.
    pub selected: usize,
    pub swatch: usize,
    pub scroll: usize,

    /// Last known terminal size.
    pub area: Rect,

    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(state: PaletteState, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            state,
            should_quit: false,
            mode: Mode::Browse,
            selected: 0,
            swatch: 0,
            scroll: 0,
            area: Rect::new(0, 0, 80, 24),
            clipboard,
        }
    }

    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.clamp_selection();
    }

    /// Cards that fit on one screen.
    pub fn page_size(&self) -> usize {
        layout::cards_per_page(layout::screen(self.area).grid)
    }

    pub fn selected_palette(&self) -> Option<&Palette> {
        self.state.visible_at(self.selected)
    }

    pub fn selected_color(&self) -> Option<&Color> {
        self.selected_palette()?.colors.get(self.swatch)
    }

    /// The "go to top" affordance only shows once the first card is scrolled away.
    pub fn show_top_button(&self) -> bool {
        self.scroll > 0
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.state.toasts.expire(now);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Mode::TagPicker { cursor } = self.mode {
            self.handle_tag_picker_key(key, cursor);
            return;
        }
        if let Some(action) = action_for_key(key) {
            self.dispatch(action);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.mode != Mode::Browse {
            return;
        }
        let action = match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::PrevCard),
            MouseEventKind::ScrollDown => Some(Action::NextCard),
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_test(mouse.column, mouse.row) {
                    Some(Hit::Swatch { card, color }) => Some(Action::CopyAt { card, color }),
                    Some(Hit::Star { card }) => Some(Action::ToggleFavoriteAt { card }),
                    Some(Hit::TopButton) => Some(Action::GoToTop),
                    None => None,
                }
            }
            MouseEventKind::Moved => match self.hit_test(mouse.column, mouse.row) {
                Some(Hit::Swatch { card, color }) => Some(Action::Preview { card, color }),
                _ => None,
            },
            _ => None,
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// Map a screen cell to the element drawn there.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let screen = layout::screen(self.area);
        let top_button = layout::top_button_rect(screen.status);
        if self.show_top_button() && layout::contains(top_button, column, row) {
            return Some(Hit::TopButton);
        }
        if !layout::contains(screen.grid, column, row) {
            return None;
        }

        let slot = ((row - screen.grid.y) / layout::CARD_HEIGHT) as usize;
        let card = self.scroll + slot;
        let palette = self.state.visible_at(card)?;
        let rect = layout::card_rect(screen.grid, slot);

        if layout::contains(layout::star_rect(rect), column, row) {
            return Some(Hit::Star { card });
        }
        layout::swatch_rects(layout::card_inner(rect), palette.colors.len())
            .iter()
            .position(|r| layout::contains(*r, column, row))
            .map(|color| Hit::Swatch { card, color })
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextCard => self.move_selection(1),
            Action::PrevCard => self.move_selection(-1),
            Action::NextSwatch => self.move_swatch(1),
            Action::PrevSwatch => self.move_swatch(-1),
            Action::PageDown => self.move_selection(self.page_size() as i64),
            Action::PageUp => self.move_selection(-(self.page_size() as i64)),
            Action::GoToTop => {
                self.selected = 0;
                self.swatch = 0;
                self.scroll = 0;
            }
            Action::GoToBottom => {
                self.selected = self.state.visible_indices().len().saturating_sub(1);
                self.swatch = 0;
                self.clamp_selection();
            }
            Action::CopySwatch => self.copy_selected(),
            Action::ToggleFavorite => self.toggle_selected_favorite(),
            Action::ToggleFavoritesOnly => {
                self.state.toggle_favorites_only();
                self.clamp_selection();
            }
            Action::CycleFormat => {
                let next = self.state.copy_format().next();
                self.state.set_copy_format(next);
            }
            Action::SetFormat(format) => self.state.set_copy_format(format),
            Action::OpenTagPicker => {
                let cursor = self
                    .state
                    .selected_tag()
                    .and_then(|t| self.state.tags().iter().position(|x| x == t))
                    .map_or(0, |i| i + 1);
                self.mode = Mode::TagPicker { cursor };
            }
            Action::ClearTag => {
                self.state.select_tag(None);
                self.clamp_selection();
            }
            Action::Preview { card, color } => self.focus(card, color),
            Action::CopyAt { card, color } => {
                self.focus(card, color);
                self.copy_selected();
            }
            Action::ToggleFavoriteAt { card } => {
                if card >= self.state.visible_indices().len() {
                    return;
                }
                // The focused swatch survives a star click on the current card.
                if card != self.selected {
                    self.focus(card, 0);
                }
                self.toggle_selected_favorite();
            }
        }
    }

    fn handle_tag_picker_key(&mut self, key: KeyEvent, cursor: usize) {
        let options = self.state.tags().len() + 1;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.mode = Mode::Browse,
            KeyCode::Char('j') | KeyCode::Down => {
                self.mode = Mode::TagPicker {
                    cursor: (cursor + 1).min(options - 1),
                };
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.mode = Mode::TagPicker {
                    cursor: cursor.saturating_sub(1),
                };
            }
            KeyCode::Enter => {
                let tag = cursor
                    .checked_sub(1)
                    .and_then(|i| self.state.tags().get(i).cloned());
                self.state.select_tag(tag);
                self.mode = Mode::Browse;
                self.selected = 0;
                self.swatch = 0;
                self.scroll = 0;
            }
            _ => {}
        }
    }

    fn focus(&mut self, card: usize, color: usize) {
        if card < self.state.visible_indices().len() {
            self.selected = card;
            self.swatch = color;
            self.clamp_selection();
        }
    }

    fn move_selection(&mut self, delta: i64) {
        let len = self.state.visible_indices().len();
        if len == 0 {
            return;
        }
        let new_idx = self.selected as i64 + delta;
        self.selected = new_idx.clamp(0, len as i64 - 1) as usize;
        self.clamp_selection();
    }

    fn move_swatch(&mut self, delta: i64) {
        let count = match self.selected_palette() {
            Some(p) if !p.colors.is_empty() => p.colors.len() as i64,
            _ => return,
        };
        self.swatch = (self.swatch as i64 + delta).rem_euclid(count) as usize;
    }

    fn copy_selected(&mut self) {
        let (selected, swatch) = (self.selected, self.swatch);
        self.state.copy_visible(selected, swatch, self.clipboard.as_mut());
    }

    fn toggle_selected_favorite(&mut self) {
        if let Some(name) = self.selected_palette().map(|p| p.name.clone()) {
            self.state.toggle_favorite(&name);
            self.clamp_selection();
        }
    }

    /// Keep the selection inside the visible list and on screen.
    fn clamp_selection(&mut self) {
        let len = self.state.visible_indices().len();
        if len == 0 {
            self.selected = 0;
            self.swatch = 0;
            self.scroll = 0;
            return;
        }
        self.selected = self.selected.min(len - 1);
        let colors = self.selected_palette().map_or(0, |p| p.colors.len());
        self.swatch = self.swatch.min(colors.saturating_sub(1));

        let page = self.page_size();
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + page {
            self.scroll = self.selected + 1 - page;
        }
        self.scroll = self.scroll.min(len.saturating_sub(page));
    }
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;
