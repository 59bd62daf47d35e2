//! Application state and the transitions user actions drive.

use std::collections::BTreeSet;

use crate::clipboard::ClipboardSink;
use crate::favorites::{self, FavoritesStore};
use crate::filter;
use crate::palette::{resolve_copy_value, Color, CopyFormat, Palette};
use crate::toast::ToastQueue;

/// Result of [`PaletteState::toggle_favorite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub added: bool,
}

/// Result of a copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { format: CopyFormat, value: String },
    Failed,
}

/// Owns the catalog, the favorites and the session-only view settings.
///
/// The visible list is recomputed after every transition that can change it.
pub struct PaletteState {
    catalog: Vec<Palette>,
    favorites: BTreeSet<String>,
    copy_format: CopyFormat,
    show_favorites_only: bool,
    selected_tag: Option<String>,
    visible: Vec<usize>,
    tags: Vec<String>,
    store: Box<dyn FavoritesStore>,
    pub toasts: ToastQueue,
}

impl PaletteState {
    /// Takes the already loaded catalog and restores favorites from `store`.
    pub fn new(catalog: Vec<Palette>, store: Box<dyn FavoritesStore>) -> Self {
        let favorites = favorites::restore(store.as_ref());
        let tags = filter::all_tags(&catalog);
        let mut state = Self {
            catalog,
            favorites,
            copy_format: CopyFormat::default(),
            show_favorites_only: false,
            selected_tag: None,
            visible: Vec::new(),
            tags,
            store,
            toasts: ToastQueue::default(),
        };
        state.refresh();
        state
    }

    fn refresh(&mut self) {
        self.visible = filter::visible_indices(
            &self.catalog,
            &self.favorites,
            self.show_favorites_only,
            self.selected_tag.as_deref(),
        );
    }

    pub fn catalog(&self) -> &[Palette] {
        &self.catalog
    }

    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.contains(name)
    }

    pub fn copy_format(&self) -> CopyFormat {
        self.copy_format
    }

    pub fn set_copy_format(&mut self, format: CopyFormat) {
        self.copy_format = format;
    }

    pub fn show_favorites_only(&self) -> bool {
        self.show_favorites_only
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    /// Every tag used in the catalog, sorted.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Catalog positions of the palettes currently shown.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible(&self) -> Vec<&Palette> {
        self.visible.iter().map(|&i| &self.catalog[i]).collect()
    }

    /// The `n`th visible palette.
    pub fn visible_at(&self, n: usize) -> Option<&Palette> {
        self.visible.get(n).map(|&i| &self.catalog[i])
    }

    /// Flip the favorites-only view. Returns the new setting.
    pub fn toggle_favorites_only(&mut self) -> bool {
        self.set_show_favorites_only(!self.show_favorites_only);
        self.show_favorites_only
    }

    pub fn set_show_favorites_only(&mut self, on: bool) {
        self.show_favorites_only = on;
        self.refresh();
    }

    /// Filter by `tag`; `None` or an empty string clears the filter.
    pub fn select_tag(&mut self, tag: Option<String>) {
        self.selected_tag = tag.filter(|t| !t.is_empty());
        self.refresh();
    }

    /// Add `name` to the favorites, or remove it if already there, then save.
    pub fn toggle_favorite(&mut self, name: &str) -> ToggleOutcome {
        let added = if self.favorites.remove(name) {
            self.toasts.push(format!("Removed \"{name}\" from favorites"));
            false
        } else {
            self.favorites.insert(name.to_string());
            self.toasts.push(format!("Added \"{name}\" to favorites"));
            true
        };
        tracing::debug!(name, added, "toggled favorite");

        favorites::persist(self.store.as_mut(), &self.favorites);
        self.refresh();
        ToggleOutcome { added }
    }

    /// Copy `color` in the current format. Failures only produce a notification.
    pub fn copy_color(&mut self, color: &Color, clipboard: &mut dyn ClipboardSink) -> CopyOutcome {
        let format = self.copy_format;
        let value = resolve_copy_value(color, format).to_string();
        match clipboard.write_text(&value) {
            Ok(()) => {
                self.toasts.push(format!(
                    "{} color copied: {}",
                    format.as_str().to_uppercase(),
                    value
                ));
                CopyOutcome::Copied { format, value }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to copy color");
                self.toasts.push("Failed to copy color");
                CopyOutcome::Failed
            }
        }
    }

    /// Copy color `color_idx` of the `n`th visible palette.
    pub fn copy_visible(
        &mut self,
        n: usize,
        color_idx: usize,
        clipboard: &mut dyn ClipboardSink,
    ) -> Option<CopyOutcome> {
        let color = self.visible_at(n)?.colors.get(color_idx)?.clone();
        Some(self.copy_color(&color, clipboard))
    }
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;
