//! Which palettes are shown, given the current filters.

use std::collections::BTreeSet;

use crate::palette::Palette;

/// Filter `catalog` by favorites and tag. Order is preserved; nothing is re-sorted.
///
/// An empty or absent `selected_tag` disables tag filtering.
pub fn visible_palettes<'a>(
    catalog: &'a [Palette],
    favorites: &BTreeSet<String>,
    show_favorites_only: bool,
    selected_tag: Option<&str>,
) -> Vec<&'a Palette> {
    visible_indices(catalog, favorites, show_favorites_only, selected_tag)
        .into_iter()
        .map(|i| &catalog[i])
        .collect()
}

/// Same as [`visible_palettes`], but yields catalog positions.
pub fn visible_indices(
    catalog: &[Palette],
    favorites: &BTreeSet<String>,
    show_favorites_only: bool,
    selected_tag: Option<&str>,
) -> Vec<usize> {
    let tag = selected_tag.filter(|t| !t.is_empty());
    catalog
        .iter()
        .enumerate()
        .filter(|(_, p)| !show_favorites_only || favorites.contains(&p.name))
        .filter(|(_, p)| tag.map_or(true, |t| p.has_tag(t)))
        .map(|(i, _)| i)
        .collect()
}

/// Sorted union of every tag used in the catalog.
pub fn all_tags(catalog: &[Palette]) -> Vec<String> {
    let tags: BTreeSet<&str> = catalog
        .iter()
        .filter_map(|p| p.tags.as_ref())
        .flatten()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect();
    tags.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;
