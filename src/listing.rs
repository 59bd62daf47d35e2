//! Plain-text listing of the visible palettes, used by `--list`.

use crate::palette::resolve_copy_value;
use crate::state::PaletteState;

/// One header line, a blank line, then each visible palette followed by its
/// colors in the current copy format.
pub fn render(state: &PaletteState) -> String {
    let format = state.copy_format();
    let visible = state.visible();

    let mut out = format!(
        "{} of {} palettes (format: {})\n\n",
        visible.len(),
        state.catalog().len(),
        format
    );
    for palette in visible {
        let star = if state.is_favorite(&palette.name) { "\u{2605}" } else { "\u{2606}" };
        let tags = palette
            .tags
            .as_ref()
            .filter(|t| !t.is_empty())
            .map(|t| format!(" [{}]", t.join(", ")))
            .unwrap_or_default();
        out.push_str(&format!("{} {}{}\n", star, palette.name, tags));
        for color in &palette.colors {
            out.push_str(&format!("    {}\n", resolve_copy_value(color, format)));
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;
