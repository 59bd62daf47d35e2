pub mod format;

use serde::{Deserialize, Serialize};

pub use format::{extract_rgb_plain, resolve_copy_value, CopyFormat};

/// A single swatch. `rgb_plain` is always filled in once deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawColor")]
pub struct Color {
    pub hex: String,
    pub rgb: String,
    pub rgb_plain: String,
    pub hsl: String,
}

/// Catalog shape of a color, where `rgb_plain` may be omitted or empty.
#[derive(Debug, Deserialize)]
struct RawColor {
    hex: String,
    rgb: String,
    #[serde(default)]
    rgb_plain: Option<String>,
    hsl: String,
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        let rgb_plain = raw
            .rgb_plain
            .filter(|plain| !plain.is_empty())
            .unwrap_or_else(|| extract_rgb_plain(&raw.rgb));
        Self {
            hex: raw.hex,
            rgb: raw.rgb,
            rgb_plain,
            hsl: raw.hsl,
        }
    }
}

impl Color {
    pub fn new(hex: &str, rgb: &str, hsl: &str) -> Self {
        Self {
            hex: hex.to_string(),
            rgb: rgb.to_string(),
            rgb_plain: extract_rgb_plain(rgb),
            hsl: hsl.to_string(),
        }
    }
}

/// A named, ordered group of colors. The name is the palette's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Palette {
    /// Exact, case-sensitive tag membership. Untagged palettes never match.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

/// Top-level document of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub palettes: Vec<Palette>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_plain_taken_verbatim_when_present() {
        let json = r##"{"hex":"#2E86AB","rgb":"rgb(46, 134, 171)","rgb_plain":"46 134 171","hsl":"hsl(200, 58%, 43%)"}"##;
        let color: Color = serde_json::from_str(json).unwrap();
        assert_eq!(color.rgb_plain, "46 134 171");
    }

    #[test]
    fn rgb_plain_derived_when_missing() {
        let json = r##"{"hex":"#2E86AB","rgb":"rgb(46, 134, 171)","hsl":"hsl(200, 58%, 43%)"}"##;
        let color: Color = serde_json::from_str(json).unwrap();
        assert_eq!(color.rgb_plain, "(46, 134, 171)");
    }

    #[test]
    fn empty_rgb_plain_is_derived() {
        let json = r##"{"hex":"#2E86AB","rgb":"rgb(46, 134, 171)","rgb_plain":"","hsl":"hsl(200, 58%, 43%)"}"##;
        let color: Color = serde_json::from_str(json).unwrap();
        assert_eq!(color.rgb_plain, "(46, 134, 171)");
    }

    #[test]
    fn has_tag_is_exact_and_case_sensitive() {
        let palette = Palette {
            name: "Dusk".into(),
            colors: vec![Color::new("#000000", "rgb(0, 0, 0)", "hsl(0, 0%, 0%)")],
            tags: Some(vec!["warm".into(), "Night".into()]),
        };
        assert!(palette.has_tag("warm"));
        assert!(!palette.has_tag("Warm"));
        assert!(!palette.has_tag("night"));
        assert!(!palette.has_tag("war"));
    }

    #[test]
    fn untagged_palette_never_matches() {
        let json = r##"{"name":"Plain","colors":[{"hex":"#FFFFFF","rgb":"rgb(255, 255, 255)","hsl":"hsl(0, 0%, 100%)"}]}"##;
        let palette: Palette = serde_json::from_str(json).unwrap();
        assert_eq!(palette.tags, None);
        assert!(!palette.has_tag("warm"));
    }
}
