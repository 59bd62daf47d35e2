//! Textual color formats and the copy-value lookup.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Color;

/// Representation written to the clipboard on copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyFormat {
    #[default]
    Hex,
    Rgb,
    RgbPlain,
    Hsl,
}

impl CopyFormat {
    pub const ALL: [CopyFormat; 4] = [
        CopyFormat::Hex,
        CopyFormat::Rgb,
        CopyFormat::RgbPlain,
        CopyFormat::Hsl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CopyFormat::Hex => "hex",
            CopyFormat::Rgb => "rgb",
            CopyFormat::RgbPlain => "rgb_plain",
            CopyFormat::Hsl => "hsl",
        }
    }

    /// Parse an externally supplied format name. Unknown names fall back to hex.
    pub fn from_str_or_default(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == value)
            .unwrap_or_default()
    }

    /// The next format in dropdown order, wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for CopyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the field of `color` that corresponds to `format`.
pub fn resolve_copy_value(color: &Color, format: CopyFormat) -> &str {
    match format {
        CopyFormat::Hex => &color.hex,
        CopyFormat::Rgb => &color.rgb,
        CopyFormat::RgbPlain => &color.rgb_plain,
        CopyFormat::Hsl => &color.hsl,
    }
}

fn rgb_pattern() -> &'static Regex {
    static RGB: OnceLock<Regex> = OnceLock::new();
    RGB.get_or_init(|| {
        Regex::new(r"rgb\(([0-9]+),\s*([0-9]+),\s*([0-9]+)\)").expect("valid rgb pattern")
    })
}

/// Turn `rgb(r, g, b)` into `(r, g, b)`. Strings that don't match come back unchanged.
pub fn extract_rgb_plain(rgb: &str) -> String {
    match rgb_pattern().captures(rgb) {
        Some(caps) => format!("({}, {}, {})", &caps[1], &caps[2], &caps[3]),
        None => rgb.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ocean() -> Color {
        Color {
            hex: "#2E86AB".into(),
            rgb: "rgb(46, 134, 171)".into(),
            rgb_plain: "(46, 134, 171)".into(),
            hsl: "hsl(200, 58%, 43%)".into(),
        }
    }

    #[test]
    fn extract_plain_from_rgb() {
        assert_eq!(extract_rgb_plain("rgb(46, 134, 171)"), "(46, 134, 171)");
    }

    #[test]
    fn extract_plain_tolerates_missing_whitespace() {
        assert_eq!(extract_rgb_plain("rgb(1,2,3)"), "(1, 2, 3)");
        assert_eq!(extract_rgb_plain("rgb(1,   2,\t3)"), "(1, 2, 3)");
    }

    #[test]
    fn extract_plain_falls_back_to_input() {
        assert_eq!(extract_rgb_plain("rgba(1, 2, 3, 0.5)"), "rgba(1, 2, 3, 0.5)");
        assert_eq!(extract_rgb_plain("rgb( 1, 2, 3)"), "rgb( 1, 2, 3)");
        assert_eq!(extract_rgb_plain("rgb(1.5, 2, 3)"), "rgb(1.5, 2, 3)");
        assert_eq!(extract_rgb_plain(""), "");
    }

    #[test]
    fn extract_plain_only_accepts_ascii_digits() {
        assert_eq!(extract_rgb_plain("rgb(\u{661}\u{662}, 2, 3)"), "rgb(\u{661}\u{662}, 2, 3)");
        assert_eq!(extract_rgb_plain("rgb(\u{ff11}, 2, 3)"), "rgb(\u{ff11}, 2, 3)");
    }

    #[test]
    fn resolve_each_format() {
        let c = ocean();
        assert_eq!(resolve_copy_value(&c, CopyFormat::Hex), "#2E86AB");
        assert_eq!(resolve_copy_value(&c, CopyFormat::Rgb), "rgb(46, 134, 171)");
        assert_eq!(resolve_copy_value(&c, CopyFormat::RgbPlain), "(46, 134, 171)");
        assert_eq!(resolve_copy_value(&c, CopyFormat::Hsl), "hsl(200, 58%, 43%)");
    }

    #[test]
    fn rgb_plain_derived_for_copy() {
        let c = Color::new("#2E86AB", "rgb(46, 134, 171)", "hsl(200, 58%, 43%)");
        assert_eq!(resolve_copy_value(&c, CopyFormat::RgbPlain), "(46, 134, 171)");
    }

    #[test]
    fn unknown_format_name_falls_back_to_hex() {
        assert_eq!(CopyFormat::from_str_or_default("rgb_plain"), CopyFormat::RgbPlain);
        assert_eq!(CopyFormat::from_str_or_default("hsl"), CopyFormat::Hsl);
        assert_eq!(CopyFormat::from_str_or_default("cmyk"), CopyFormat::Hex);
        assert_eq!(CopyFormat::from_str_or_default("HSL"), CopyFormat::Hex);
        assert_eq!(CopyFormat::from_str_or_default(""), CopyFormat::Hex);
    }

    #[test]
    fn next_cycles_in_dropdown_order() {
        assert_eq!(CopyFormat::Hex.next(), CopyFormat::Rgb);
        assert_eq!(CopyFormat::Rgb.next(), CopyFormat::RgbPlain);
        assert_eq!(CopyFormat::RgbPlain.next(), CopyFormat::Hsl);
        assert_eq!(CopyFormat::Hsl.next(), CopyFormat::Hex);
    }

    #[test]
    fn serde_names_match_catalog_spelling() {
        let json = serde_json::to_string(&CopyFormat::RgbPlain).unwrap();
        assert_eq!(json, "\"rgb_plain\"");
        let parsed: CopyFormat = serde_json::from_str("\"hsl\"").unwrap();
        assert_eq!(parsed, CopyFormat::Hsl);
    }
}
