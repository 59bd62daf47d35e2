//! Shared color palette for the TUI chrome, plus swatch color parsing.

use ratatui::style::Color;

// ── Chrome ──────────────────────────────────────────────────────────
pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;
pub const FAVORITE: Color = Color::Rgb(255, 200, 60);
pub const ACTIVE_BG: Color = Color::Rgb(60, 55, 50);
pub const ACTIVE_FG: Color = Color::Rgb(255, 220, 150);
pub const TOAST_BG: Color = Color::Rgb(40, 40, 48);
pub const TOAST_FG: Color = Color::White;

/// Parse `#RRGGBB` or `#RGB` (the `#` is optional).
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some((
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                out[i] = v * 17;
            }
            Some((out[0], out[1], out[2]))
        }
        _ => None,
    }
}

/// Terminal color for a swatch. Unparseable values render as the default background.
pub fn swatch_color(hex: &str) -> Color {
    parse_hex(hex).map_or(Color::Reset, |(r, g, b)| Color::Rgb(r, g, b))
}

/// Black or white, whichever reads better on top of `hex`.
pub fn label_color(hex: &str) -> Color {
    match parse_hex(hex) {
        Some((r, g, b)) => {
            let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
            if luma > 140.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        None => Color::White,
    }
}
