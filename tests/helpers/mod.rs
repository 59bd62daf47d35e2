use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::clipboard::{ClipboardError, ClipboardSink};
use crate::favorites::{FavoritesStore, StoreError};
use crate::palette::{Color, Palette};

/// Create a color, deriving `rgb_plain` from `rgb`.
pub fn color(hex: &str, rgb: &str, hsl: &str) -> Color {
    Color::new(hex, rgb, hsl)
}

/// Create a palette with a single placeholder color.
pub fn palette(name: &str, tags: &[&str]) -> Palette {
    Palette {
        name: name.to_string(),
        colors: vec![color("#808080", "rgb(128, 128, 128)", "hsl(0, 0%, 50%)")],
        tags: if tags.is_empty() {
            None
        } else {
            Some(tags.iter().map(|t| t.to_string()).collect())
        },
    }
}

/// Four palettes: "Ocean Breeze" (cool), "Sunset" (warm), "Forest" (warm, nature),
/// "Mono" (untagged).
pub fn sample_catalog() -> Vec<Palette> {
    vec![
        Palette {
            name: "Ocean Breeze".to_string(),
            colors: vec![
                color("#2E86AB", "rgb(46, 134, 171)", "hsl(200, 58%, 43%)"),
                color("#A23B72", "rgb(162, 59, 114)", "hsl(330, 47%, 43%)"),
            ],
            tags: Some(vec!["cool".to_string()]),
        },
        palette("Sunset", &["warm"]),
        palette("Forest", &["warm", "nature"]),
        palette("Mono", &[]),
    ]
}

pub fn favorites(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Clipboard that remembers every write.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Clipboard that rejects every write.
#[derive(Debug, Default)]
pub struct FailingClipboard;

impl ClipboardSink for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no display".to_string()))
    }
}

/// Store whose every read and write fails.
pub struct BrokenStore;

impl FavoritesStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from("/dev/null/store.json"),
            source: std::io::Error::other("denied"),
        })
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        self.get("x").map(|_| ())
    }
}
