//! One-shot catalog loading with a built-in fallback.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::palette::{CatalogFile, Color, Palette};

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "palettes.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no palettes")]
    Empty,
}

/// Anything that can hand over the raw catalog document.
pub trait CatalogSource {
    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;

    /// Fetch the raw JSON text of the catalog.
    #[allow(async_fn_in_trait)]
    async fn fetch(&self) -> Result<String, CatalogError>;
}

/// Catalog stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_PATH)
    }
}

impl CatalogSource for FileCatalog {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, CatalogError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Read {
                path: self.path.clone(),
                source,
            })
    }
}

/// Catalog held in memory.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    json: String,
}

impl StaticCatalog {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl CatalogSource for StaticCatalog {
    fn describe(&self) -> String {
        "<in-memory>".to_string()
    }

    async fn fetch(&self) -> Result<String, CatalogError> {
        Ok(self.json.clone())
    }
}

/// Load the catalog from `source`, degrading to [`fallback_catalog`] on any failure.
///
/// The result is never empty. There is no retry.
pub async fn load<S: CatalogSource>(source: &S) -> Vec<Palette> {
    match try_load(source).await {
        Ok(palettes) => {
            tracing::info!(
                source = %source.describe(),
                count = palettes.len(),
                "loaded palette catalog"
            );
            palettes
        }
        Err(e) => {
            tracing::error!(
                source = %source.describe(),
                error = %e,
                "failed to load palettes, using fallback"
            );
            fallback_catalog()
        }
    }
}

async fn try_load<S: CatalogSource>(source: &S) -> Result<Vec<Palette>, CatalogError> {
    let text = source.fetch().await?;
    parse_catalog(&text)
}

/// Parse a catalog document and normalize it.
///
/// Palettes without colors are dropped. When names repeat, the last definition
/// wins but keeps the position of the first one.
pub fn parse_catalog(text: &str) -> Result<Vec<Palette>, CatalogError> {
    let file: CatalogFile = serde_json::from_str(text)?;

    let mut palettes: Vec<Palette> = Vec::with_capacity(file.palettes.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for palette in file.palettes {
        if palette.colors.is_empty() {
            tracing::warn!(name = %palette.name, "skipping palette without colors");
            continue;
        }
        match positions.get(&palette.name) {
            Some(&idx) => {
                tracing::warn!(
                    name = %palette.name,
                    "duplicate palette name, keeping last definition"
                );
                palettes[idx] = palette;
            }
            None => {
                positions.insert(palette.name.clone(), palettes.len());
                palettes.push(palette);
            }
        }
    }

    if palettes.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(palettes)
}

/// The catalog used whenever loading fails.
pub fn fallback_catalog() -> Vec<Palette> {
    let color = |hex: &str, rgb: &str, rgb_plain: &str, hsl: &str| Color {
        hex: hex.to_string(),
        rgb: rgb.to_string(),
        rgb_plain: rgb_plain.to_string(),
        hsl: hsl.to_string(),
    };
    vec![Palette {
        name: "Ocean Breeze".to_string(),
        colors: vec![
            color("#2E86AB", "rgb(46, 134, 171)", "(46, 134, 171)", "hsl(200, 58%, 43%)"),
            color("#A23B72", "rgb(162, 59, 114)", "(162, 59, 114)", "hsl(330, 47%, 43%)"),
            color("#F18F01", "rgb(241, 143, 1)", "(241, 143, 1)", "hsl(35, 99%, 47%)"),
            color("#C73E1D", "rgb(199, 62, 29)", "(199, 62, 29)", "hsl(12, 74%, 45%)"),
            color("#3B1F2B", "rgb(59, 31, 43)", "(59, 31, 43)", "hsl(330, 31%, 18%)"),
        ],
        tags: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(fut)
    }

    const TWO_PALETTES: &str = r##"{"palettes":[
        {"name":"Sunset","colors":[{"hex":"#FF5E5B","rgb":"rgb(255, 94, 91)","hsl":"hsl(1, 100%, 68%)"}],"tags":["warm"]},
        {"name":"Mint","colors":[{"hex":"#3EB489","rgb":"rgb(62, 180, 137)","rgb_plain":"(62, 180, 137)","hsl":"hsl(158, 49%, 48%)"}]}
    ]}"##;

    #[test]
    fn fallback_is_ocean_breeze_with_five_colors() {
        let catalog = fallback_catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "Ocean Breeze");
        assert_eq!(catalog[0].colors.len(), 5);
        assert_eq!(catalog[0].colors[0].hex, "#2E86AB");
    }

    #[test]
    fn load_static_catalog_keeps_order() {
        let catalog = block_on(load(&StaticCatalog::new(TWO_PALETTES)));
        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Sunset", "Mint"]);
        assert_eq!(catalog[0].colors[0].rgb_plain, "(255, 94, 91)");
        assert_eq!(catalog[0].tags, Some(vec!["warm".to_string()]));
        assert_eq!(catalog[1].tags, None);
    }

    #[test]
    fn load_file_catalog() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{}", TWO_PALETTES).unwrap();
        tmp.flush().unwrap();

        let catalog = block_on(load(&FileCatalog::new(tmp.path())));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = block_on(load(&FileCatalog::new(dir.path().join("nope.json"))));
        assert_eq!(catalog, fallback_catalog());
    }

    #[test]
    fn malformed_json_falls_back() {
        let catalog = block_on(load(&StaticCatalog::new("{ not json")));
        assert_eq!(catalog, fallback_catalog());
    }

    #[test]
    fn wrong_shape_falls_back() {
        let catalog = block_on(load(&StaticCatalog::new(r#"{"colors":[]}"#)));
        assert_eq!(catalog, fallback_catalog());
        let catalog = block_on(load(&StaticCatalog::new(r#"{"palettes":[{"name":"x"}]}"#)));
        assert_eq!(catalog, fallback_catalog());
    }

    #[test]
    fn empty_catalog_falls_back() {
        assert!(matches!(parse_catalog(r#"{"palettes":[]}"#), Err(CatalogError::Empty)));
        let catalog = block_on(load(&StaticCatalog::new(r#"{"palettes":[]}"#)));
        assert_eq!(catalog[0].name, "Ocean Breeze");
    }

    #[test]
    fn palettes_without_colors_are_dropped() {
        let json = r##"{"palettes":[
            {"name":"Hollow","colors":[]},
            {"name":"Solid","colors":[{"hex":"#000000","rgb":"rgb(0, 0, 0)","hsl":"hsl(0, 0%, 0%)"}]}
        ]}"##;
        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "Solid");
    }

    #[test]
    fn duplicate_name_last_wins_at_first_position() {
        let json = r##"{"palettes":[
            {"name":"Twin","colors":[{"hex":"#111111","rgb":"rgb(17, 17, 17)","hsl":"hsl(0, 0%, 7%)"}]},
            {"name":"Other","colors":[{"hex":"#222222","rgb":"rgb(34, 34, 34)","hsl":"hsl(0, 0%, 13%)"}]},
            {"name":"Twin","colors":[{"hex":"#333333","rgb":"rgb(51, 51, 51)","hsl":"hsl(0, 0%, 20%)"}]}
        ]}"##;
        let catalog = parse_catalog(json).unwrap();
        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Twin", "Other"]);
        assert_eq!(catalog[0].colors[0].hex, "#333333");
    }
}
