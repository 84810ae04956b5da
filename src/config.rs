use crate::browser::LaunchOptions;
use crate::dom::SelectorMap;
use crate::error::{Result, ScrapeError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Platform the listing pages are served from
pub const DEFAULT_BASE_URL: &str = "https://www.e-food.gr";

/// Workbook written when no output path is given
pub const DEFAULT_OUTPUT: &str = "athina_thessaloniki_patra.xlsx";

/// Everything a scrape run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub base_url: String,

    /// Area name to URL path, scraped in this order
    pub areas: IndexMap<String, String>,

    pub selectors: SelectorMap,

    pub output: PathBuf,

    pub launch: LaunchOptions,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            areas: default_areas(),
            selectors: SelectorMap::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            launch: LaunchOptions::default(),
        }
    }
}

/// The three delivery areas
pub fn default_areas() -> IndexMap<String, String> {
    [
        ("athina", "delivery/athina"),
        ("thessaloniki", "delivery/thessaloniki"),
        ("patra", "delivery/patra"),
    ]
    .into_iter()
    .map(|(area, path)| (area.to_string(), path.to_string()))
    .collect()
}

impl ScrapeConfig {
    /// Load a JSON config file; keys it leaves out keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ScrapeError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        Self::from_json(&raw).map_err(|e| match e {
            ScrapeError::Config(reason) => ScrapeError::Config(format!("{}: {}", path.display(), reason)),
            other => other,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| ScrapeError::Config(e.to_string()))
    }

    /// Full URL of an area page
    pub fn area_url(&self, area_path: &str) -> String {
        join_url(&self.base_url, area_path)
    }
}

/// Join a base URL and a path with exactly one `/` between them
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
