//! The scrape loop: load, extract and collect each area in turn

use crate::browser::PageLoader;
use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::export;
use crate::listing::{self, ResultSet, total_records};
use std::path::Path;

/// Outcome of one pass over every configured area
#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    /// Areas that produced at least one record
    pub results: ResultSet,

    /// Areas whose page could not be loaded
    pub failed: Vec<String>,

    /// Areas that loaded but yielded no records
    pub empty: Vec<String>,
}

impl RunSummary {
    pub fn total_records(&self) -> usize {
        total_records(&self.results)
    }
}

/// Scrape every area of `config`, one page at a time.
///
/// A failure in one area is logged and never affects the others.
pub fn run<L: PageLoader>(config: &ScrapeConfig, loader: &mut L) -> RunSummary {
    for (role, err) in config.selectors.validate() {
        log::error!("Selector for {} is unusable: {}", role, err);
    }

    let mut summary = RunSummary::default();

    for (area, area_path) in &config.areas {
        log::info!("Fetching data for area: {}", area);
        let url = config.area_url(area_path);

        let document = match loader.load(&url, &config.selectors.container) {
            Ok(document) => document,
            Err(e) => {
                log::error!("Error fetching page {}: {}", url, e);
                summary.failed.push(area.clone());
                continue;
            }
        };

        if let Some(title) = document.title() {
            log::debug!("Loaded '{}' for area: {}", title, area);
        }
        log::info!("Extracting information for area: {}", area);
        let records = listing::extract(&document, &config.selectors);

        if records.is_empty() {
            log::error!("No structured data for area: {}", area_path);
            summary.empty.push(area.clone());
        } else {
            log::info!("Collected {} listings for area: {}", records.len(), area);
            summary.results.insert(area.clone(), records);
        }
    }

    log::debug!("Total structured data: {} entries", summary.total_records());
    summary
}

/// Write the collected results to `path`
pub fn export_results(summary: &RunSummary, path: impl AsRef<Path>) -> Result<usize> {
    export::export(&summary.results, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ListingDocument, SelectorMap};
    use crate::error::ScrapeError;
    use std::collections::HashMap;

    /// Serves canned HTML per URL; URLs without an entry fail to load
    struct FakeLoader {
        pages: HashMap<String, String>,
        requested: Vec<(String, String)>,
    }

    impl FakeLoader {
        fn new(pages: Vec<(&str, String)>) -> Self {
            Self {
                pages: pages.into_iter().map(|(url, html)| (url.to_string(), html)).collect(),
                requested: Vec::new(),
            }
        }
    }

    impl PageLoader for FakeLoader {
        fn load(&mut self, url: &str, ready_selector: &str) -> Result<ListingDocument> {
            self.requested.push((url.to_string(), ready_selector.to_string()));
            self.pages
                .get(url)
                .map(|html| ListingDocument::parse(html))
                .ok_or_else(|| ScrapeError::LaunchFailed("chrome not found".to_string()))
        }
    }

    fn config() -> ScrapeConfig {
        ScrapeConfig {
            base_url: "http://test".to_string(),
            selectors: SelectorMap {
                container: "div.shop".to_string(),
                title: "h3".to_string(),
                ..SelectorMap::default()
            },
            ..ScrapeConfig::default()
        }
    }

    fn shops(names: &[&str]) -> String {
        names
            .iter()
            .map(|n| format!(r#"<div class="shop"><h3>{}</h3></div>"#, n))
            .collect()
    }

    #[test]
    fn test_all_areas_collected_in_order() {
        let mut loader = FakeLoader::new(vec![
            ("http://test/delivery/athina", shops(&["A1", "A2"])),
            ("http://test/delivery/thessaloniki", shops(&["T1"])),
            ("http://test/delivery/patra", shops(&["P1"])),
        ]);

        let summary = run(&config(), &mut loader);

        let areas: Vec<_> = summary.results.keys().map(String::as_str).collect();
        assert_eq!(areas, vec!["athina", "thessaloniki", "patra"]);
        assert_eq!(summary.total_records(), 4);
        assert!(summary.failed.is_empty());
        assert!(summary.empty.is_empty());
    }

    #[test]
    fn test_failed_area_skipped() {
        let mut loader = FakeLoader::new(vec![
            ("http://test/delivery/athina", shops(&["A1"])),
            ("http://test/delivery/patra", shops(&["P1", "P2"])),
        ]);

        let summary = run(&config(), &mut loader);

        assert_eq!(summary.failed, vec!["thessaloniki"]);
        assert!(!summary.results.contains_key("thessaloniki"));
        assert_eq!(summary.results["athina"].len(), 1);
        assert_eq!(summary.results["patra"].len(), 2);
        assert_eq!(loader.requested.len(), 3);
    }

    #[test]
    fn test_empty_area_excluded() {
        let mut loader = FakeLoader::new(vec![
            ("http://test/delivery/athina", shops(&["A1"])),
            ("http://test/delivery/thessaloniki", "<p>Nothing here</p>".to_string()),
            ("http://test/delivery/patra", shops(&["P1"])),
        ]);

        let summary = run(&config(), &mut loader);

        assert_eq!(summary.empty, vec!["thessaloniki"]);
        assert_eq!(summary.results.len(), 2);
    }

    #[test]
    fn test_loader_waits_for_container_selector() {
        let mut loader = FakeLoader::new(vec![]);
        run(&config(), &mut loader);

        assert!(loader.requested.iter().all(|(_, ready)| ready == "div.shop"));
    }

    #[test]
    fn test_nothing_collected_writes_nothing() {
        let mut loader = FakeLoader::new(vec![]);
        let summary = run(&config(), &mut loader);
        assert_eq!(summary.failed.len(), 3);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        assert!(matches!(export_results(&summary, &path), Err(ScrapeError::NoData)));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_results_writes_one_sheet_per_area() {
        let mut loader = FakeLoader::new(vec![
            ("http://test/delivery/athina", shops(&["A1"])),
            ("http://test/delivery/patra", shops(&["P1"])),
        ]);
        let summary = run(&config(), &mut loader);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        assert_eq!(export_results(&summary, &path).unwrap(), 2);
        assert!(path.exists());
    }
}
