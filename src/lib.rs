//! # delivery-listings
//!
//! Scrapes shop listings from a food-delivery platform's city pages with a headless
//! Chrome (via the Chrome DevTools Protocol) and exports them as a multi-sheet xlsx workbook.
//!
//! ## Features
//!
//! - **Page loading**: one Chrome session per page, closed before the next page is loaded
//! - **Explicit render wait**: waits for the first listing container instead of sleeping
//! - **Record extraction**: CSS-selector driven, with per-field defaults and per-listing failure isolation
//! - **Export**: one worksheet per delivery area
//!
//! ## Command Line
//!
//! ```bash
//! # Scrape athina, thessaloniki and patra into athina_thessaloniki_patra.xlsx
//! cargo run
//!
//! # Visible browser, custom config
//! cargo run -- --headed --config scrape.json
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use delivery_listings::{ChromeLoader, ScrapeConfig, runner};
//!
//! # fn main() -> delivery_listings::Result<()> {
//! let config = ScrapeConfig::default();
//! let mut loader = ChromeLoader::new(config.launch.clone());
//!
//! let summary = runner::run(&config, &mut loader);
//! println!("Collected {} listings", summary.total_records());
//!
//! runner::export_results(&summary, &config.output)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Extracting From HTML
//!
//! ```rust
//! use delivery_listings::{ListingDocument, SelectorMap, listing};
//!
//! let selectors = SelectorMap {
//!     container: "div.shop".to_string(),
//!     title: "h3".to_string(),
//!     ..SelectorMap::default()
//! };
//! let doc = ListingDocument::parse(r#"<div class="shop"><h3>Pita Pan</h3></div>"#);
//!
//! let records = listing::extract(&doc, &selectors);
//! assert_eq!(records[0].name, "Pita Pan");
//! assert_eq!(records[0].review_count, listing::NOT_PROVIDED);
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management, page handles and the [`PageLoader`] seam
//! - [`dom`]: HTML snapshots and the [`SelectorMap`]
//! - [`listing`]: Listing records and the extraction rules
//! - [`export`]: xlsx workbook writer
//! - [`runner`]: The per-area scrape loop
//! - [`config`]: Run configuration
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod config;
pub mod dom;
pub mod error;
pub mod export;
pub mod listing;
pub mod runner;

#[cfg(feature = "cli")]
pub mod logging;

pub use browser::{BrowserSession, ChromeLoader, ConnectionOptions, LaunchOptions, PageHandle, PageLoader};
pub use config::ScrapeConfig;
pub use dom::{ListingDocument, ListingNode, SelectorMap};
pub use error::{Result, ScrapeError};
pub use listing::{AreaResult, ListingRecord, ResultSet};
pub use runner::RunSummary;
