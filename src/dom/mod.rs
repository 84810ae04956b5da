//! DOM snapshot and selector handling
//!
//! This module provides functionality for reading listing data out of a rendered page:
//! - ListingDocument: owned snapshot of the page HTML
//! - ListingNode: fallible text lookups inside one listing container
//! - SelectorMap: every CSS selector the extractor uses, in one place

pub mod element;
pub mod selector_map;
pub mod tree;

pub use element::{ListingNode, element_text};
pub use selector_map::{SelectorMap, parse_selector};
pub use tree::ListingDocument;

use crate::error::Result;
use headless_chrome::Tab;
use std::sync::Arc;

/// Snapshot the rendered document of a browser tab
pub fn snapshot(tab: &Arc<Tab>) -> Result<ListingDocument> {
    ListingDocument::from_tab(tab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_map_export() {
        let map = SelectorMap::new();
        assert_eq!(map.container, "div.sc-cuaALn.hxWvNq");
    }

    #[test]
    fn test_listing_document_export() {
        let doc = ListingDocument::parse("<body><div class='a'></div></body>");
        assert_eq!(doc.select_all("div.a").unwrap().len(), 1);
    }
}
