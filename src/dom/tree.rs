use crate::dom::selector_map::parse_selector;
use crate::error::{Result, ScrapeError};
use headless_chrome::Tab;
use scraper::{ElementRef, Html};
use std::sync::Arc;

/// Owned snapshot of a rendered page.
///
/// Taking the snapshot detaches extraction from the browser, so the session can be
/// closed before a single field is read.
#[derive(Debug, Clone)]
pub struct ListingDocument {
    html: Html,
}

impl ListingDocument {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Snapshot the current DOM of a browser tab
    pub fn from_tab(tab: &Arc<Tab>) -> Result<Self> {
        let content = tab
            .get_content()
            .map_err(|e| ScrapeError::ContentFailed(format!("Failed to read rendered HTML: {}", e)))?;

        Ok(Self::parse(&content))
    }

    /// All elements matching `css`, in document order
    pub fn select_all(&self, css: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = parse_selector(css)?;
        Ok(self.html.select(&selector).collect())
    }

    /// The `<title>` of the page, if any
    pub fn title(&self) -> Option<String> {
        let selector = parse_selector("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| super::element::element_text(&el))
            .filter(|t| !t.is_empty())
    }
}
