use crate::dom::selector_map::parse_selector;
use crate::error::Result;
use scraper::ElementRef;

/// Text lookups scoped to one listing container.
///
/// Every lookup may fail independently; the extractor treats a failure as fatal for
/// the container it came from and for nothing else.
pub trait ListingNode {
    /// Text of every descendant matching `css`, in document order
    fn texts(&self, css: &str) -> Result<Vec<String>>;

    /// Text of the first descendant matching `css`
    fn first_text(&self, css: &str) -> Result<Option<String>> {
        Ok(self.texts(css)?.into_iter().next())
    }
}

impl ListingNode for ElementRef<'_> {
    fn texts(&self, css: &str) -> Result<Vec<String>> {
        let selector = parse_selector(css)?;
        Ok(self.select(&selector).map(|el| element_text(&el)).collect())
    }

    fn first_text(&self, css: &str) -> Result<Option<String>> {
        let selector = parse_selector(css)?;
        Ok(self.select(&selector).next().map(|el| element_text(&el)))
    }
}

/// Rendered-ish text of an element: descendant text joined, whitespace runs collapsed
pub fn element_text(element: &ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
