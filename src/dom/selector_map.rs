use crate::error::{Result, ScrapeError};
use scraper::Selector;
use serde::{Deserialize, Serialize};

/// Every CSS selector the extractor relies on.
///
/// The platform's markup uses generated class names that change between deployments,
/// so they all live here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorMap {
    /// One listing card
    pub container: String,

    /// Shop name
    pub title: String,

    /// Service / cuisine badge
    pub service: String,

    /// Delivery window and minimum order share this one
    pub meta: String,

    pub rating: String,

    /// Text such as `4.5 (123)`
    pub reviews: String,

    /// Delivery cost
    pub price: String,
}

impl Default for SelectorMap {
    fn default() -> Self {
        Self {
            container: "div.sc-cuaALn.hxWvNq".to_string(),
            title: "h3.sc-fBxSrQ.gisfcW".to_string(),
            service: "span.sc-dYZCwJ.sc-ddDelH.cEPfiP".to_string(),
            meta: "span.sc-dYZCwJ.cEPfiP".to_string(),
            rating: "span.sc-hZOwmG.bSlFkx".to_string(),
            reviews: "div.sc-LwRDc.fIyFhK".to_string(),
            price: "span.sc-jMliHe.jbzmJK".to_string(),
        }
    }
}

impl SelectorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// All selectors keyed by role, in a stable order
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("container", self.container.as_str()),
            ("title", self.title.as_str()),
            ("service", self.service.as_str()),
            ("meta", self.meta.as_str()),
            ("rating", self.rating.as_str()),
            ("reviews", self.reviews.as_str()),
            ("price", self.price.as_str()),
        ]
    }

    /// Check that every selector parses; returns the role and error of each that does not
    pub fn validate(&self) -> Vec<(&'static str, ScrapeError)> {
        self.entries()
            .into_iter()
            .filter_map(|(role, css)| parse_selector(css).err().map(|e| (role, e)))
            .collect()
    }
}

/// Parse a CSS selector, mapping failures into [`ScrapeError::InvalidSelector`]
pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector(format!("'{}': {}", css, e)))
}
