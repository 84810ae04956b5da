use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value used when a listing shows no review count
pub const NOT_PROVIDED: &str = "Not provided";

/// Column headers of an exported sheet, in field order
pub const COLUMNS: [&str; 7] = [
    "Name",
    "Service",
    "Time",
    "Minimum Consumption",
    "Rating",
    "Reviews",
    "Delivery Cost",
];

/// One shop as shown on a listing page.
///
/// Every field is the display text of the page; units and currency symbols are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub name: String,

    /// Category / cuisine badge
    pub service: String,

    /// Free-text range such as `20-30'`
    pub delivery_window: String,

    pub minimum_consumption: String,
    pub rating: String,

    /// Digits, or [`NOT_PROVIDED`]
    pub review_count: String,

    pub delivery_cost: String,
}

impl Default for ListingRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            service: String::new(),
            delivery_window: String::new(),
            minimum_consumption: String::new(),
            rating: String::new(),
            review_count: NOT_PROVIDED.to_string(),
            delivery_cost: String::new(),
        }
    }
}

impl ListingRecord {
    /// Field values in [`COLUMNS`] order
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.name,
            &self.service,
            &self.delivery_window,
            &self.minimum_consumption,
            &self.rating,
            &self.review_count,
            &self.delivery_cost,
        ]
    }
}

/// Records of one delivery area, in page order
pub type AreaResult = Vec<ListingRecord>;

/// Area name to records, in the order areas were scraped
pub type ResultSet = IndexMap<String, AreaResult>;

/// Total records across every area
pub fn total_records(results: &ResultSet) -> usize {
    results.values().map(Vec::len).sum()
}
