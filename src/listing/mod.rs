//! Listing records and the page-to-record mapping

pub mod extract;
pub mod record;

pub use extract::{classify_meta, extract, extract_containers, extract_record, parse_review_count};
pub use record::{AreaResult, COLUMNS, ListingRecord, NOT_PROVIDED, ResultSet, total_records};
