use crate::dom::{ListingDocument, ListingNode, SelectorMap};
use crate::error::{Result, ScrapeError};
use crate::listing::record::{AreaResult, ListingRecord, NOT_PROVIDED};
use regex::Regex;
use std::sync::LazyLock;

/// A parenthesized run of digits, optionally followed by a word such as `ratings`
static REVIEW_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)(?:\s[^)]*)?\)").expect("valid review count regex"));

/// Extract every listing container of `doc`.
///
/// A container whose fields cannot be read is logged and skipped. No containers, or a
/// container selector that does not parse, yields an empty result.
pub fn extract(doc: &ListingDocument, selectors: &SelectorMap) -> AreaResult {
    let containers = match doc.select_all(&selectors.container) {
        Ok(containers) => containers,
        Err(e) => {
            log::error!("Cannot locate listing containers: {}", e);
            return Vec::new();
        }
    };

    log::debug!("Found {} listing containers", containers.len());
    extract_containers(&containers, selectors)
}

/// Map each container to a record, skipping the ones that fail
pub fn extract_containers<N: ListingNode>(containers: &[N], selectors: &SelectorMap) -> AreaResult {
    let mut records = Vec::with_capacity(containers.len());

    for (position, container) in containers.iter().enumerate() {
        match extract_record(container, selectors) {
            Ok(record) => records.push(record),
            Err(e) => log::error!("Error extracting information from listing #{}: {}", position, e),
        }
    }

    log::debug!("Structured data: {:?}", records);
    records
}

/// Map one listing container to a record
pub fn extract_record<N: ListingNode>(container: &N, selectors: &SelectorMap) -> Result<ListingRecord> {
    let name = first_or_empty(container, "name", &selectors.title)?;
    let service = first_or_empty(container, "service", &selectors.service)?;

    let meta = container.texts(&selectors.meta).map_err(|e| field_error("meta", e))?;
    let (delivery_window, minimum_consumption) = classify_meta(meta);

    let rating = first_or_empty(container, "rating", &selectors.rating)?;

    let review_count = container
        .first_text(&selectors.reviews)
        .map_err(|e| field_error("reviews", e))?
        .map_or_else(|| NOT_PROVIDED.to_string(), |text| parse_review_count(&text));

    let delivery_cost = first_or_empty(container, "delivery cost", &selectors.price)?;

    Ok(ListingRecord {
        name,
        service,
        delivery_window,
        minimum_consumption,
        rating,
        review_count,
        delivery_cost,
    })
}

/// Split meta texts into `(delivery_window, minimum_consumption)`.
///
/// Text containing `-` is a delivery window, anything else a minimum order. The last
/// text of each kind wins.
pub fn classify_meta<I>(texts: I) -> (String, String)
where
    I: IntoIterator<Item = String>,
{
    let mut delivery_window = String::new();
    let mut minimum_consumption = String::new();

    for text in texts {
        if text.contains('-') {
            delivery_window = text;
        } else {
            minimum_consumption = text;
        }
    }

    (delivery_window, minimum_consumption)
}

/// Digits of the first parenthesized count in `text`, or [`NOT_PROVIDED`]
pub fn parse_review_count(text: &str) -> String {
    REVIEW_COUNT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| NOT_PROVIDED.to_string(), |m| m.as_str().to_string())
}

fn first_or_empty<N: ListingNode>(container: &N, field: &str, css: &str) -> Result<String> {
    container
        .first_text(css)
        .map(Option::unwrap_or_default)
        .map_err(|e| field_error(field, e))
}

fn field_error(field: &str, err: ScrapeError) -> ScrapeError {
    ScrapeError::FieldFailed {
        field: field.to_string(),
        reason: err.to_string(),
    }
}
