use thiserror::Error;

/// Errors raised while loading pages, extracting listings or exporting them
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Chrome could not be started
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    /// The rendered document could not be read back from the tab
    #[error("Failed to read page content: {0}")]
    ContentFailed(String),

    #[error("Invalid CSS selector {0}")]
    InvalidSelector(String),

    /// A single field lookup failed inside one listing container
    #[error("Failed to extract field '{field}': {reason}")]
    FieldFailed { field: String, reason: String },

    #[error("Export failed: {0}")]
    ExportFailed(String),

    /// Nothing was collected, so there is nothing to export
    #[error("No listing data to export")]
    NoData,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScrapeError>;

impl From<rust_xlsxwriter::XlsxError> for ScrapeError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ScrapeError::ExportFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = ScrapeError::FieldFailed {
            field: "rating".to_string(),
            reason: "stale node".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to extract field 'rating': stale node");
    }

    #[test]
    fn test_no_data_display() {
        assert_eq!(ScrapeError::NoData.to_string(), "No listing data to export");
    }
}
