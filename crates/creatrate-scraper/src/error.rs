use thiserror::Error;

/// Failure modes of the outbound brand search. Never surfaced past
/// [`crate::BrandClassifier::estimate_brand_details`], which maps every
/// variant to the default classification.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

impl ScraperError {
    /// True when the request hit the configured timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, ScraperError::Http(e) if e.is_timeout())
    }
}
