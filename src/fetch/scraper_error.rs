use thiserror::Error;

/// Failure to obtain a document or image. Raised by fetchers, handled per URL by the
/// batch runner; the extraction core never sees it.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Blocked by site ({status}): {url}")]
    Blocked { status: u16, url: String },

    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timed out after {millis}ms: {url}")]
    Timeout { millis: u128, url: String },

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Not an image ({content_type}): {url}")]
    NotAnImage { content_type: String, url: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
