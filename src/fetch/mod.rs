mod batch;
#[cfg(feature = "headless")]
mod browser;
mod fetcher;
mod scraper_error;

pub use batch::{run_batch, BatchFailure, BatchOutcome};
#[cfg(feature = "headless")]
pub use browser::ChromeFetcher;
pub use fetcher::{
    backoff, FetchOptions, HttpFetcher, ImageData, ImageSource, PageFetcher, RenderMode,
    USER_AGENT,
};
pub use scraper_error::ScraperError;
