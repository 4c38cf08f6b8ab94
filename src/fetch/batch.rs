// batch.rs
use crate::domain::listing::{pad_batch, ExtractedListing, ListingRecord};
use crate::extract::ListingParser;
use crate::fetch::{PageFetcher, ScraperError};
use std::time::Duration;
use tracing::{info, warn};

/// A URL that could not be fetched.
#[derive(Debug)]
pub struct BatchFailure {
    pub url: String,
    pub error: ScraperError,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub listings: Vec<ExtractedListing>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Records padded to the largest image count in the batch.
    pub fn records(&self) -> Vec<ListingRecord> {
        pad_batch(&self.listings)
    }
}

/// Fetches and parses each URL in order, pausing `delay` between requests.
///
/// A failing URL is logged and recorded; the batch always runs to the end.
pub fn run_batch(
    fetcher: &dyn PageFetcher,
    parser: &ListingParser,
    urls: &[String],
    delay: Duration,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    let total = urls.len();

    for (index, url) in urls.iter().enumerate() {
        info!(url = %url, "scraping {}/{}", index + 1, total);

        match fetcher.fetch(url) {
            Ok(html) => {
                let listing = parser.parse(&html, url);
                info!(
                    url = %url,
                    title = listing.title.as_deref().unwrap_or(""),
                    images = listing.images.len(),
                    "parsed listing"
                );
                outcome.listings.push(listing);
            }
            Err(error) => {
                warn!(url = %url, error = %error, "skipping listing");
                outcome.failures.push(BatchFailure {
                    url: url.clone(),
                    error,
                });
            }
        }

        if index + 1 < total && !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    info!(
        parsed = outcome.listings.len(),
        failed = outcome.failures.len(),
        "batch complete"
    );
    outcome
}
