use crate::fetch::{ImageData, ImageSource, PageFetcher, ScraperError};
use std::collections::HashMap;

/// Wraps body markup (and optional head markup) into a full document.
pub fn page(head: &str, body: &str) -> String {
    format!("<!DOCTYPE html><html><head>{head}</head><body>{body}</body></html>")
}

/// A JSON-LD script block.
pub fn jsonld(json: &str) -> String {
    format!(r#"<script type="application/ld+json">{json}</script>"#)
}

/// `n` images with distinct absolute URLs.
pub fn images(n: usize, host: &str) -> String {
    (1..=n)
        .map(|i| format!(r#"<img src="https://{host}/{i}.jpg">"#))
        .collect()
}

/// Serves canned pages; any other URL fails with HTTP 404.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
}

impl StubFetcher {
    pub fn with_page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }
}

impl PageFetcher for StubFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        self.pages.get(url).cloned().ok_or_else(|| ScraperError::Http {
            status: 404,
            url: url.to_string(),
        })
    }
}

/// Returns a tiny JPEG for URLs containing "ok", fails for everything else.
pub struct StubImages;

impl ImageSource for StubImages {
    fn load(&self, url: &str) -> Result<ImageData, ScraperError> {
        if url.contains("ok") {
            Ok(ImageData {
                mime: mime::IMAGE_JPEG,
                bytes: vec![0xFF, 0xD8, 0xFF, 0xD9],
            })
        } else {
            Err(ScraperError::Network(format!("connection refused: {url}")))
        }
    }
}
