// fetcher.rs
use crate::fetch::ScraperError;
use clap::ValueEnum;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use reqwest::StatusCode;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Fixed desktop identification used for every request, page or image.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

const MAX_BACKOFF_SECS: u64 = 10;
const JITTER_MAX_MILLIS: u64 = 2_000;

/// When a rendered page counts as ready. Only the headless engine can observe these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderMode {
    /// The `load` event fired.
    Load,
    /// The DOM was parsed.
    #[value(name = "domcontentloaded")]
    DomContentLoaded,
    /// The browser reports the network as idle.
    #[default]
    #[value(name = "networkidle")]
    NetworkIdle,
}

impl RenderMode {
    /// Name of the Chromium page lifecycle event that marks this condition.
    pub fn lifecycle_event(self) -> &'static str {
        match self {
            RenderMode::Load => "load",
            RenderMode::DomContentLoaded => "DOMContentLoaded",
            RenderMode::NetworkIdle => "networkIdle",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderMode::Load => "load",
            RenderMode::DomContentLoaded => "domcontentloaded",
            RenderMode::NetworkIdle => "networkidle",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub render: RenderMode,
    pub timeout: Duration,
    /// Total tries per URL, at least 1.
    pub max_attempts: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            render: RenderMode::default(),
            timeout: Duration::from_millis(45_000),
            max_attempts: 1,
        }
    }
}

/// Turns a URL into the page's HTML.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}

/// Downloaded image bytes with their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub mime: mime::Mime,
    pub bytes: Vec<u8>,
}

/// Loads images referenced by a listing, for embedding in exports.
pub trait ImageSource {
    fn load(&self, url: &str) -> Result<ImageData, ScraperError>;
}

/// Plain HTTP fetcher. Does not run page scripts; `options.render` is not consulted.
pub struct HttpFetcher {
    client: Client,
    options: FetchOptions,
}

impl HttpFetcher {
    pub fn new(options: FetchOptions) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("pt-PT,pt;q=0.9,en;q=0.8"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(options.timeout)
            .build()
            .map_err(|e| ScraperError::Config(e.to_string()))?;

        Ok(Self { client, options })
    }

    fn try_fetch(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.map_send_error(url, e))?;
        check_status(url, resp.status())?;

        resp.text().map_err(|e| ScraperError::Network(e.to_string()))
    }

    fn map_send_error(&self, url: &str, e: reqwest::Error) -> ScraperError {
        if e.is_timeout() {
            ScraperError::Timeout {
                millis: self.options.timeout.as_millis(),
                url: url.to_string(),
            }
        } else {
            ScraperError::Network(e.to_string())
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let attempts = self.options.max_attempts.max(1);
        let mut last_err = None;

        for attempt in 1..=attempts {
            let start = Instant::now();

            match self.try_fetch(url) {
                Ok(html) => {
                    info!(url, attempt, elapsed = ?start.elapsed(), "fetched page");
                    return Ok(html);
                }
                Err(e) => {
                    warn!(
                        url,
                        attempt,
                        elapsed = ?start.elapsed(),
                        error = %e,
                        "fetch attempt failed"
                    );
                    last_err = Some(e);

                    if attempt < attempts {
                        std::thread::sleep(backoff(attempt));
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| ScraperError::Network("fetch retry loop failed".into())))
    }
}

impl ImageSource for HttpFetcher {
    fn load(&self, url: &str) -> Result<ImageData, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.map_send_error(url, e))?;
        check_status(url, resp.status())?;

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let mime = content_type
            .parse::<mime::Mime>()
            .ok()
            .filter(|m| m.type_() == mime::IMAGE)
            .ok_or_else(|| ScraperError::NotAnImage {
                content_type: content_type.clone(),
                url: url.to_string(),
            })?;

        let bytes = resp
            .bytes()
            .map_err(|e| ScraperError::Network(e.to_string()))?
            .to_vec();

        Ok(ImageData { mime, bytes })
    }
}

fn check_status(url: &str, status: StatusCode) -> Result<(), ScraperError> {
    if status.is_success() {
        return Ok(());
    }
    let code = status.as_u16();
    match status {
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(ScraperError::Blocked {
            status: code,
            url: url.to_string(),
        }),
        _ => Err(ScraperError::Http {
            status: code,
            url: url.to_string(),
        }),
    }
}

/// Linear backoff capped at `MAX_BACKOFF_SECS`, plus random jitter.
pub fn backoff(attempt: u32) -> Duration {
    let base = std::cmp::min(2 * u64::from(attempt), MAX_BACKOFF_SECS);
    let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_MILLIS);
    Duration::from_secs(base) + Duration::from_millis(jitter)
}
