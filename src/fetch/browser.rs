//! Headless Chromium fetcher for listing pages that build their markup client-side.
//!
//! Each fetch launches a fresh browser, navigates with the shared desktop user agent,
//! waits for the page lifecycle event that matches the render mode and returns the
//! rendered HTML. The async chromiumoxide API is driven from a
//! private tokio runtime so callers stay synchronous.

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{
    EventLifecycleEvent, NavigateParams, SetLifecycleEventsEnabledParams,
};
use futures::StreamExt;
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use crate::fetch::fetcher::{FetchOptions, PageFetcher, RenderMode, USER_AGENT};
use crate::fetch::ScraperError;

pub struct ChromeFetcher {
    runtime: Runtime,
    options: FetchOptions,
}

impl ChromeFetcher {
    pub fn new(options: FetchOptions) -> Result<Self, ScraperError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| ScraperError::Browser(format!("failed to start runtime: {e}")))?;

        Ok(Self { runtime, options })
    }
}

impl PageFetcher for ChromeFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let timeout = self.options.timeout;

        self.runtime.block_on(async {
            match tokio::time::timeout(timeout, render_page(url, self.options.render)).await {
                Ok(result) => result,
                Err(_) => Err(ScraperError::Timeout {
                    millis: timeout.as_millis(),
                    url: url.to_string(),
                }),
            }
        })
    }
}

async fn render_page(url: &str, render: RenderMode) -> Result<String, ScraperError> {
    let config = BrowserConfig::builder()
        .arg(format!("--user-agent={USER_AGENT}"))
        .build()
        .map_err(ScraperError::Browser)?;

    let (mut browser, mut handler) = Browser::launch(config)
        .await
        .map_err(|e| ScraperError::Browser(e.to_string()))?;

    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });

    let result = load_content(&browser, url, render).await;

    if let Err(e) = browser.close().await {
        warn!(error = %e, "failed to close browser cleanly");
    }
    let _ = browser.wait().await;
    handler_task.abort();

    result
}

async fn load_content(
    browser: &Browser,
    url: &str,
    render: RenderMode,
) -> Result<String, ScraperError> {
    let page = browser
        .new_page("about:blank")
        .await
        .map_err(|e| ScraperError::Browser(e.to_string()))?;

    page.execute(SetLifecycleEventsEnabledParams::new(true))
        .await
        .map_err(|e| ScraperError::Browser(e.to_string()))?;
    let mut lifecycle = page
        .event_listener::<EventLifecycleEvent>()
        .await
        .map_err(|e| ScraperError::Browser(e.to_string()))?;

    debug!(url, render = %render, "navigating");
    let navigation = page
        .execute(NavigateParams::new(url))
        .await
        .map_err(|e| ScraperError::Browser(format!("navigation failed for {url}: {e}")))?
        .result;
    if let Some(error) = navigation.error_text {
        return Err(ScraperError::Browser(format!(
            "navigation failed for {url}: {error}"
        )));
    }

    let wanted = render.lifecycle_event();
    let mut ready = false;
    while let Some(event) = lifecycle.next().await {
        let same_document = navigation
            .loader_id
            .as_ref()
            .map_or(true, |loader| *loader == event.loader_id);
        if event.frame_id == navigation.frame_id && same_document && event.name == wanted {
            ready = true;
            break;
        }
    }
    if !ready {
        return Err(ScraperError::Browser(format!(
            "page closed before {render} for {url}"
        )));
    }

    let html = page
        .content()
        .await
        .map_err(|e| ScraperError::Browser(e.to_string()))?;

    info!(url, bytes = html.len(), "rendered page");
    Ok(html)
}
