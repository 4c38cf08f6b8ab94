// config.rs
use crate::cli::{Cli, Engine};
use crate::errors::ConfigError;
use crate::fetch::FetchOptions;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Everything a run needs, resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub urls: Vec<String>,
    pub csv_path: PathBuf,
    pub xlsx_path: Option<PathBuf>,
    pub deck_path: Option<PathBuf>,
    pub brand: String,
    pub max_images: usize,
    pub engine: Engine,
    pub fetch: FetchOptions,
    pub delay: Duration,
}

impl ScrapeConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let mut raw_urls = cli.urls;
        if let Some(path) = &cli.input {
            let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Input {
                path: path.clone(),
                source,
            })?;
            raw_urls.extend(parse_url_list(&contents));
        }

        if let (Engine::Http, Some(render)) = (cli.engine, cli.render) {
            return Err(ConfigError::RenderWithoutBrowser(render));
        }

        let urls = valid_urls(raw_urls);
        if urls.is_empty() {
            return Err(ConfigError::NoUrls);
        }

        Ok(Self {
            urls,
            csv_path: cli.csv,
            xlsx_path: cli.xlsx,
            deck_path: cli.deck,
            brand: cli.brand,
            max_images: cli.max_images,
            engine: cli.engine,
            fetch: FetchOptions {
                render: cli.render.unwrap_or_default(),
                timeout: Duration::from_millis(cli.timeout_ms),
                max_attempts: cli.attempts.max(1),
            },
            delay: Duration::from_millis(cli.delay_ms),
        })
    }
}

/// One URL per line; blank lines and `#` comments are skipped.
pub fn parse_url_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Keeps absolute http(s) URLs, warning about the rest.
pub fn valid_urls(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .filter(|candidate| match url::Url::parse(candidate) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => true,
            Ok(_) | Err(_) => {
                warn!(url = %candidate, "skipping invalid listing URL");
                false
            }
        })
        .collect()
}
