use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::fetch::RenderMode;

#[derive(Parser, Debug)]
#[command(name = "listing-scraper")]
#[command(about = "Extract real-estate listings to CSV, XLSX and a slide deck")]
#[command(version)]
pub struct Cli {
    /// Listing page URLs
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// File with one URL per line (blank lines and # comments are ignored)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// CSV output path
    #[arg(long, value_name = "PATH", default_value = "listings.csv")]
    pub csv: PathBuf,

    /// Also write an XLSX workbook
    #[arg(long, value_name = "PATH")]
    pub xlsx: Option<PathBuf>,

    /// Also write an HTML slide deck
    #[arg(long, value_name = "PATH")]
    pub deck: Option<PathBuf>,

    /// Branding shown on every slide
    #[arg(long, env = "LISTING_SCRAPER_BRAND", default_value = "Imóveis")]
    pub brand: String,

    /// Maximum images kept per listing
    #[arg(long, default_value_t = 3)]
    pub max_images: usize,

    /// Page readiness condition; only applies to `--engine chrome` [default: networkidle]
    #[arg(long, value_enum)]
    pub render: Option<RenderMode>,

    /// Page load timeout in milliseconds
    #[arg(long, env = "LISTING_SCRAPER_TIMEOUT_MS", default_value_t = 45_000)]
    pub timeout_ms: u64,

    /// Pause between listings in milliseconds
    #[arg(long, env = "LISTING_SCRAPER_DELAY_MS", default_value_t = 1_500)]
    pub delay_ms: u64,

    /// Fetch attempts per URL
    #[arg(long, default_value_t = 1)]
    pub attempts: u32,

    /// How pages are fetched
    #[arg(long, value_enum, env = "LISTING_SCRAPER_ENGINE", default_value_t = Engine::Http)]
    pub engine: Engine,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Plain HTTP GET, no script execution
    Http,
    /// Headless Chromium (requires the `headless` feature)
    Chrome,
}
