use anyhow::{bail, Context, Result};
use clap::Parser;
use listing_scraper::cli::{Cli, Engine};
use listing_scraper::config::ScrapeConfig;
use listing_scraper::fetch::{run_batch, FetchOptions, HttpFetcher, PageFetcher};
use listing_scraper::logging::init_logging;
use listing_scraper::slides::DeckBuilder;
use listing_scraper::spreadsheets::{export_listings_csv, export_listings_xlsx};
use listing_scraper::ListingParser;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    // A missing .env is fine; flags and the real environment still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("scrape failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ScrapeConfig::from_cli(cli)?;
    info!(
        urls = config.urls.len(),
        engine = ?config.engine,
        render = %config.fetch.render,
        "starting scrape"
    );

    let fetcher = build_fetcher(config.engine, &config.fetch)?;
    let parser = ListingParser::new(config.max_images);

    let outcome = run_batch(fetcher.as_ref(), &parser, &config.urls, config.delay);
    if outcome.is_empty() {
        bail!(
            "no listings parsed ({} failed); no output written",
            outcome.failures.len()
        );
    }

    let records = outcome.records();

    export_listings_csv(&records, &config.csv_path)
        .with_context(|| format!("writing {}", config.csv_path.display()))?;

    if let Some(path) = &config.xlsx_path {
        export_listings_xlsx(&records, path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if let Some(path) = &config.deck_path {
        // Images are always downloaded over plain HTTP, whatever engine fetched the pages.
        let images = HttpFetcher::new(config.fetch.clone())?;
        DeckBuilder::new(config.brand.clone(), &images)
            .write(&records, path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    info!(
        parsed = outcome.listings.len(),
        failed = outcome.failures.len(),
        "done"
    );
    Ok(())
}

fn build_fetcher(engine: Engine, options: &FetchOptions) -> Result<Box<dyn PageFetcher>> {
    match engine {
        Engine::Http => Ok(Box::new(HttpFetcher::new(options.clone())?)),
        #[cfg(feature = "headless")]
        Engine::Chrome => Ok(Box::new(listing_scraper::fetch::ChromeFetcher::new(
            options.clone(),
        )?)),
        #[cfg(not(feature = "headless"))]
        Engine::Chrome => {
            Err(listing_scraper::errors::ConfigError::EngineUnavailable("chrome".into()).into())
        }
    }
}
