use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialise logging to stderr. `RUST_LOG` wins over the `-v` count.
pub fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn,listing_scraper=info",
        1 => "info",
        _ => "info,listing_scraper=debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
