// errors.rs
use crate::fetch::RenderMode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors writing the batch to disk (CSV, XLSX or slide deck).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Nothing to export")]
    EmptyBatch,
}

/// Invalid command-line or environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No listing URLs given (pass URLs or --input FILE)")]
    NoUrls,

    #[error("Failed to read URL list {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("--render {0} needs a rendering engine (use --engine chrome)")]
    RenderWithoutBrowser(RenderMode),

    #[error("Engine '{0}' is not available in this build")]
    EngineUnavailable(String),
}
