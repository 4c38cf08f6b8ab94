//! Real-estate listing extraction
//!
//! Pulls title, price, location, typology, room counts, area, description and image
//! URLs out of listing pages, preferring embedded JSON-LD and falling back to the
//! page's visible markup, then writes the batch to CSV, XLSX and an HTML slide deck.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod slides;
pub mod spreadsheets;
pub mod templates;

pub use domain::listing::{pad_batch, ExtractedListing, ListingRecord};
pub use extract::ListingParser;

#[cfg(test)]
mod tests;
