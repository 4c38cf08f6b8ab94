//! Listing extraction core
//!
//! Pure functions from a parsed document to an [`ExtractedListing`]:
//! - JSON-LD metadata (first block wins per field)
//! - tiered label/value lookup for the details block
//! - image collection with a cap
//!
//! [`ExtractedListing`]: crate::domain::listing::ExtractedListing

pub mod images;
pub mod labels;
pub mod listing;
pub mod structured;
pub mod text;

pub use images::collect_images;
pub use labels::{find_label_value, LabelPattern};
pub use listing::{ListingParser, DEFAULT_MAX_IMAGES};
pub use structured::{extract_structured_metadata, StructuredMetadata};
