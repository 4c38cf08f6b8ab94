pub mod listing;

pub use listing::{max_image_count, pad_batch, ExtractedListing, ListingRecord, RECORD_FIELDS};
