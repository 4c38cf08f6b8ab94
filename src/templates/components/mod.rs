pub mod slide;

pub use slide::{listing_slide, title_slide, truncate_chars};
