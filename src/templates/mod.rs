pub mod components;
pub mod layouts;

// Re-exports for convenience
pub use components::{listing_slide, title_slide};
pub use layouts::deck::deck_layout;
