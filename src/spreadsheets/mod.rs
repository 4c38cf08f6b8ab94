pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::{export_listings_csv, write_listings_csv};
pub use export_xlsx::{export_listings_xlsx, listings_xlsx_buffer};
