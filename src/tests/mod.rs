mod listing_tests;
mod structured_tests;
mod utils;
