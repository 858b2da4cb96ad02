mod filter_tests;
mod image_tests;
mod search_tests;
