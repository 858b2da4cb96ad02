pub mod fetch_error;
pub mod images;
pub mod inference;
pub mod models;

pub use fetch_error::FetchError;
pub use images::ImageClient;
pub use inference::InferenceClient;
