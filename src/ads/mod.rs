pub mod client;
pub mod library;
pub mod models;

pub use client::AdsClient;
pub use library::{PageLimits, fetch_library_bibcodes};
pub use models::{Document, RateLimit};
