pub mod classify;
pub mod client;
pub mod error;

pub use classify::classify_text;
pub use client::BrandClassifier;
pub use error::ScraperError;
