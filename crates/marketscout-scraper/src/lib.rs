pub mod client;
pub mod error;
pub mod etsy;
pub mod insights;
pub mod pinterest;
mod rules;
mod select;

pub use error::ScrapeError;
pub use etsy::EtsyScraper;
pub use insights::{analyze_pricing, analyze_trends};
pub use pinterest::PinterestScraper;
