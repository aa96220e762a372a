pub mod error;
pub mod fetcher;
pub mod result;

pub use error::FetchError;
pub use fetcher::{PageFetcher, harvest_anchors, retain_same_site, visible_text};
pub use result::{LinkHarvest, PageCapture};
