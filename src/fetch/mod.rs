//! Downloading project archives from the generator service.

pub mod http;
pub mod interface;

pub use http::HttpFetcher;
pub use interface::ArchiveFetcher;
