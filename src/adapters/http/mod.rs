//! HTTP adapters for the directory service.

mod anypoint_fetcher;

pub use anypoint_fetcher::{AnypointConfig, AnypointFetcher};
