//! Adapters - implementations of the ports.

pub mod http;
mod json_decoder;
mod mock_fetcher;

pub use http::{AnypointConfig, AnypointFetcher};
pub use json_decoder::JsonOrganizationDecoder;
pub use mock_fetcher::{MockError, MockFetcher};
