//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.
//!
//! - `OrganizationFetcher` - fetches one raw organization payload per call
//! - `OrganizationDecoder` - turns a raw payload into an `Organization`

mod organization_decoder;
mod organization_fetcher;

pub use organization_decoder::{DecodeError, OrganizationDecoder};
pub use organization_fetcher::{Credentials, FetchError, OrganizationFetcher};
