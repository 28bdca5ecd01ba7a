//! Organization Decoder Port - Interface for payload deserialization.

use crate::domain::Organization;

/// Port for decoding raw directory payloads into [`Organization`] records.
///
/// Implementations are pure: no hidden state, so decoding the same
/// payload twice yields equal records. A malformed payload surfaces as a
/// [`DecodeError`], never as a partially populated record.
pub trait OrganizationDecoder: Send + Sync {
    /// Decodes one raw payload.
    fn decode(&self, payload: &[u8]) -> Result<Organization, DecodeError>;
}

/// Decoder errors.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload could not be parsed into the expected entity shape.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl DecodeError {
    /// Creates a malformed-payload error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}
