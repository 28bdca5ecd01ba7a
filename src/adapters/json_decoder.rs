//! JSON decoder for directory service payloads.

use crate::domain::Organization;
use crate::ports::{DecodeError, OrganizationDecoder};

/// Decodes the directory service's JSON payloads into [`Organization`]
/// records. Stateless; the same payload always decodes to the same record.
#[derive(Debug, Clone, Default)]
pub struct JsonOrganizationDecoder;

impl JsonOrganizationDecoder {
    /// Creates a decoder.
    pub fn new() -> Self {
        Self
    }
}

impl OrganizationDecoder for JsonOrganizationDecoder {
    fn decode(&self, payload: &[u8]) -> Result<Organization, DecodeError> {
        serde_json::from_slice(payload).map_err(|e| DecodeError::malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrganizationId;

    #[test]
    fn decodes_a_service_payload() {
        let decoder = JsonOrganizationDecoder::new();
        let payload = br#"{
            "name": "Acme",
            "id": "org-1",
            "subOrganizationIds": ["org-2"],
            "environments": [{"id": "env-1", "name": "Production"}]
        }"#;

        let organization = decoder.decode(payload).unwrap();

        assert_eq!(organization.name, "Acme");
        assert_eq!(organization.id, OrganizationId::new("org-1"));
        assert_eq!(organization.sub_organization_ids.len(), 1);
        assert_eq!(organization.environments.len(), 1);
    }

    #[test]
    fn decoding_is_idempotent() {
        let decoder = JsonOrganizationDecoder::new();
        let payload = br#"{"name": "Acme", "id": "org-1"}"#;

        let first = decoder.decode(payload).unwrap();
        let second = decoder.decode(payload).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let decoder = JsonOrganizationDecoder::new();

        let result = decoder.decode(b"not json at all");

        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn wrong_shape_is_an_error_not_a_partial_record() {
        let decoder = JsonOrganizationDecoder::new();

        // Valid JSON, but no organization fields.
        let result = decoder.decode(br#"{"unexpected": true}"#);

        assert!(result.is_err());
    }
}
