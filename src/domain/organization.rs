//! Value records decoded from directory service payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an organization.
///
/// Identifiers are opaque strings assigned by the directory service; no
/// format is assumed here. Whether an id resolves is the fetcher's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(String);

impl OrganizationId {
    /// Creates an id from a raw string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrganizationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrganizationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier for an environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentId(String);

impl EnvironmentId {
    /// Creates an id from a raw string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EnvironmentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A business organization as returned by the directory service.
///
/// The `sub_organization_ids` reference list drives recursive discovery;
/// environments are leaf data attached to the organization itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Display name of the organization.
    pub name: String,
    /// Identifier of the organization.
    pub id: OrganizationId,
    /// Identifiers of child organizations.
    #[serde(default)]
    pub sub_organization_ids: Vec<OrganizationId>,
    /// Environments owned by this organization.
    #[serde(default)]
    pub environments: Vec<Environment>,
}

impl Organization {
    /// Creates an organization with no children and no environments.
    pub fn new(id: impl Into<OrganizationId>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            sub_organization_ids: Vec::new(),
            environments: Vec::new(),
        }
    }

    /// Adds a child organization reference.
    pub fn with_sub_organization(mut self, id: impl Into<OrganizationId>) -> Self {
        self.sub_organization_ids.push(id.into());
        self
    }

    /// Adds an environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environments.push(environment);
        self
    }

    /// Returns true when this organization references no children.
    pub fn is_leaf(&self) -> bool {
        self.sub_organization_ids.is_empty()
    }
}

/// An environment belonging to an organization. Leaf data, never recursed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Identifier of the environment.
    pub id: EnvironmentId,
    /// Display name of the environment.
    pub name: String,
}

impl Environment {
    /// Creates an environment record.
    pub fn new(id: impl Into<EnvironmentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A deployed application record from the directory service.
///
/// Not referenced by the tree builder; part of the service's data model
/// and kept decodable for callers that list applications per environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Application domain prefix.
    pub domain: String,
    /// Fully qualified domain.
    pub full_domain: String,
    /// Deployment status.
    pub status: String,
    /// Deployed artifact file name.
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_decodes_from_camel_case_payload() {
        let payload = r#"{
            "name": "Acme",
            "id": "org-1",
            "subOrganizationIds": ["org-2", "org-3"],
            "environments": [{"id": "env-1", "name": "Production"}]
        }"#;

        let organization: Organization = serde_json::from_str(payload).unwrap();

        assert_eq!(organization.name, "Acme");
        assert_eq!(organization.id, OrganizationId::new("org-1"));
        assert_eq!(
            organization.sub_organization_ids,
            vec![OrganizationId::new("org-2"), OrganizationId::new("org-3")]
        );
        assert_eq!(organization.environments.len(), 1);
        assert_eq!(organization.environments[0].name, "Production");
    }

    #[test]
    fn missing_list_fields_decode_as_empty() {
        let payload = r#"{"name": "Bare", "id": "org-9"}"#;

        let organization: Organization = serde_json::from_str(payload).unwrap();

        assert!(organization.is_leaf());
        assert!(organization.environments.is_empty());
    }

    #[test]
    fn organization_builder_accumulates_references() {
        let organization = Organization::new("org-1", "Acme")
            .with_sub_organization("org-2")
            .with_sub_organization("org-3")
            .with_environment(Environment::new("env-1", "Sandbox"));

        assert_eq!(organization.sub_organization_ids.len(), 2);
        assert_eq!(organization.environments.len(), 1);
        assert!(!organization.is_leaf());
    }

    #[test]
    fn application_decodes_from_camel_case_payload() {
        let payload = r#"{
            "domain": "billing",
            "fullDomain": "billing.example.io",
            "status": "STARTED",
            "fileName": "billing-1.4.2.jar"
        }"#;

        let application: Application = serde_json::from_str(payload).unwrap();

        assert_eq!(application.domain, "billing");
        assert_eq!(application.full_domain, "billing.example.io");
        assert_eq!(application.status, "STARTED");
        assert_eq!(application.file_name, "billing-1.4.2.jar");
    }

    #[test]
    fn organization_id_displays_raw_value() {
        let id = OrganizationId::new("1f2e3d");
        assert_eq!(id.to_string(), "1f2e3d");
        assert_eq!(id.as_str(), "1f2e3d");
    }
}
