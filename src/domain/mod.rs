//! Domain - value records returned by the directory service and the
//! result tree they are assembled into.

mod organization;
mod tree;

pub use organization::{Application, Environment, EnvironmentId, Organization, OrganizationId};
pub use tree::OrgNode;
