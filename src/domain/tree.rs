//! The organization tree handed to callers once a build completes.

use super::Organization;

/// A node in a fully built organization tree.
///
/// Owns its children exclusively. Child order is fetch-completion order
/// and therefore not stable across runs; compare child sets, not
/// sequences. The tree is immutable once returned by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgNode {
    /// The decoded organization this node wraps.
    pub organization: Organization,
    /// Child organizations, one node per reference fetched.
    pub children: Vec<OrgNode>,
}

impl OrgNode {
    /// Creates a childless node.
    pub fn new(organization: Organization) -> Self {
        Self {
            organization,
            children: Vec::new(),
        }
    }

    /// Counts this node and all of its descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(OrgNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Organization;

    #[test]
    fn node_count_includes_all_descendants() {
        let leaf = OrgNode::new(Organization::new("c", "C"));
        let mid = OrgNode {
            organization: Organization::new("a", "A"),
            children: vec![leaf],
        };
        let root = OrgNode {
            organization: Organization::new("root", "Root"),
            children: vec![mid, OrgNode::new(Organization::new("b", "B"))],
        };

        assert_eq!(root.node_count(), 4);
    }

    #[test]
    fn fresh_node_counts_itself_only() {
        let node = OrgNode::new(Organization::new("solo", "Solo"));
        assert_eq!(node.node_count(), 1);
        assert!(node.children.is_empty());
    }
}
