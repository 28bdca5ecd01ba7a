//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use termtree::Tree;

use crate::domain::OrgNode;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("  {}", msg);
}

/// Converts a built organization tree into a printable termtree.
///
/// One line per organization (name and id); environments render as
/// dimmed leaves under their organization.
pub fn render_tree(node: &OrgNode) -> Tree<String> {
    let mut tree = Tree::new(format!(
        "{} ({})",
        node.organization.name, node.organization.id
    ));

    for environment in &node.organization.environments {
        tree.push(Tree::new(
            format!("env: {}", environment.name).dimmed().to_string(),
        ));
    }

    for child in &node.children {
        tree.push(render_tree(child));
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Environment, Organization};

    #[test]
    fn rendered_tree_contains_every_organization() {
        let child = OrgNode::new(Organization::new("a", "Billing"));
        let root = OrgNode {
            organization: Organization::new("root", "Acme")
                .with_environment(Environment::new("env-1", "Production")),
            children: vec![child],
        };

        let rendered = render_tree(&root).to_string();

        assert!(rendered.contains("Acme (root)"));
        assert!(rendered.contains("Billing (a)"));
        assert!(rendered.contains("Production"));
    }
}
