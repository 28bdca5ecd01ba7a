//! Application - the tree builder service.

mod tree_builder;

pub use tree_builder::{BuildError, TreeBuilder};
