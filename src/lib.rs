//! Orgtree - Concurrent Organization Hierarchy Discovery
//!
//! This crate builds an in-memory tree of the organizations reachable from
//! a root organization id by recursively fetching each referenced
//! sub-organization from the directory service, one concurrent fetch per
//! discovered child.

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
