//! Hierarchy graph: registry arena, build passes, resolved snapshot.
//!
//! Edges are arena-id and qualified-name lookups into the central registry,
//! never owning links, so a cycle in malformed input stays a graph-traversal
//! concern instead of a memory-safety one.

mod builder;
mod hierarchy;
mod registry;

pub use builder::HierarchyBuilder;
pub use hierarchy::Hierarchy;
pub use registry::{DeclId, Node, Registry, RegistryError};

#[cfg(test)]
mod tests;
