//! JSON snapshot of a resolved hierarchy (feature `export`).
//!
//! The snapshot works with standalone DTO types decoupled from the graph
//! arena, so template engines and tree pages can consume it without holding
//! the [`Hierarchy`](crate::graph::Hierarchy) itself.

mod json;

pub use json::{HierarchySnapshot, NodeDto, StatisticsDto};

use thiserror::Error;

/// Errors that can occur while writing a snapshot.
#[derive(Debug, Error)]
pub enum ExportError {
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
