//! # apidoc-base
//!
//! Core library for symbol-hierarchy resolution in an API documentation
//! generator: raw declarations in, a resolved read-only inheritance graph
//! plus accumulated diagnostics out.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! host      → ingestion facade, parallel extraction seam
//!   ↓
//! stats     → documented-element counts, progress line
//!   ↓
//! query     → chains, subclasses, implementers/users, effective members
//!   ↓
//! graph     → registry arena, build passes, resolved Hierarchy
//!   ↓
//! resolve   → token resolution, internal/external/platform classification
//!   ↓
//! model     → raw declarations, members, namespace contexts
//!   ↓
//! base      → Name interning, qualified-name helpers, diagnostics
//! ```

// ============================================================================
// MODULES (dependency order: base → model → resolve → graph → query → stats)
// ============================================================================

/// Foundation types: Name interning, qualified-name helpers, diagnostics
pub mod base;

/// Raw declaration model handed over by the extractor
pub mod model;

/// Presentation-boundary filter configuration
pub mod config;

/// Name resolution and reference classification
pub mod resolve;

/// Hierarchy graph: registry arena, build passes, resolved snapshot
pub mod graph;

/// Read-only queries against the resolved hierarchy
pub mod query;

/// Documented-element statistics
pub mod stats;

/// Ingestion host and rayon extraction seam
pub mod host;

/// JSON snapshot of a resolved hierarchy
#[cfg(feature = "export")]
pub mod export;

// Re-export the one-run pipeline types
pub use host::{HierarchyHost, extract_units};

// Re-export foundation types
pub use base::{Diagnostic, Diagnostics, Interner, Name, Severity};

pub use config::{AccessLevels, FilterConfig};
pub use graph::{DeclId, Hierarchy, HierarchyBuilder, Node};
pub use model::{DeclKind, Declaration, Member, NamespaceContext, SourceUnit, Visibility};
pub use query::MemberFilter;
pub use resolve::{Classification, NameResolver, PlatformIndex, ResolvedRef};
pub use stats::Statistics;
