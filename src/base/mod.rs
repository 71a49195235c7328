//! Foundation types for the hierarchy resolver.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Name`], [`Interner`] - string interning for qualified names
//! - qualified-name helpers (backslash-separated segments)
//! - [`Diagnostic`], [`Diagnostics`] - accumulated build anomalies
//!
//! This module has NO dependencies on other apidoc modules.

mod diagnostics;
mod intern;
mod qualified;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use intern::{Interner, Name};
pub use qualified::{SEPARATOR, join, namespace_of, short_name, split_first, strip_absolute};
