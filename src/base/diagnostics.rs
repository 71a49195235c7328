//! Build diagnostics accumulated during hierarchy resolution.
//!
//! Resolution never aborts on bad input: every anomaly is recorded here and
//! the affected declaration degrades (edge dropped, first registration wins).
//! The caller decides what the accumulated list means for its exit code.

use thiserror::Error;

use super::Name;

/// How serious a recorded anomaly is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Structural damage: some hierarchy data was dropped.
    Error,
    /// Suspicious input: resolution proceeded with the documented fallback.
    Warning,
}

/// One anomaly found while building the hierarchy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Diagnostic {
    /// Two declarations claimed the same qualified name. The first wins.
    #[error("duplicate declaration of `{name}` in {dropped_file} (kept the one from {kept_file})")]
    DuplicateDeclaration {
        name: Name,
        kept_file: Name,
        dropped_file: Name,
    },

    /// An inheritance edge closed back on a node still being traversed.
    #[error("cyclic inheritance: `{name}` reaches itself through `{through}`")]
    CyclicInheritance { name: Name, through: Name },

    /// A class `extends` target that resolved to something other than a class.
    #[error("`{name}` extends {target_kind} `{target}`; only classes can be extended")]
    InvalidParentKind {
        name: Name,
        target: Name,
        target_kind: &'static str,
    },

    /// A member redeclaration that does not line up with the ancestor's.
    #[error("`{name}::{member}` overrides `{ancestor}::{member}` with a mismatched {mismatch}")]
    InconsistentOverride {
        name: Name,
        ancestor: Name,
        member: Name,
        mismatch: &'static str,
    },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::DuplicateDeclaration { .. }
            | Self::CyclicInheritance { .. }
            | Self::InvalidParentKind { .. } => Severity::Error,
            Self::InconsistentOverride { .. } => Severity::Warning,
        }
    }
}

/// Accumulated anomalies for one resolve run.
///
/// Pushed to during the build phases, handed out read-only next to the
/// resolved graph.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one anomaly. Warns through `tracing` so live runs see it too.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("[BUILD] {}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Entries with [`Severity::Error`] only.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity() == Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
