//! String interner for qualified names.
//!
//! Uses `Arc<str>` for cheap cloning (reference count increment instead of
//! allocation) and so interned names stay shareable once the resolved graph
//! is handed out for concurrent reads. The interner deduplicates strings so
//! identical names share the same allocation.

use std::sync::Arc;

use rustc_hash::FxHashSet;

/// An interned name - cheap to clone (just an Arc increment).
pub type Name = Arc<str>;

/// String interner that deduplicates names.
///
/// Interning a string returns an `Arc<str>` that can be cheaply cloned.
/// If the same string is interned multiple times, the same `Arc` is returned.
#[derive(Debug, Default, Clone)]
pub struct Interner {
    strings: FxHashSet<Arc<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning a cheap-to-clone handle.
    ///
    /// If the string was already interned, returns the existing `Arc`.
    /// Otherwise, creates a new `Arc` and stores it.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(existing) = self.strings.get(s) {
            Arc::clone(existing)
        } else {
            let arc: Arc<str> = Arc::from(s);
            self.strings.insert(Arc::clone(&arc));
            arc
        }
    }

    /// Intern an owned string, avoiding allocation if possible.
    pub fn intern_string(&mut self, s: String) -> Name {
        if let Some(existing) = self.strings.get(s.as_str()) {
            Arc::clone(existing)
        } else {
            let arc: Arc<str> = Arc::from(s);
            self.strings.insert(Arc::clone(&arc));
            arc
        }
    }

    /// Get an interned name if it exists, without creating it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.strings.get(s).cloned()
    }

    /// Number of unique names interned.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if no names have been interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
