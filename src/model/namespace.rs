//! Per-file namespace and alias context.

use rustc_hash::FxHashMap;

/// The namespace a declaration was written in, plus the file's import
/// aliases. Relative reference tokens are resolved against this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamespaceContext {
    /// Enclosing namespace, empty for the global one.
    pub namespace: String,
    /// Alias -> fully qualified target, one entry per `use` clause.
    pub aliases: FxHashMap<String, String>,
}

impl NamespaceContext {
    /// Context inside the given namespace, with no aliases.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            aliases: FxHashMap::default(),
        }
    }

    /// The global namespace with no aliases.
    pub fn global() -> Self {
        Self::default()
    }

    /// Add one import alias (`use Target\Path as Alias`).
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }

    /// Qualified target for an alias, if the file imported one.
    pub fn alias_target(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn is_global(&self) -> bool {
        self.namespace.is_empty()
    }
}
