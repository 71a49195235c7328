//! Filter configuration consumed by the query and statistics layers.
//!
//! The snapshot is assembled by the CLI/configuration layer before the run
//! and never changes afterward. Nothing here influences how the graph is
//! built; it only decides what the presentation boundary shows.

use crate::model::Visibility;

/// Which member visibilities get documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessLevels {
    pub public: bool,
    pub protected: bool,
    pub private: bool,
}

impl AccessLevels {
    pub fn allows(self, visibility: Visibility) -> bool {
        match visibility {
            Visibility::Public => self.public,
            Visibility::Protected => self.protected,
            Visibility::Private => self.private,
        }
    }

    /// Every visibility, for callers that opt out of access filtering.
    pub fn all() -> Self {
        Self {
            public: true,
            protected: true,
            private: true,
        }
    }
}

impl Default for AccessLevels {
    /// Public and protected members, matching the generator's CLI default.
    fn default() -> Self {
        Self {
            public: true,
            protected: true,
            private: false,
        }
    }
}

/// Presentation-boundary options.
///
/// Mirrors the generator's CLI switches one to one. Everything defaults to
/// the narrowest documentation set: public/protected members, no
/// deprecated/internal/todo elements, platform classes as leaves only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfig {
    pub access_levels: AccessLevels,
    /// Document `@internal`-annotated elements.
    pub internal: bool,
    /// Document `@deprecated` elements.
    pub deprecated: bool,
    /// Document elements carrying `@todo`.
    pub todo: bool,
    /// Document platform classes as first-class nodes rather than leaves.
    pub php: bool,
    /// Name prefix of the main project, used only for display ordering.
    pub main: String,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the main project prefix used for display ordering.
    pub fn with_main(mut self, prefix: impl Into<String>) -> Self {
        self.main = prefix.into();
        self
    }

    /// True when `name` belongs to the configured main project prefix.
    pub fn in_main_project(&self, name: &str) -> bool {
        !self.main.is_empty() && name.starts_with(self.main.as_str())
    }
}
