//! Reference-token resolution against the registry.

use tracing::{debug, trace};

use crate::base::{Name, join, split_first, strip_absolute};
use crate::graph::{DeclId, Registry};
use crate::model::NamespaceContext;

use super::platform::PlatformIndex;

/// Where a resolved reference points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Another declaration in the scanned input set.
    Internal(DeclId),
    /// Not scanned and not a runtime built-in: assumed third-party.
    ExternalLibrary,
    /// Runtime built-in from the platform allowlist.
    Platform,
}

/// Outcome of resolving one raw reference token.
///
/// Resolution never fails: an unresolved name is a
/// documentation-completeness fact, not an error, and every downstream
/// consumer tolerates the non-internal classifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRef {
    /// Canonical fully qualified name, no leading separator.
    pub name: Name,
    pub classification: Classification,
}

impl ResolvedRef {
    pub fn internal_id(&self) -> Option<DeclId> {
        match self.classification {
            Classification::Internal(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.classification, Classification::Internal(_))
    }

    pub fn is_platform(&self) -> bool {
        matches!(self.classification, Classification::Platform)
    }

    pub fn is_external(&self) -> bool {
        matches!(self.classification, Classification::ExternalLibrary)
    }
}

/// Resolver turning raw tokens into classified references.
///
/// All resolution logic lives here, keeping the registry a pure data
/// structure. The registry is borrowed immutably: resolution runs between
/// the registration and linking passes and never mutates nodes.
pub struct NameResolver<'a> {
    registry: &'a Registry,
    platform: &'a PlatformIndex,
}

impl<'a> NameResolver<'a> {
    pub fn new(registry: &'a Registry, platform: &'a PlatformIndex) -> Self {
        Self { registry, platform }
    }

    /// Resolve one raw reference token against its declaring file's context.
    pub fn resolve(&self, token: &str, context: &NamespaceContext) -> ResolvedRef {
        // 1. Absolute tokens skip alias and namespace expansion
        if let Some(absolute) = strip_absolute(token) {
            trace!("[RESOLVE] '{}' is absolute", token);
            return self.classify(absolute.to_string(), None);
        }

        // 2. Alias table of the declaring file, keyed by the first segment
        let (first, rest) = split_first(token);
        if let Some(target) = context.alias_target(first) {
            let expanded = match rest {
                Some(rest) => join(target, rest),
                None => target.to_string(),
            };
            trace!(
                "[RESOLVE] '{}' expanded via alias '{}' -> {}",
                token, first, expanded
            );
            return self.classify(expanded, None);
        }

        // 3. Prefix with the declaring namespace. The bare token doubles as
        //    a platform candidate: built-ins are referenced unqualified from
        //    inside namespaces without an importing alias.
        let expanded = join(&context.namespace, token);
        trace!(
            "[RESOLVE] '{}' prefixed with namespace '{}' -> {}",
            token, context.namespace, expanded
        );
        self.classify(expanded, Some(token))
    }

    fn classify(&self, expanded: String, bare: Option<&str>) -> ResolvedRef {
        if let Some(id) = self.registry.lookup(&expanded) {
            trace!("[RESOLVE] -> internal: {}", expanded);
            return ResolvedRef {
                name: Name::clone(&self.registry[id].name),
                classification: Classification::Internal(id),
            };
        }

        if self.platform.contains(&expanded) {
            trace!("[RESOLVE] -> platform: {}", expanded);
            return ResolvedRef {
                name: Name::from(expanded),
                classification: Classification::Platform,
            };
        }

        if let Some(bare) = bare {
            if self.platform.contains(bare) {
                trace!("[RESOLVE] -> platform (bare token): {}", bare);
                return ResolvedRef {
                    name: Name::from(bare),
                    classification: Classification::Platform,
                };
            }
        }

        debug!(
            "[RESOLVE] '{}' not in the input set, assuming external library",
            expanded
        );
        ResolvedRef {
            name: Name::from(expanded),
            classification: Classification::ExternalLibrary,
        }
    }
}
