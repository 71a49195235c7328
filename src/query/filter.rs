//! Documentation predicates derived from [`FilterConfig`].
//!
//! The graph always holds every declaration; filtering happens at query
//! time so one resolved hierarchy can serve multiple output configurations.

use std::cmp::Ordering;

use crate::config::FilterConfig;
use crate::model::{Annotations, Declaration, Member};

/// Decides which members and declarations belong in generated output.
#[derive(Debug, Clone, Copy)]
pub struct MemberFilter<'a> {
    config: &'a FilterConfig,
}

impl<'a> MemberFilter<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        MemberFilter { config }
    }

    /// True when the member's visibility and annotations pass the
    /// configured toggles.
    pub fn allows(&self, member: &Member) -> bool {
        self.config.access_levels.allows(member.visibility)
            && self.allows_annotations(&member.annotations)
    }

    /// Annotation toggles alone; shared between members, free functions,
    /// and constants.
    pub fn allows_annotations(&self, annotations: &Annotations) -> bool {
        if annotations.internal && !self.config.internal {
            return false;
        }
        if annotations.deprecated && !self.config.deprecated {
            return false;
        }
        if annotations.todo && !self.config.todo {
            return false;
        }
        true
    }

    /// True when the declaration itself should appear in output.
    pub fn is_documented(&self, declaration: &Declaration) -> bool {
        self.allows_annotations(&declaration.annotations)
    }
}

/// Ordering for display listings: names under the main project prefix sort
/// before everything else, then case-insensitively by name.
pub fn display_order(config: &FilterConfig, a: &str, b: &str) -> Ordering {
    if !config.main.is_empty() {
        let a_main = a.starts_with(&config.main);
        let b_main = b.starts_with(&config.main);
        if a_main != b_main {
            return b_main.cmp(&a_main);
        }
    }
    a.to_lowercase().cmp(&b.to_lowercase())
}
