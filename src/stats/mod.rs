//! Documented-element counts for the progress report.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::config::FilterConfig;
use crate::graph::Hierarchy;
use crate::model::DeclKind;
use crate::query::MemberFilter;

/// Counts over one resolved hierarchy, honoring the documentation filter.
///
/// `platform_classes` counts distinct platform names actually reachable from
/// the documented set (as a parent or closed interface/trait of a documented
/// node), not every platform name the input ever mentioned. The `php` toggle
/// decides whether those become documented nodes, never whether they count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub classes: usize,
    pub interfaces: usize,
    pub traits: usize,
    pub functions: usize,
    pub constants: usize,
    pub platform_classes: usize,
}

impl Statistics {
    /// Single pass over the registry plus the function/constant lists.
    pub fn collect(hierarchy: &Hierarchy, config: &FilterConfig) -> Self {
        let filter = MemberFilter::new(config);
        let mut stats = Statistics::default();
        let mut platform_seen: FxHashSet<&str> = FxHashSet::default();

        for (_, node) in hierarchy.nodes() {
            if !filter.is_documented(&node.decl) {
                continue;
            }
            match node.kind() {
                DeclKind::Class => stats.classes += 1,
                DeclKind::Interface => stats.interfaces += 1,
                DeclKind::Trait => stats.traits += 1,
            }

            if let Some(parent) = &node.unresolved_parent {
                if hierarchy.platform().contains(parent) {
                    platform_seen.insert(parent);
                }
            }
            for resolved in node.interfaces.iter().chain(node.traits.iter()) {
                if resolved.is_platform() {
                    platform_seen.insert(&resolved.name);
                }
            }
        }

        stats.functions = hierarchy
            .functions()
            .iter()
            .filter(|function| filter.allows_annotations(&function.annotations))
            .count();
        stats.constants = hierarchy
            .constants()
            .iter()
            .filter(|constant| filter.allows_annotations(&constant.annotations))
            .count();
        stats.platform_classes = platform_seen.len();

        tracing::info!("[STATS] {}", stats);
        stats
    }

    /// Every class-like element: classes, interfaces, and traits. This is
    /// the "classes" figure of the progress line.
    pub fn class_like(&self) -> usize {
        self.classes + self.interfaces + self.traits
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found {} classes, {} constants, {} functions and {} PHP internal classes",
            self.class_like(),
            self.constants,
            self.functions,
            self.platform_classes
        )
    }
}
