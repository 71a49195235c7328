//! DTO tree for the JSON snapshot.

use serde::{Deserialize, Serialize};

use crate::config::FilterConfig;
use crate::graph::{Hierarchy, Node};
use crate::query::{MemberFilter, display_order};
use crate::stats::Statistics;

use super::ExportError;

/// One documented declaration, flattened to names.
///
/// `children` is sorted for display; `interfaces` and `traits` keep closure
/// order because dedup order is part of the resolved semantics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDto {
    pub name: String,
    pub kind: String,
    pub parent: Option<String>,
    pub unresolved_parent: Option<String>,
    pub children: Vec<String>,
    pub interfaces: Vec<String>,
    pub traits: Vec<String>,
}

/// The statistics block of the snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsDto {
    pub classes: usize,
    pub interfaces: usize,
    pub traits: usize,
    pub functions: usize,
    pub constants: usize,
    pub platform_classes: usize,
}

impl From<Statistics> for StatisticsDto {
    fn from(stats: Statistics) -> Self {
        Self {
            classes: stats.classes,
            interfaces: stats.interfaces,
            traits: stats.traits,
            functions: stats.functions,
            constants: stats.constants,
            platform_classes: stats.platform_classes,
        }
    }
}

/// Everything a tree/template page needs from one run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HierarchySnapshot {
    /// Documented nodes in display order.
    pub nodes: Vec<NodeDto>,
    /// Reachable platform names, filled only when the `php` toggle asks for
    /// platform classes as documented elements. Display order.
    pub platform: Vec<String>,
    pub statistics: StatisticsDto,
}

impl HierarchySnapshot {
    /// Flatten the documented part of a resolved hierarchy.
    pub fn capture(hierarchy: &Hierarchy, config: &FilterConfig) -> Self {
        let filter = MemberFilter::new(config);

        let mut nodes: Vec<NodeDto> = hierarchy
            .nodes()
            .filter(|(_, node)| filter.is_documented(&node.decl))
            .map(|(_, node)| Self::node_dto(hierarchy, node, filter, config))
            .collect();
        nodes.sort_by(|a, b| display_order(config, &a.name, &b.name));

        let mut platform = Vec::new();
        if config.php {
            for dto in &nodes {
                let reachable = dto
                    .unresolved_parent
                    .iter()
                    .chain(dto.interfaces.iter())
                    .chain(dto.traits.iter())
                    .filter(|name| hierarchy.platform().contains(name));
                for name in reachable {
                    if !platform.contains(name) {
                        platform.push(name.clone());
                    }
                }
            }
            platform.sort_by(|a, b| display_order(config, a, b));
        }

        let statistics = Statistics::collect(hierarchy, config).into();
        tracing::debug!("[EXPORT] snapshot of {} nodes", nodes.len());

        Self {
            nodes,
            platform,
            statistics,
        }
    }

    fn node_dto(
        hierarchy: &Hierarchy,
        node: &Node,
        filter: MemberFilter<'_>,
        config: &FilterConfig,
    ) -> NodeDto {
        let mut children: Vec<String> = node
            .children
            .iter()
            .filter(|&&child| filter.is_documented(&hierarchy[child].decl))
            .map(|&child| hierarchy.name_of(child).to_string())
            .collect();
        children.sort_by(|a, b| display_order(config, a, b));

        NodeDto {
            name: node.name.to_string(),
            kind: node.kind().display().to_string(),
            parent: node
                .parent
                .map(|parent| hierarchy.name_of(parent).to_string()),
            unresolved_parent: node.unresolved_parent.as_deref().map(str::to_string),
            children,
            interfaces: node.interfaces.iter().map(|r| r.name.to_string()).collect(),
            traits: node.traits.iter().map(|r| r.name.to_string()).collect(),
        }
    }

    /// Pretty-printed JSON document.
    pub fn to_json_string(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::graph::HierarchyBuilder;
    use crate::model::{Annotations, Declaration};

    fn sample() -> Hierarchy {
        let mut builder = HierarchyBuilder::new();
        for decl in [
            Declaration::class("Vendor\\Shim").extending("\\Exception"),
            Declaration::class("Project\\App").implementing(["\\Countable"]),
            Declaration::class("Project\\Base"),
            Declaration::class("Project\\Zed").extending("Project\\Base"),
            Declaration::class("Project\\Arc").extending("Project\\Base"),
            Declaration::class("Project\\Secret").with_annotations(Annotations::internal()),
        ] {
            builder.add_declaration(decl);
        }
        let (hierarchy, diagnostics) = builder.resolve();
        assert!(diagnostics.is_empty());
        hierarchy
    }

    #[test]
    fn test_nodes_come_out_in_display_order() {
        let hierarchy = sample();
        let config = FilterConfig::new().with_main("Project\\");
        let snapshot = HierarchySnapshot::capture(&hierarchy, &config);

        let names: Vec<&str> = snapshot.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Project\\App",
                "Project\\Arc",
                "Project\\Base",
                "Project\\Zed",
                "Vendor\\Shim"
            ]
        );
    }

    #[test]
    fn test_children_are_sorted_but_interfaces_keep_closure_order() {
        let hierarchy = sample();
        let config = FilterConfig::new();
        let snapshot = HierarchySnapshot::capture(&hierarchy, &config);

        let base = snapshot
            .nodes
            .iter()
            .find(|n| n.name == "Project\\Base")
            .unwrap();
        assert_eq!(base.children, ["Project\\Arc", "Project\\Zed"]);

        let app = snapshot
            .nodes
            .iter()
            .find(|n| n.name == "Project\\App")
            .unwrap();
        assert_eq!(app.interfaces, ["Countable"]);
    }

    #[test]
    fn test_undocumented_nodes_are_left_out() {
        let hierarchy = sample();
        let snapshot = HierarchySnapshot::capture(&hierarchy, &FilterConfig::new());
        assert!(snapshot.nodes.iter().all(|n| n.name != "Project\\Secret"));
        assert_eq!(snapshot.statistics.classes, 5);
    }

    #[test]
    fn test_php_toggle_fills_the_platform_list() {
        let hierarchy = sample();

        let without = HierarchySnapshot::capture(&hierarchy, &FilterConfig::new());
        assert!(without.platform.is_empty());

        let mut config = FilterConfig::new();
        config.php = true;
        let with = HierarchySnapshot::capture(&hierarchy, &config);
        assert_eq!(with.platform, ["Countable", "Exception"]);
        assert_eq!(with.statistics.platform_classes, 2);
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let hierarchy = sample();
        let snapshot = HierarchySnapshot::capture(&hierarchy, &FilterConfig::new());

        let json = snapshot.to_json_string().unwrap();
        let parsed: HierarchySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
