//! Descendant, implementer, and trait-user queries.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::graph::{DeclId, Hierarchy};
use crate::model::DeclKind;

impl Hierarchy {
    /// Immediate subclasses, in linking order (registry order, never
    /// alphabetical).
    pub fn direct_subclasses(&self, id: DeclId) -> &[DeclId] {
        &self[id].children
    }

    /// Every descendant reachable over child edges, excluding `id` itself,
    /// breadth-first.
    pub fn transitive_descendants(&self, id: DeclId) -> Vec<DeclId> {
        let mut seen: FxHashSet<DeclId> = FxHashSet::default();
        let mut queue: VecDeque<DeclId> = self[id].children.iter().copied().collect();
        let mut descendants = Vec::new();

        while let Some(descendant) = queue.pop_front() {
            if !seen.insert(descendant) {
                continue;
            }
            descendants.push(descendant);
            queue.extend(self[descendant].children.iter().copied());
        }
        descendants
    }

    /// Descendants more than one parent edge away:
    /// transitive descendants minus direct subclasses.
    pub fn indirect_subclasses(&self, id: DeclId) -> Vec<DeclId> {
        let direct: FxHashSet<DeclId> = self[id].children.iter().copied().collect();
        self.transitive_descendants(id)
            .into_iter()
            .filter(|descendant| !direct.contains(descendant))
            .collect()
    }

    /// Classes whose own `implements`/`extends` clauses name this interface,
    /// in linking order.
    pub fn direct_implementers(&self, id: DeclId) -> Vec<DeclId> {
        self[id]
            .direct_implementers
            .iter()
            .copied()
            .filter(|&dependent| self[dependent].kind().is_class())
            .collect()
    }

    /// Classes that implement this interface only through an ancestor class
    /// or through interface extension, in registry order.
    pub fn indirect_implementers(&self, id: DeclId) -> Vec<DeclId> {
        let interface = &self[id].name;
        let direct: FxHashSet<DeclId> = self.direct_implementers(id).into_iter().collect();

        self.nodes()
            .filter(|(node_id, node)| {
                *node_id != id
                    && node.kind().is_class()
                    && !direct.contains(node_id)
                    && node
                        .interfaces
                        .iter()
                        .any(|resolved| resolved.name == *interface)
            })
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Types whose own `use` clauses name this trait, in linking order.
    pub fn direct_users(&self, id: DeclId) -> &[DeclId] {
        &self[id].direct_users
    }

    /// Types reaching this trait through a using class's descendants or
    /// through a using trait, excluding the direct users, breadth-first.
    pub fn indirect_users(&self, id: DeclId) -> Vec<DeclId> {
        let mut seen: FxHashSet<DeclId> = self[id].direct_users.iter().copied().collect();
        seen.insert(id);
        let mut queue: VecDeque<DeclId> = self[id].direct_users.iter().copied().collect();
        let mut indirect = Vec::new();

        while let Some(user) = queue.pop_front() {
            let reached: &[DeclId] = match self[user].kind() {
                DeclKind::Class => &self[user].children,
                DeclKind::Trait => &self[user].direct_users,
                DeclKind::Interface => &[],
            };
            for &next in reached {
                if seen.insert(next) {
                    indirect.push(next);
                    queue.push_back(next);
                }
            }
        }
        indirect
    }
}
