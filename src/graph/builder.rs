//! Two-pass hierarchy construction plus interface closure.
//!
//! Pass order: registration (on ingest), linking, parent-cycle breaking,
//! override checks, interface closure. Every pass degrades bad input into a
//! diagnostic and keeps going; none of them abort.

use rustc_hash::FxHashSet;

use crate::base::{Diagnostic, Diagnostics, Name};
use crate::model::{ConstantDecl, DeclKind, Declaration, FunctionDecl, Member, SourceUnit};
use crate::resolve::{Classification, NameResolver, PlatformIndex, ResolvedRef};

use super::hierarchy::Hierarchy;
use super::registry::{DeclId, Registry, RegistryError};

/// Resolved references of one declaration, staged before edges are applied.
///
/// Linking resolves against an immutable registry first and mutates nodes
/// second, so forward references cost nothing and borrows stay simple.
struct LinkPlan {
    id: DeclId,
    parent: Option<ResolvedRef>,
    interfaces: Vec<ResolvedRef>,
    traits: Vec<ResolvedRef>,
}

/// Mutable construction state for one run.
///
/// Consumed by [`HierarchyBuilder::resolve`]; the returned [`Hierarchy`] is
/// the only way to query, so a partially built graph is never observable.
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    registry: Registry,
    platform: PlatformIndex,
    diagnostics: Diagnostics,
    functions: Vec<FunctionDecl>,
    constants: Vec<ConstantDecl>,
}

impl HierarchyBuilder {
    /// Builder with the PHP runtime platform allowlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with a caller-supplied platform allowlist.
    pub fn with_platform(platform: PlatformIndex) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    /// Ingest one extracted source unit.
    ///
    /// Registration happens here: the first declaration of a qualified name
    /// wins, later ones are recorded as duplicates and dropped.
    pub fn add_unit(&mut self, unit: SourceUnit) {
        for decl in unit.declarations {
            self.add_declaration(decl);
        }
        self.functions.extend(unit.functions);
        self.constants.extend(unit.constants);
    }

    pub fn add_units<I>(&mut self, units: I)
    where
        I: IntoIterator<Item = SourceUnit>,
    {
        for unit in units {
            self.add_unit(unit);
        }
    }

    /// Register a single declaration.
    pub fn add_declaration(&mut self, decl: Declaration) {
        match self.registry.insert(decl) {
            Ok(id) => {
                tracing::trace!("[BUILD] registered {}", self.registry[id].name);
            }
            Err(RegistryError::Duplicate {
                name,
                kept_file,
                dropped_file,
            }) => {
                self.diagnostics.push(Diagnostic::DuplicateDeclaration {
                    name,
                    kept_file,
                    dropped_file,
                });
            }
        }
    }

    /// Run the linking and closure passes and seal the graph.
    ///
    /// Single-threaded by design: every pass needs the complete registry.
    /// Anomalies land in the returned [`Diagnostics`]; the pass itself
    /// cannot fail.
    pub fn resolve(mut self) -> (Hierarchy, Diagnostics) {
        tracing::info!(
            "[BUILD] registration complete: {} declarations, {} functions, {} constants",
            self.registry.len(),
            self.functions.len(),
            self.constants.len()
        );

        self.link();
        self.break_parent_cycles();
        self.check_overrides();
        self.close_interfaces();

        tracing::info!(
            "[BUILD] hierarchy sealed: {} nodes, {} diagnostics",
            self.registry.len(),
            self.diagnostics.len()
        );

        let hierarchy = Hierarchy::new(
            self.registry,
            self.platform,
            self.functions,
            self.constants,
        );
        (hierarchy, self.diagnostics)
    }

    // ============================================================
    // Linking pass
    // ============================================================

    fn link(&mut self) {
        let plans = self.resolve_references();

        let mut parent_edges = 0usize;
        for plan in plans {
            if self.apply_parent(plan.id, plan.parent) {
                parent_edges += 1;
            }
            self.apply_interfaces(plan.id, plan.interfaces);
            self.apply_traits(plan.id, plan.traits);
        }

        tracing::info!("[BUILD] linking complete: {} parent edges", parent_edges);
    }

    /// Resolve every raw reference against the now-complete registry.
    fn resolve_references(&self) -> Vec<LinkPlan> {
        let resolver = NameResolver::new(&self.registry, &self.platform);
        let mut plans = Vec::with_capacity(self.registry.len());

        for (id, node) in self.registry.iter() {
            let decl = &node.decl;
            let parent = decl
                .parent_ref
                .as_deref()
                .map(|token| resolver.resolve(token, &decl.context));
            let interfaces = Self::resolve_unique(&resolver, decl, &decl.interface_refs);
            let traits = Self::resolve_unique(&resolver, decl, &decl.trait_refs);
            plans.push(LinkPlan {
                id,
                parent,
                interfaces,
                traits,
            });
        }
        plans
    }

    /// Resolve a clause list, deduplicating repeated targets in clause order.
    fn resolve_unique(
        resolver: &NameResolver<'_>,
        decl: &Declaration,
        tokens: &[String],
    ) -> Vec<ResolvedRef> {
        let mut seen: FxHashSet<Name> = FxHashSet::default();
        tokens
            .iter()
            .map(|token| resolver.resolve(token, &decl.context))
            .filter(|resolved| seen.insert(Name::clone(&resolved.name)))
            .collect()
    }

    /// Returns true when an internal parent edge was set.
    fn apply_parent(&mut self, id: DeclId, resolved: Option<ResolvedRef>) -> bool {
        let Some(resolved) = resolved else {
            return false;
        };

        match self.registry[id].kind() {
            DeclKind::Class => {}
            // Interface extension arrives through interface_refs and traits
            // cannot be extended at all; keep the name for display only.
            DeclKind::Interface | DeclKind::Trait => {
                tracing::debug!(
                    "[LINK] ignoring parent token on non-class {}",
                    self.registry[id].name
                );
                self.set_unresolved_parent(id, resolved.name);
                return false;
            }
        }

        match resolved.classification {
            Classification::Internal(target) => {
                let target_kind = self.registry[target].kind();
                if !target_kind.is_class() {
                    self.diagnostics.push(Diagnostic::InvalidParentKind {
                        name: Name::clone(&self.registry[id].name),
                        target: Name::clone(&resolved.name),
                        target_kind: target_kind.display(),
                    });
                    self.set_unresolved_parent(id, resolved.name);
                    return false;
                }
                tracing::debug!(
                    "[LINK] {} extends {}",
                    self.registry[id].name,
                    resolved.name
                );
                if let Some(node) = self.registry.get_mut(id) {
                    node.parent = Some(target);
                }
                if let Some(parent_node) = self.registry.get_mut(target) {
                    parent_node.children.push(id);
                }
                true
            }
            Classification::ExternalLibrary | Classification::Platform => {
                tracing::debug!(
                    "[LINK] parent of {} is {} ({:?})",
                    self.registry[id].name,
                    resolved.name,
                    resolved.classification
                );
                self.set_unresolved_parent(id, resolved.name);
                false
            }
        }
    }

    fn apply_interfaces(&mut self, id: DeclId, interfaces: Vec<ResolvedRef>) {
        for resolved in &interfaces {
            if let Some(target) = resolved.internal_id() {
                if let Some(target_node) = self.registry.get_mut(target) {
                    target_node.direct_implementers.push(id);
                }
            }
        }
        if let Some(node) = self.registry.get_mut(id) {
            node.interfaces = interfaces;
        }
    }

    fn apply_traits(&mut self, id: DeclId, traits: Vec<ResolvedRef>) {
        for resolved in &traits {
            if let Some(target) = resolved.internal_id() {
                if let Some(target_node) = self.registry.get_mut(target) {
                    target_node.direct_users.push(id);
                }
            }
        }
        if let Some(node) = self.registry.get_mut(id) {
            node.traits = traits;
        }
    }

    fn set_unresolved_parent(&mut self, id: DeclId, name: Name) {
        if let Some(node) = self.registry.get_mut(id) {
            node.unresolved_parent = Some(name);
        }
    }

    // ============================================================
    // Parent-cycle breaking
    // ============================================================

    /// Drop the edge that closes each parent cycle.
    ///
    /// Walks every chain once; the node whose edge is found closing a cycle
    /// becomes rootless and keeps the intended parent as a display name.
    fn break_parent_cycles(&mut self) {
        let mut settled: FxHashSet<DeclId> = FxHashSet::default();
        let ids: Vec<DeclId> = self.registry.iter().map(|(id, _)| id).collect();

        for start in ids {
            if settled.contains(&start) {
                continue;
            }

            let mut stack: Vec<DeclId> = vec![start];
            let mut on_stack: FxHashSet<DeclId> = FxHashSet::default();
            on_stack.insert(start);

            let mut current = start;
            while let Some(parent) = self.registry[current].parent {
                if settled.contains(&parent) {
                    break;
                }
                if on_stack.contains(&parent) {
                    self.drop_parent_edge(current, parent);
                    break;
                }
                stack.push(parent);
                on_stack.insert(parent);
                current = parent;
            }

            settled.extend(stack);
        }
    }

    fn drop_parent_edge(&mut self, child: DeclId, parent: DeclId) {
        let parent_name = Name::clone(&self.registry[parent].name);
        let child_name = Name::clone(&self.registry[child].name);
        self.diagnostics.push(Diagnostic::CyclicInheritance {
            name: child_name,
            through: Name::clone(&parent_name),
        });
        if let Some(node) = self.registry.get_mut(child) {
            node.parent = None;
            node.unresolved_parent = Some(parent_name);
        }
        if let Some(parent_node) = self.registry.get_mut(parent) {
            parent_node.children.retain(|&c| c != child);
        }
    }

    // ============================================================
    // Override consistency
    // ============================================================

    /// Warn when a member redeclares its nearest ancestor counterpart with a
    /// mismatched shape. The descendant's member wins either way.
    fn check_overrides(&mut self) {
        let ids: Vec<DeclId> = self.registry.iter().map(|(id, _)| id).collect();

        for id in ids {
            for index in 0..self.registry[id].decl.members.len() {
                let mismatch = {
                    let node = &self.registry[id];
                    let member = &node.decl.members[index];
                    Self::nearest_ancestor_member(&self.registry, id, &member.name).and_then(
                        |(ancestor, base)| {
                            let mismatch = if member.kind != base.kind {
                                "member kind"
                            } else if member.visibility.narrower_than(base.visibility) {
                                "visibility"
                            } else if !member.signature_matches(base) {
                                "parameter arity"
                            } else {
                                return None;
                            };
                            Some((
                                Name::clone(&self.registry[ancestor].name),
                                member.name.clone(),
                                mismatch,
                            ))
                        },
                    )
                };

                if let Some((ancestor, member, mismatch)) = mismatch {
                    let name = Name::clone(&self.registry[id].name);
                    self.diagnostics.push(Diagnostic::InconsistentOverride {
                        name,
                        ancestor,
                        member: Name::from(member.as_str()),
                        mismatch,
                    });
                }
            }
        }
    }

    /// Nearest parent-chain member with the given name. Chains are acyclic
    /// once break_parent_cycles has run.
    fn nearest_ancestor_member<'r>(
        registry: &'r Registry,
        id: DeclId,
        member_name: &str,
    ) -> Option<(DeclId, &'r Member)> {
        let mut current = registry[id].parent;
        while let Some(ancestor) = current {
            let node = &registry[ancestor];
            if let Some(member) = node.decl.own_member(member_name) {
                return Some((ancestor, member));
            }
            current = node.parent;
        }
        None
    }

    // ============================================================
    // Interface closure
    // ============================================================

    /// Replace every node's direct interface list with its transitive
    /// closure: ancestors before descendants, clause order within each
    /// level, deduplicated by qualified name.
    fn close_interfaces(&mut self) {
        let len = self.registry.len();
        let mut memo: Vec<Option<Vec<ResolvedRef>>> = vec![None; len];
        let mut dropped: Vec<(DeclId, DeclId)> = Vec::new();

        let ids: Vec<DeclId> = self.registry.iter().map(|(id, _)| id).collect();
        for id in ids {
            let mut on_stack: FxHashSet<DeclId> = FxHashSet::default();
            Self::close_node(
                &self.registry,
                &mut self.diagnostics,
                &mut memo,
                &mut on_stack,
                &mut dropped,
                id,
            );
        }

        for (index, closed) in memo.into_iter().enumerate() {
            if let Some(interfaces) = closed {
                if let Some(node) = self.registry.get_mut(DeclId::new(index)) {
                    node.interfaces = interfaces;
                }
            }
        }

        // Dropped cyclic edges also leave the reverse index.
        for (from, to) in dropped {
            if let Some(node) = self.registry.get_mut(to) {
                node.direct_implementers.retain(|&c| c != from);
            }
        }

        tracing::info!("[BUILD] interface closure complete");
    }

    fn close_node(
        registry: &Registry,
        diagnostics: &mut Diagnostics,
        memo: &mut [Option<Vec<ResolvedRef>>],
        on_stack: &mut FxHashSet<DeclId>,
        dropped: &mut Vec<(DeclId, DeclId)>,
        id: DeclId,
    ) {
        if memo[id.index()].is_some() {
            return;
        }
        on_stack.insert(id);

        let node = &registry[id];
        let mut seen: FxHashSet<Name> = FxHashSet::default();
        let mut closed: Vec<ResolvedRef> = Vec::new();

        // Ancestor contributions come first.
        if let Some(parent) = node.parent {
            Self::close_node(registry, diagnostics, memo, on_stack, dropped, parent);
            if let Some(parent_closed) = &memo[parent.index()] {
                for resolved in parent_closed {
                    Self::push_unique(&mut closed, &mut seen, resolved.clone());
                }
            }
        }

        for direct in &node.interfaces {
            match direct.classification {
                Classification::Internal(target) => {
                    if on_stack.contains(&target) {
                        // Revisiting a node on the traversal stack closes a
                        // cycle; drop this edge and keep going.
                        diagnostics.push(Diagnostic::CyclicInheritance {
                            name: Name::clone(&node.name),
                            through: Name::clone(&direct.name),
                        });
                        dropped.push((id, target));
                        continue;
                    }
                    Self::close_node(registry, diagnostics, memo, on_stack, dropped, target);
                    if let Some(target_closed) = &memo[target.index()] {
                        for resolved in target_closed {
                            Self::push_unique(&mut closed, &mut seen, resolved.clone());
                        }
                    }
                    Self::push_unique(&mut closed, &mut seen, direct.clone());
                }
                Classification::ExternalLibrary | Classification::Platform => {
                    Self::push_unique(&mut closed, &mut seen, direct.clone());
                }
            }
        }

        on_stack.remove(&id);
        memo[id.index()] = Some(closed);
    }

    fn push_unique(closed: &mut Vec<ResolvedRef>, seen: &mut FxHashSet<Name>, resolved: ResolvedRef) {
        if seen.insert(Name::clone(&resolved.name)) {
            closed.push(resolved);
        }
    }
}
