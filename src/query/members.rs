//! Effective and inherited member listings.
//!
//! Shadowing is resolved over the full graph BEFORE visibility filtering:
//! a private override still suppresses the public ancestor member it
//! shadows, so filtering the override out must not resurrect the ancestor's
//! copy.

use rustc_hash::FxHashSet;

use crate::graph::{DeclId, Hierarchy};
use crate::model::Member;
use crate::query::MemberFilter;

/// A member visible on a type, tagged with the declaration that provides it.
#[derive(Debug, Clone, Copy)]
pub struct EffectiveMember<'a> {
    pub member: &'a Member,
    pub declared_in: DeclId,
}

/// Members contributed by one ancestor, for per-ancestor output sections.
#[derive(Debug, Clone)]
pub struct InheritedMembers<'a> {
    pub ancestor: DeclId,
    pub members: Vec<&'a Member>,
}

impl Hierarchy {
    /// Every member visible on `id`: own members first in declaration
    /// order, then inherited ones walking up the parent chain. A member
    /// name seen lower in the chain shadows all copies above it.
    pub fn effective_members(&self, id: DeclId) -> Vec<EffectiveMember<'_>> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut members = Vec::new();

        self.collect_members(id, &mut seen, &mut members);
        for ancestor in self.parent_chain(id) {
            self.collect_members(ancestor, &mut seen, &mut members);
        }
        members
    }

    /// [`effective_members`](Self::effective_members) restricted to members
    /// the filter admits. Shadowing has already happened on the full set.
    pub fn effective_members_filtered(
        &self,
        id: DeclId,
        filter: MemberFilter<'_>,
    ) -> Vec<EffectiveMember<'_>> {
        let mut members = self.effective_members(id);
        members.retain(|effective| filter.allows(effective.member));
        members
    }

    /// Inherited members grouped by the ancestor providing them, in parent
    /// chain order. Ancestors contributing nothing are omitted.
    pub fn inherited_members(&self, id: DeclId) -> Vec<InheritedMembers<'_>> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for member in &self[id].decl.members {
            seen.insert(member.name.as_str());
        }

        let mut groups = Vec::new();
        for ancestor in self.parent_chain(id) {
            let mut contributed = Vec::new();
            for member in &self[ancestor].decl.members {
                if seen.insert(member.name.as_str()) {
                    contributed.push(member);
                }
            }
            if !contributed.is_empty() {
                groups.push(InheritedMembers {
                    ancestor,
                    members: contributed,
                });
            }
        }
        groups
    }

    /// [`inherited_members`](Self::inherited_members) restricted to members
    /// the filter admits, dropping groups the filter empties.
    pub fn inherited_members_filtered(
        &self,
        id: DeclId,
        filter: MemberFilter<'_>,
    ) -> Vec<InheritedMembers<'_>> {
        let mut groups = self.inherited_members(id);
        for group in &mut groups {
            group.members.retain(|member| filter.allows(member));
        }
        groups.retain(|group| !group.members.is_empty());
        groups
    }

    fn collect_members<'a>(
        &'a self,
        id: DeclId,
        seen: &mut FxHashSet<&'a str>,
        out: &mut Vec<EffectiveMember<'a>>,
    ) {
        for member in &self[id].decl.members {
            if seen.insert(member.name.as_str()) {
                out.push(EffectiveMember {
                    member,
                    declared_in: id,
                });
            }
        }
    }
}
