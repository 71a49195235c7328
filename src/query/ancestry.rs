//! Ancestor-chain queries.

use tracing::trace;

use crate::base::Name;
use crate::graph::{DeclId, Hierarchy};

impl Hierarchy {
    /// Internal parent, `None` when the immediate parent is unset, external,
    /// or platform.
    pub fn parent_of(&self, id: DeclId) -> Option<DeclId> {
        self[id].parent
    }

    /// Ancestors from the immediate parent up to the most distant internally
    /// resolvable one; the chain stops at the first external/platform/unset
    /// link. Empty when there is no internal parent.
    pub fn parent_chain(&self, id: DeclId) -> Vec<DeclId> {
        let mut chain = Vec::new();
        let mut current = self[id].parent;
        while let Some(ancestor) = current {
            chain.push(ancestor);
            current = self[ancestor].parent;
        }
        trace!(
            "[QUERY] parent_chain({}) has {} links",
            self[id].name,
            chain.len()
        );
        chain
    }

    /// Qualified names of [`parent_chain`](Self::parent_chain), same order.
    pub fn parent_name_chain(&self, id: DeclId) -> Vec<Name> {
        self.parent_chain(id)
            .into_iter()
            .map(|ancestor| Name::clone(&self[ancestor].name))
            .collect()
    }

    /// True iff `ancestor` appears in the parent chain of `id`.
    pub fn is_subclass_of(&self, id: DeclId, ancestor: DeclId) -> bool {
        let mut current = self[id].parent;
        while let Some(link) = current {
            if link == ancestor {
                return true;
            }
            current = self[link].parent;
        }
        false
    }
}
