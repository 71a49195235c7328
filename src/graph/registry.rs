//! Arena registry of declarations keyed by qualified name.

use indexmap::IndexMap;

use crate::base::{Interner, Name};
use crate::model::{DeclKind, Declaration};
use crate::resolve::ResolvedRef;

use thiserror::Error;

/// Unique identifier for a declaration in the registry arena.
/// Uses u32 for compact edge sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclId(pub u32);

impl DeclId {
    /// Create a new DeclId from an arena index.
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Failed registry insertion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The qualified name is already taken; the original registration wins.
    #[error("duplicate declaration of `{name}`")]
    Duplicate {
        name: Name,
        kept_file: Name,
        dropped_file: Name,
    },
}

/// One declaration plus the hierarchy edges derived for it.
///
/// Edge fields hold arena ids and names only. The registry owns every node,
/// so a malformed cycle in the input stays a traversal concern.
#[derive(Debug, Clone)]
pub struct Node {
    pub decl: Declaration,
    /// Interned qualified name, identical to the registry key.
    pub name: Name,
    /// Internal parent edge. Only classes carry one.
    pub parent: Option<DeclId>,
    /// Display name of a parent that resolved external/platform or was
    /// dropped by cycle/kind checks.
    pub unresolved_parent: Option<Name>,
    /// Classes whose parent edge points here, in linking order.
    pub children: Vec<DeclId>,
    /// Interface closure in first-seen order: own clauses first, then each
    /// interface's own closure, then the parent's.
    pub interfaces: Vec<ResolvedRef>,
    /// Used traits in clause order.
    pub traits: Vec<ResolvedRef>,
    /// Types whose own `implements`/`extends` clauses name this interface,
    /// in linking order.
    pub direct_implementers: Vec<DeclId>,
    /// Types whose own `use` clauses name this trait, in linking order.
    /// Traits use traits too, so this is not class-only.
    pub direct_users: Vec<DeclId>,
}

impl Node {
    fn new(decl: Declaration, name: Name) -> Self {
        Self {
            decl,
            name,
            parent: None,
            unresolved_parent: None,
            children: Vec::new(),
            interfaces: Vec::new(),
            traits: Vec::new(),
            direct_implementers: Vec::new(),
            direct_users: Vec::new(),
        }
    }

    pub fn kind(&self) -> DeclKind {
        self.decl.kind
    }
}

/// Central arena of all registered declarations.
///
/// Registration order is preserved and observable: every "registry order"
/// guarantee of the query layer is the iteration order of `by_name`.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    /// Arena storage for all nodes - single source of truth.
    nodes: Vec<Node>,
    /// Registration-order index for O(1) qualified-name lookups.
    by_name: IndexMap<Name, DeclId>,
    interner: Interner,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration under its qualified name.
    ///
    /// The first registration of a name wins; later ones are rejected with
    /// [`RegistryError::Duplicate`] and never enter the arena.
    pub fn insert(&mut self, decl: Declaration) -> Result<DeclId, RegistryError> {
        if let Some(&kept) = self.by_name.get(decl.qualified_name.as_str()) {
            let kept_file = {
                let kept_decl = &self.nodes[kept.index()].decl;
                self.interner.intern(&kept_decl.file)
            };
            return Err(RegistryError::Duplicate {
                name: self.interner.intern(&decl.qualified_name),
                kept_file,
                dropped_file: self.interner.intern(&decl.file),
            });
        }

        let name = self.interner.intern(&decl.qualified_name);
        let id = DeclId::new(self.nodes.len());
        self.nodes.push(Node::new(decl, Name::clone(&name)));
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Find a DeclId by exact qualified name (O(1) index lookup).
    pub fn lookup(&self, qualified_name: &str) -> Option<DeclId> {
        self.by_name.get(qualified_name).copied()
    }

    /// Find a node by exact qualified name.
    pub fn lookup_node(&self, qualified_name: &str) -> Option<&Node> {
        self.lookup(qualified_name).map(|id| &self[id])
    }

    /// Get a node by id, `None` when the id is from another registry.
    pub fn get(&self, id: DeclId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: DeclId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// All nodes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (DeclId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (DeclId::new(index), node))
    }

    /// Intern a string into the registry's shared name pool.
    pub(crate) fn intern(&mut self, s: &str) -> Name {
        self.interner.intern(s)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl std::ops::Index<DeclId> for Registry {
    type Output = Node;

    fn index(&self, id: DeclId) -> &Node {
        &self.nodes[id.index()]
    }
}
