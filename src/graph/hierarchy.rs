//! The resolved, read-only hierarchy graph.

use crate::base::Name;
use crate::model::{ConstantDecl, Declaration, FunctionDecl};
use crate::resolve::PlatformIndex;

use super::registry::{DeclId, Node, Registry};

/// Sealed hierarchy for one run.
///
/// Constructed exactly once by [`HierarchyBuilder::resolve`]; there is no
/// mutation path afterward, so report generators may read it from any
/// number of threads.
///
/// [`HierarchyBuilder::resolve`]: super::HierarchyBuilder::resolve
#[derive(Debug, Clone)]
pub struct Hierarchy {
    registry: Registry,
    platform: PlatformIndex,
    functions: Vec<FunctionDecl>,
    constants: Vec<ConstantDecl>,
}

impl Hierarchy {
    pub(crate) fn new(
        registry: Registry,
        platform: PlatformIndex,
        functions: Vec<FunctionDecl>,
        constants: Vec<ConstantDecl>,
    ) -> Self {
        Self {
            registry,
            platform,
            functions,
            constants,
        }
    }

    /// Find a DeclId by exact qualified name (O(1) index lookup).
    pub fn lookup(&self, qualified_name: &str) -> Option<DeclId> {
        self.registry.lookup(qualified_name)
    }

    /// Find a node by exact qualified name.
    pub fn node(&self, qualified_name: &str) -> Option<&Node> {
        self.registry.lookup_node(qualified_name)
    }

    /// Get a node by id, `None` when the id is from another run.
    pub fn get(&self, id: DeclId) -> Option<&Node> {
        self.registry.get(id)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.lookup(qualified_name).is_some()
    }

    /// All nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = (DeclId, &Node)> {
        self.registry.iter()
    }

    /// All declarations in registration order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.registry.iter().map(|(_, node)| &node.decl)
    }

    /// Qualified name of a node.
    pub fn name_of(&self, id: DeclId) -> &Name {
        &self.registry[id].name
    }

    /// The platform allowlist this hierarchy was resolved against. Used to
    /// re-classify display-only parent names (statistics, export).
    pub fn platform(&self) -> &PlatformIndex {
        &self.platform
    }

    /// Standalone functions handed over by the extractor.
    pub fn functions(&self) -> &[FunctionDecl] {
        &self.functions
    }

    /// Global constants handed over by the extractor.
    pub fn constants(&self) -> &[ConstantDecl] {
        &self.constants
    }

    /// Number of class-like nodes.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl std::ops::Index<DeclId> for Hierarchy {
    type Output = Node;

    fn index(&self, id: DeclId) -> &Node {
        &self.registry[id]
    }
}
