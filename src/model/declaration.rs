//! Class-like declarations and per-file source units.

use super::member::Member;
use super::namespace::NamespaceContext;

/// The closed set of class-like declaration kinds.
///
/// Kind-sensitive paths match on this exhaustively; there is no
/// "other" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Interface,
    Trait,
}

impl DeclKind {
    pub fn display(self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Trait => "trait",
        }
    }

    pub fn is_class(self) -> bool {
        matches!(self, DeclKind::Class)
    }

    pub fn is_interface(self) -> bool {
        matches!(self, DeclKind::Interface)
    }

    pub fn is_trait(self) -> bool {
        matches!(self, DeclKind::Trait)
    }
}

/// Declaration-level modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub is_abstract: bool,
    pub is_final: bool,
}

/// Documentation annotations that drive presentation filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotations {
    pub deprecated: bool,
    pub internal: bool,
    pub todo: bool,
}

impl Annotations {
    pub fn deprecated() -> Self {
        Self {
            deprecated: true,
            ..Self::default()
        }
    }

    pub fn internal() -> Self {
        Self {
            internal: true,
            ..Self::default()
        }
    }

    pub fn todo() -> Self {
        Self {
            todo: true,
            ..Self::default()
        }
    }
}

/// One parsed class-like declaration, exactly as the extractor saw it.
///
/// Parent/interface/trait references are raw tokens (`Base`,
/// `\Vendor\Lib\Base`, `Alias\Sub`); resolving them against
/// [`NamespaceContext`] is the resolver's job, never the extractor's.
/// Created once, never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Fully qualified name, the unique key across the whole input set.
    pub qualified_name: String,
    pub kind: DeclKind,
    pub modifiers: Modifiers,
    /// Raw `extends` token for classes, `None` when the clause is absent.
    /// Interfaces put their (multi) `extends` tokens in `interface_refs`.
    pub parent_ref: Option<String>,
    /// Raw `implements` tokens (classes) or `extends` tokens (interfaces),
    /// in clause order. Clause order is load-bearing for closure ordering.
    pub interface_refs: Vec<String>,
    /// Raw `use` trait tokens, in clause order.
    pub trait_refs: Vec<String>,
    /// Namespace and alias table of the declaring file.
    pub context: NamespaceContext,
    pub members: Vec<Member>,
    pub annotations: Annotations,
    /// Declaring file, for diagnostics.
    pub file: String,
}

impl Declaration {
    pub fn new(kind: DeclKind, qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            kind,
            modifiers: Modifiers::default(),
            parent_ref: None,
            interface_refs: Vec::new(),
            trait_refs: Vec::new(),
            context: NamespaceContext::global(),
            members: Vec::new(),
            annotations: Annotations::default(),
            file: String::new(),
        }
    }

    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self::new(DeclKind::Class, qualified_name)
    }

    pub fn interface(qualified_name: impl Into<String>) -> Self {
        Self::new(DeclKind::Interface, qualified_name)
    }

    pub fn trait_decl(qualified_name: impl Into<String>) -> Self {
        Self::new(DeclKind::Trait, qualified_name)
    }

    pub fn extending(mut self, parent_ref: impl Into<String>) -> Self {
        self.parent_ref = Some(parent_ref.into());
        self
    }

    pub fn implementing<I, S>(mut self, interface_refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interface_refs
            .extend(interface_refs.into_iter().map(Into::into));
        self
    }

    pub fn using<I, S>(mut self, trait_refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trait_refs
            .extend(trait_refs.into_iter().map(Into::into));
        self
    }

    pub fn in_context(mut self, context: NamespaceContext) -> Self {
        self.context = context;
        self
    }

    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    pub fn with_members<I>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = Member>,
    {
        self.members.extend(members);
        self
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Member declared directly on this type, by name.
    pub fn own_member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// A standalone function, counted by the statistics pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub qualified_name: String,
    pub annotations: Annotations,
}

impl FunctionDecl {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            annotations: Annotations::default(),
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }
}

/// A global constant, counted by the statistics pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDecl {
    pub qualified_name: String,
    pub annotations: Annotations,
}

impl ConstantDecl {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            annotations: Annotations::default(),
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }
}

/// Everything one extractor worker produced for one source file.
///
/// Units are self-contained (each declaration carries its own context), so
/// extraction can run per file in any order with no shared state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceUnit {
    pub file: String,
    pub declarations: Vec<Declaration>,
    pub functions: Vec<FunctionDecl>,
    pub constants: Vec<ConstantDecl>,
}

impl SourceUnit {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn with_declarations<I>(mut self, declarations: I) -> Self
    where
        I: IntoIterator<Item = Declaration>,
    {
        self.declarations.extend(declarations);
        self
    }

    pub fn with_functions<I>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = FunctionDecl>,
    {
        self.functions.extend(functions);
        self
    }

    pub fn with_constants<I>(mut self, constants: I) -> Self
    where
        I: IntoIterator<Item = ConstantDecl>,
    {
        self.constants.extend(constants);
        self
    }
}
