//! Class-like members: methods, properties, constants.

use super::declaration::Annotations;

/// Member visibility as declared in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn display(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }

    /// True if `self` exposes strictly less than `base`.
    pub fn narrower_than(self, base: Visibility) -> bool {
        self.rank() < base.rank()
    }

    fn rank(self) -> u8 {
        match self {
            Visibility::Private => 0,
            Visibility::Protected => 1,
            Visibility::Public => 2,
        }
    }
}

/// What kind of member a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Method,
    Property,
    Constant,
}

impl MemberKind {
    pub fn display(self) -> &'static str {
        match self {
            MemberKind::Method => "method",
            MemberKind::Property => "property",
            MemberKind::Constant => "constant",
        }
    }
}

/// One member of a class-like declaration, as written in source.
///
/// Members shadow ancestors by name; the parameter list only decides whether
/// the override is consistent, never whether it shadows.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    pub visibility: Visibility,
    /// Parameter list as written, empty for properties and constants.
    pub parameters: Vec<String>,
    pub annotations: Annotations,
}

impl Member {
    pub fn method(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Method)
    }

    pub fn property(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Property)
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Constant)
    }

    fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            visibility: Visibility::Public,
            parameters: Vec::new(),
            annotations: Annotations::default(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Same member kind and parameter arity as `base`.
    pub fn signature_matches(&self, base: &Member) -> bool {
        self.kind == base.kind && self.parameters.len() == base.parameters.len()
    }
}
