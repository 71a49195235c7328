//! Raw declaration model handed over by the extractor.
//!
//! Everything here is immutable input data. The resolver and graph builder
//! attach derived edges in their own arena, never into these records, so a
//! declaration can be shared freely once extraction produced it.

mod declaration;
mod member;
mod namespace;

pub use declaration::{
    Annotations, ConstantDecl, DeclKind, Declaration, FunctionDecl, Modifiers, SourceUnit,
};
pub use member::{Member, MemberKind, Visibility};
pub use namespace::NamespaceContext;
