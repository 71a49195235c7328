mod tests_linking;

use crate::base::Diagnostics;
use crate::graph::{DeclId, Hierarchy, HierarchyBuilder};
use crate::model::Declaration;

/// Run the full build over loose declarations.
fn resolve<I>(declarations: I) -> (Hierarchy, Diagnostics)
where
    I: IntoIterator<Item = Declaration>,
{
    let mut builder = HierarchyBuilder::new();
    for decl in declarations {
        builder.add_declaration(decl);
    }
    builder.resolve()
}

#[track_caller]
fn id_of(hierarchy: &Hierarchy, qualified_name: &str) -> DeclId {
    match hierarchy.lookup(qualified_name) {
        Some(id) => id,
        None => panic!("fixture is missing {qualified_name}"),
    }
}
