
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

/// Shared fixture:
///
/// ```text
/// interface Identifiable
/// interface Collection extends Identifiable
/// trait SerializesSelf
/// trait LogsCalls { use SerializesSelf; }
/// class Model implements Collection
/// class User extends Model
/// class Zeta extends User            (registered before Admin)
/// class Admin extends User { use LogsCalls; }
/// class Guest extends User
/// class External extends Vendor\LibBase
/// class ExternalChild extends External
/// ```
fn corpus() -> Hierarchy {
    let (hierarchy, diagnostics) = resolve([
        Declaration::interface("Project\\Identifiable"),
        Declaration::interface("Project\\Collection").implementing(["Project\\Identifiable"]),
        Declaration::trait_decl("Project\\SerializesSelf"),
        Declaration::trait_decl("Project\\LogsCalls").using(["Project\\SerializesSelf"]),
        Declaration::class("Project\\Model").implementing(["Project\\Collection"]),
        Declaration::class("Project\\User").extending("Project\\Model"),
        Declaration::class("Project\\Zeta").extending("Project\\User"),
        Declaration::class("Project\\Admin")
            .extending("Project\\User")
            .using(["Project\\LogsCalls"]),
        Declaration::class("Project\\Guest").extending("Project\\User"),
        Declaration::class("Project\\External").extending("Vendor\\LibBase"),
        Declaration::class("Project\\ExternalChild").extending("Project\\External"),
    ]);
    if !diagnostics.is_empty() {
        panic!("corpus fixture must resolve cleanly, got {diagnostics:?}");
    }
    hierarchy
}

fn names_of(hierarchy: &Hierarchy, ids: &[DeclId]) -> Vec<String> {
    ids.iter()
        .map(|&id| hierarchy.name_of(id).to_string())
        .collect()
}
