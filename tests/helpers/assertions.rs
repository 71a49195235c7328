//! Name-based assertion helpers over a resolved hierarchy.

use apidoc::{DeclId, Hierarchy};

/// Look up a declaration the fixture is expected to contain.
#[track_caller]
pub fn id(hierarchy: &Hierarchy, qualified_name: &str) -> DeclId {
    hierarchy
        .lookup(qualified_name)
        .unwrap_or_else(|| panic!("expected `{qualified_name}` to be in the hierarchy"))
}

/// Qualified names for a batch of ids, in the given order.
pub fn names(hierarchy: &Hierarchy, ids: &[DeclId]) -> Vec<String> {
    ids.iter()
        .map(|&id| hierarchy.name_of(id).to_string())
        .collect()
}

/// Assert a query result holds exactly these names, in this order.
#[track_caller]
pub fn assert_names(hierarchy: &Hierarchy, ids: &[DeclId], expected: &[&str]) {
    let actual = names(hierarchy, ids);
    assert_eq!(
        actual, expected,
        "expected names {expected:?}, got {actual:?}"
    );
}
