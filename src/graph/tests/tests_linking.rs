#![allow(clippy::unwrap_used)]

use super::{id_of, resolve};
use crate::base::Diagnostic;
use crate::model::{Declaration, NamespaceContext};

#[test]
fn test_internal_parent_links_both_directions() {
    let ctx = NamespaceContext::new("Project");
    let (hierarchy, diagnostics) = resolve([
        Declaration::class("Project\\ParentClass").in_context(ctx.clone()),
        Declaration::class("Project\\ChildClass")
            .extending("ParentClass")
            .in_context(ctx),
    ]);

    assert!(diagnostics.is_empty());
    let parent = id_of(&hierarchy, "Project\\ParentClass");
    let child = id_of(&hierarchy, "Project\\ChildClass");

    assert_eq!(hierarchy[child].parent, Some(parent));
    assert_eq!(hierarchy[child].unresolved_parent, None);
    assert_eq!(hierarchy[parent].children, [child]);
}

#[test]
fn test_declaration_order_does_not_matter() {
    // Child registered before its parent: linking runs against the complete
    // registry, so the forward reference still connects.
    let (hierarchy, diagnostics) = resolve([
        Declaration::class("Project\\Child").extending("Project\\Base"),
        Declaration::class("Project\\Base"),
    ]);

    assert!(diagnostics.is_empty());
    let base = id_of(&hierarchy, "Project\\Base");
    let child = id_of(&hierarchy, "Project\\Child");
    assert_eq!(hierarchy[child].parent, Some(base));
}

#[test]
fn test_platform_parent_becomes_display_name() {
    let (hierarchy, diagnostics) =
        resolve([Declaration::class("Project\\AppException").extending("\\Exception")]);

    assert!(diagnostics.is_empty());
    let node = hierarchy.node("Project\\AppException").unwrap();
    assert_eq!(node.parent, None);
    assert_eq!(node.unresolved_parent.as_deref(), Some("Exception"));
}

#[test]
fn test_external_parent_becomes_display_name() {
    let (hierarchy, diagnostics) =
        resolve([Declaration::class("Project\\Repo").extending("Vendor\\LibBase")]);

    assert!(diagnostics.is_empty());
    let node = hierarchy.node("Project\\Repo").unwrap();
    assert_eq!(node.parent, None);
    assert_eq!(node.unresolved_parent.as_deref(), Some("Vendor\\LibBase"));
}

#[test]
fn test_extending_an_interface_is_rejected() {
    let (hierarchy, diagnostics) = resolve([
        Declaration::interface("Project\\Markable"),
        Declaration::class("Project\\Widget").extending("Project\\Markable"),
    ]);

    let widget = hierarchy.node("Project\\Widget").unwrap();
    assert_eq!(widget.parent, None);
    assert_eq!(widget.unresolved_parent.as_deref(), Some("Project\\Markable"));

    let markable = hierarchy.node("Project\\Markable").unwrap();
    assert!(markable.children.is_empty());

    assert_eq!(diagnostics.len(), 1);
    match diagnostics.iter().next().unwrap() {
        Diagnostic::InvalidParentKind {
            name,
            target,
            target_kind,
        } => {
            assert_eq!(&**name, "Project\\Widget");
            assert_eq!(&**target, "Project\\Markable");
            assert_eq!(*target_kind, "interface");
        }
        other => panic!("expected an invalid-parent diagnostic, got {other:?}"),
    }
}

#[test]
fn test_parent_token_on_interface_is_display_only() {
    // Interfaces extend through interface_refs; a stray parent token is kept
    // for display and never links.
    let (hierarchy, diagnostics) = resolve([
        Declaration::class("Project\\Base"),
        Declaration::interface("Project\\Odd").extending("Project\\Base"),
    ]);

    assert!(diagnostics.is_empty());
    let odd = hierarchy.node("Project\\Odd").unwrap();
    assert_eq!(odd.parent, None);
    assert_eq!(odd.unresolved_parent.as_deref(), Some("Project\\Base"));
    assert!(hierarchy.node("Project\\Base").unwrap().children.is_empty());
}

#[test]
fn test_interface_and_trait_reverse_indexes() {
    let (hierarchy, diagnostics) = resolve([
        Declaration::interface("Project\\Renderable"),
        Declaration::trait_decl("Project\\LogTrait"),
        Declaration::class("Project\\Widget")
            .implementing(["Project\\Renderable"])
            .using(["Project\\LogTrait"]),
    ]);

    assert!(diagnostics.is_empty());
    let widget = id_of(&hierarchy, "Project\\Widget");
    let renderable = hierarchy.node("Project\\Renderable").unwrap();
    let log_trait = hierarchy.node("Project\\LogTrait").unwrap();

    assert_eq!(renderable.direct_implementers, [widget]);
    assert_eq!(log_trait.direct_users, [widget]);
}

#[test]
fn test_repeated_clause_targets_collapse() {
    // `implements I, I` and aliases resolving to the same interface produce
    // one reference and one reverse-index entry.
    let ctx = NamespaceContext::new("Project").with_alias("R", "Project\\Renderable");
    let (hierarchy, diagnostics) = resolve([
        Declaration::interface("Project\\Renderable"),
        Declaration::class("Project\\Widget")
            .implementing(["Renderable", "R", "\\Project\\Renderable"])
            .in_context(ctx),
    ]);

    assert!(diagnostics.is_empty());
    let widget = hierarchy.node("Project\\Widget").unwrap();
    assert_eq!(widget.interfaces.len(), 1);
    assert_eq!(&*widget.interfaces[0].name, "Project\\Renderable");

    let widget_id = id_of(&hierarchy, "Project\\Widget");
    let renderable = hierarchy.node("Project\\Renderable").unwrap();
    assert_eq!(renderable.direct_implementers, [widget_id]);
}

#[test]
fn test_mixed_clause_classifications() {
    let (hierarchy, diagnostics) = resolve([
        Declaration::interface("Project\\Own"),
        Declaration::class("Project\\Widget").implementing([
            "Project\\Own",
            "\\Countable",
            "Vendor\\Contract",
        ]),
    ]);

    assert!(diagnostics.is_empty());
    let widget = hierarchy.node("Project\\Widget").unwrap();
    let names: Vec<&str> = widget.interfaces.iter().map(|r| &*r.name).collect();
    assert_eq!(names, ["Project\\Own", "Countable", "Vendor\\Contract"]);
    assert!(widget.interfaces[0].is_internal());
    assert!(widget.interfaces[1].is_platform());
    assert!(widget.interfaces[2].is_external());
}
