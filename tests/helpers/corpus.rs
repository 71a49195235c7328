//! A small PHP project, extracted by hand.
//!
//! Building the graph is cheap, but sharing one resolved corpus keeps the
//! suite's fixtures consistent: every test sees the same shapes.
//!
//! ```text
//! Project\Identifiable                    (interface)
//! Project\Sortable : Identifiable         (interface)
//! Project\Support\Timestamps              (trait)
//! Project\Support\Serializes              (trait)
//! Project\Models\Record                   (abstract; implements Sortable,
//!                                          \JsonSerializable; use Timestamps)
//! Project\Models\User    : Record
//! Project\Models\Admin   : User
//! Project\Models\Guest   : User
//! Project\AppException   : RuntimeException   (platform parent, bare token)
//! Project\NotFound       : AppException
//! Project\Bridge         : Vendor\Lib\Connector (external parent)
//! LegacyHelper                             (global namespace)
//! + functions Project\format_bytes, Project\debug_dump (@internal)
//! + constants Project\VERSION, Project\BUILD_ID (@deprecated)
//! ```
//!
//! The corpus resolves without diagnostics.

use apidoc::model::{
    Annotations, ConstantDecl, Declaration, FunctionDecl, Member, Modifiers, NamespaceContext,
    SourceUnit, Visibility,
};
use apidoc::{Diagnostics, Hierarchy, HierarchyHost};
use once_cell::sync::Lazy;

static PROJECT: Lazy<Hierarchy> = Lazy::new(|| {
    let (hierarchy, diagnostics) = build_project();
    if !diagnostics.is_empty() {
        panic!("the shared corpus must resolve cleanly, got {diagnostics:?}");
    }
    hierarchy
});

/// The shared resolved corpus.
pub fn project() -> &'static Hierarchy {
    &PROJECT
}

/// Build the corpus from scratch, diagnostics included. Tests that mutate
/// expectations (toggles, determinism) use this instead of the shared copy.
pub fn build_project() -> (Hierarchy, Diagnostics) {
    let mut host = HierarchyHost::new();
    host.add_units(units());
    host.resolve()
}

/// The corpus as per-file extractor output.
pub fn units() -> Vec<SourceUnit> {
    let contracts = NamespaceContext::new("Project");
    let support = NamespaceContext::new("Project\\Support");
    let models = NamespaceContext::new("Project\\Models")
        .with_alias("Sortable", "Project\\Sortable")
        .with_alias("Timestamps", "Project\\Support\\Timestamps");
    let errors = NamespaceContext::new("Project");

    vec![
        SourceUnit::new("src/Contracts.php").with_declarations([
            Declaration::interface("Project\\Identifiable")
                .in_context(contracts.clone())
                .in_file("src/Contracts.php")
                .with_members([Member::method("getId")]),
            Declaration::interface("Project\\Sortable")
                .implementing(["Identifiable"])
                .in_context(contracts.clone())
                .in_file("src/Contracts.php")
                .with_members([Member::method("compareTo").with_parameters(["$other"])]),
        ]),
        SourceUnit::new("src/Support.php").with_declarations([
            Declaration::trait_decl("Project\\Support\\Timestamps")
                .in_context(support.clone())
                .in_file("src/Support.php")
                .with_members([
                    Member::method("touchedAt"),
                    Member::property("touched").with_visibility(Visibility::Protected),
                ]),
            Declaration::trait_decl("Project\\Support\\Serializes")
                .in_context(support)
                .in_file("src/Support.php")
                .with_members([Member::method("toArray")]),
        ]),
        SourceUnit::new("src/Models.php").with_declarations([
            Declaration::class("Project\\Models\\Record")
                .implementing(["Sortable", "\\JsonSerializable"])
                .using(["Timestamps"])
                .in_context(models.clone())
                .in_file("src/Models.php")
                .with_modifiers(Modifiers {
                    is_abstract: true,
                    is_final: false,
                })
                .with_members([
                    Member::method("__construct").with_parameters(["$attributes"]),
                    Member::method("getId"),
                    Member::method("compareTo").with_parameters(["$other"]),
                    Member::method("save").with_visibility(Visibility::Protected),
                    Member::property("attributes").with_visibility(Visibility::Private),
                    Member::constant("TABLE"),
                ]),
            Declaration::class("Project\\Models\\User")
                .extending("Record")
                .in_context(models.clone())
                .in_file("src/Models.php")
                .with_members([Member::method("getId"), Member::method("email")]),
            Declaration::class("Project\\Models\\Admin")
                .extending("User")
                .in_context(models.clone())
                .in_file("src/Models.php")
                .with_members([
                    Member::method("save").with_visibility(Visibility::Protected),
                ]),
            Declaration::class("Project\\Models\\Guest")
                .extending("User")
                .in_context(models)
                .in_file("src/Models.php"),
        ]),
        SourceUnit::new("src/Errors.php").with_declarations([
            Declaration::class("Project\\AppException")
                .extending("RuntimeException")
                .in_context(errors.clone())
                .in_file("src/Errors.php"),
            Declaration::class("Project\\NotFound")
                .extending("AppException")
                .in_context(errors.clone())
                .in_file("src/Errors.php"),
        ]),
        SourceUnit::new("src/Bridge.php").with_declarations([
            Declaration::class("Project\\Bridge")
                .extending("\\Vendor\\Lib\\Connector")
                .in_context(errors)
                .in_file("src/Bridge.php"),
        ]),
        SourceUnit::new("src/legacy.php")
            .with_declarations([Declaration::class("LegacyHelper").in_file("src/legacy.php")])
            .with_functions([
                FunctionDecl::new("Project\\format_bytes"),
                FunctionDecl::new("Project\\debug_dump").with_annotations(Annotations::internal()),
            ])
            .with_constants([
                ConstantDecl::new("Project\\VERSION"),
                ConstantDecl::new("Project\\BUILD_ID")
                    .with_annotations(Annotations::deprecated()),
            ]),
    ]
}
