//! Concrete end-to-end scenarios covering the checker's public surface.

use reslang_ast::builder::{
    assign, binary, empty_resource, field, field_access, field_constraint, field_with_constraint, float_lit, hook, ident,
    int_lit, loc, logical, namespaced_call, null_coalesce, relationship, resource, self_expr, string_lit, unary,
    validation,
};
use reslang_ast::{Field, HookTiming, LifecycleEvent, Program, RelationshipKind, TypeNode};
use reslang_checker::check_program;
use reslang_common::{CheckerOptions, DiagnosticCode};

fn string_field(name: &str, nullable: bool) -> Field {
    field(name, TypeNode::primitive("string", nullable, loc(1, 1)), nullable)
}

fn text_field(name: &str, nullable: bool) -> Field {
    field(name, TypeNode::primitive("text", nullable, loc(1, 1)), nullable)
}

#[test]
fn nullability_violation_is_reported_with_exact_types() {
    let post = resource(
        "Post",
        vec![string_field("title", false), text_field("bio", true)],
        vec![hook(
            HookTiming::Before,
            LifecycleEvent::Create,
            vec![assign(field_access(self_expr(), "title"), field_access(self_expr(), "bio"))],
        )],
        vec![],
        vec![],
        vec![],
        vec![],
    );
    let program = Program { resources: vec![post] };
    let diagnostics = check_program(&program, &CheckerOptions::default());

    assert_eq!(diagnostics.errors().count(), 1);
    let diag = diagnostics.errors().next().unwrap();
    assert_eq!(diag.code, DiagnosticCode::Typ101);
    assert_eq!(diag.expected.as_deref(), Some("string!"));
    assert_eq!(diag.actual.as_deref(), Some("text?"));
}

#[test]
fn unwrap_rescues_nullability() {
    let post = resource(
        "Post",
        vec![string_field("title", false), text_field("bio", true)],
        vec![hook(
            HookTiming::Before,
            LifecycleEvent::Create,
            vec![assign(field_access(self_expr(), "title"), unary("!", field_access(self_expr(), "bio")))],
        )],
        vec![],
        vec![],
        vec![],
        vec![],
    );
    let program = Program { resources: vec![post] };
    let diagnostics = check_program(&program, &CheckerOptions::default());
    assert!(!diagnostics.has_errors());
}

#[test]
fn null_coalesce_rescues_nullability() {
    let post = resource(
        "Post",
        vec![string_field("title", false), text_field("bio", true)],
        vec![hook(
            HookTiming::Before,
            LifecycleEvent::Create,
            vec![assign(
                field_access(self_expr(), "title"),
                null_coalesce(field_access(self_expr(), "bio"), string_lit("default")),
            )],
        )],
        vec![],
        vec![],
        vec![],
        vec![],
    );
    let program = Program { resources: vec![post] };
    let diagnostics = check_program(&program, &CheckerOptions::default());
    assert!(!diagnostics.has_errors());
}

#[test]
fn unsupported_constraint_on_bool_field_is_flagged() {
    let bool_field = field("active", TypeNode::primitive("bool", false, loc(1, 1)), false);
    let constrained = field_with_constraint(bool_field, field_constraint("min", vec![int_lit(1)]));
    let post = resource("Post", vec![constrained], vec![], vec![], vec![], vec![], vec![]);
    let program = Program { resources: vec![post] };
    let diagnostics = check_program(&program, &CheckerOptions::default());

    assert_eq!(diagnostics.errors().count(), 1);
    assert_eq!(diagnostics.errors().next().unwrap().code, DiagnosticCode::Typ400);
}

#[test]
fn min_max_and_pattern_reject_markdown_fields() {
    let markdown_field = field("body", TypeNode::primitive("markdown", false, loc(1, 1)), false);
    let constrained = field_with_constraint(markdown_field, field_constraint("max", vec![int_lit(500)]));
    let post = resource("Post", vec![constrained], vec![], vec![], vec![], vec![], vec![]);
    let program = Program { resources: vec![post] };
    let diagnostics = check_program(&program, &CheckerOptions::default());

    assert_eq!(diagnostics.errors().count(), 1);
    assert_eq!(diagnostics.errors().next().unwrap().code, DiagnosticCode::Typ400);
}

#[test]
fn stdlib_call_shape_succeeds() {
    let good_hook = hook(
        HookTiming::Before,
        LifecycleEvent::Save,
        vec![assign(
            field_access(self_expr(), "slug"),
            namespaced_call("String", "slugify", vec![field_access(self_expr(), "title")]),
        )],
    );
    let post = resource(
        "Post",
        vec![string_field("title", false), string_field("slug", false)],
        vec![good_hook],
        vec![],
        vec![],
        vec![],
        vec![],
    );
    let program = Program { resources: vec![post] };
    let diagnostics = check_program(&program, &CheckerOptions::default());
    assert!(!diagnostics.has_errors());
}

#[test]
fn stdlib_call_to_an_unknown_function_is_flagged() {
    let bad_hook = hook(
        HookTiming::Before,
        LifecycleEvent::Save,
        vec![assign(
            field_access(self_expr(), "slug"),
            namespaced_call("String", "nonexistent", vec![field_access(self_expr(), "title")]),
        )],
    );
    let post = resource(
        "Post",
        vec![string_field("title", false), string_field("slug", false)],
        vec![bad_hook],
        vec![],
        vec![],
        vec![],
        vec![],
    );
    let program = Program { resources: vec![post] };
    let diagnostics = check_program(&program, &CheckerOptions::default());
    assert_eq!(diagnostics.errors().count(), 1);
    assert_eq!(diagnostics.errors().next().unwrap().code, DiagnosticCode::Typ300);
}

#[test]
fn relationship_to_missing_resource_and_invalid_nullify_both_surface() {
    let rel = relationship("author", "User", RelationshipKind::BelongsTo, "author_id", "nullify", false);
    let post = resource("Post", vec![], vec![], vec![], vec![], vec![], vec![rel]);
    let program = Program { resources: vec![post] };
    let diagnostics = check_program(&program, &CheckerOptions::default());

    assert_eq!(diagnostics.errors().count(), 2);
    let codes: Vec<_> = diagnostics.errors().map(|d| d.code).collect();
    assert!(codes.contains(&DiagnosticCode::Typ200));
    assert!(codes.contains(&DiagnosticCode::Typ400));
}

#[test]
fn relationship_with_a_nullable_target_and_nullify_is_accepted() {
    let rel = relationship("author", "User", RelationshipKind::BelongsTo, "author_id", "nullify", true);
    let user = empty_resource("User");
    let post = resource("Post", vec![], vec![], vec![], vec![], vec![], vec![rel]);
    let program = Program { resources: vec![user, post] };
    let diagnostics = check_program(&program, &CheckerOptions::default());
    assert!(!diagnostics.has_errors());
}

#[test]
fn complex_boolean_condition_validation_is_accepted() {
    let views = field("views", TypeNode::primitive("int", false, loc(1, 1)), false);
    let rating = field("rating", TypeNode::primitive("float", false, loc(1, 1)), false);
    let cond = logical(
        "&&",
        binary(">", field_access(self_expr(), "views"), int_lit(100)),
        binary(">=", field_access(self_expr(), "rating"), float_lit(4.5)),
    );
    let post = resource(
        "Post",
        vec![views, rating],
        vec![],
        vec![validation("popular", cond, "must be popular")],
        vec![],
        vec![],
        vec![],
    );
    let program = Program { resources: vec![post] };
    let diagnostics = check_program(&program, &CheckerOptions::default());
    assert!(!diagnostics.has_errors());
}

#[test]
fn duplicate_resource_names_let_the_last_one_win() {
    let first = empty_resource("Post");
    let second = resource("Post", vec![string_field("title", false)], vec![], vec![], vec![], vec![], vec![]);
    let program = Program { resources: vec![first, second] };
    let diagnostics = check_program(&program, &CheckerOptions::default());
    assert!(!diagnostics.has_errors());
}

#[test]
fn bare_identifier_reference_is_undefined() {
    let post = resource(
        "Post",
        vec![string_field("title", false)],
        vec![hook(
            HookTiming::Before,
            LifecycleEvent::Create,
            vec![assign(field_access(self_expr(), "title"), ident("whoops"))],
        )],
        vec![],
        vec![],
        vec![],
        vec![],
    );
    let program = Program { resources: vec![post] };
    let diagnostics = check_program(&program, &CheckerOptions::default());
    assert_eq!(diagnostics.errors().count(), 1);
    assert_eq!(diagnostics.errors().next().unwrap().code, DiagnosticCode::Typ201);
}

#[test]
fn determinism_across_repeated_invocations() {
    let post = resource(
        "Post",
        vec![string_field("title", false), text_field("bio", true)],
        vec![hook(
            HookTiming::Before,
            LifecycleEvent::Create,
            vec![assign(field_access(self_expr(), "title"), field_access(self_expr(), "bio"))],
        )],
        vec![],
        vec![],
        vec![],
        vec![],
    );
    let program = Program { resources: vec![post] };

    let first = check_program(&program, &CheckerOptions::default());
    let second = check_program(&program, &CheckerOptions::default());
    assert_eq!(first.as_slice(), second.as_slice());
}
