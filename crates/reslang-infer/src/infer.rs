//! Expression type inference: a structural walk producing a `Type` for
//! every expression node and accumulating diagnostics for ill-typed
//! sub-expressions.

use reslang_ast::{CallArg, Expr, ExprKind, Literal};
use reslang_common::{Diagnostic, DiagnosticCode, Severity};
use reslang_types::{from_type_node, Type};

use crate::context::{InferCtx, ResourceLookup};

const ARITHMETIC_OPS: [&str; 5] = ["+", "-", "*", "/", "%"];
const COMPARISON_OPS: [&str; 6] = ["==", "!=", "<", ">", "<=", ">="];
const LOGICAL_OPS: [&str; 4] = ["&&", "||", "and", "or"];

/// Infer the type of `expr`, accumulating diagnostics as defined by the
/// per-variant rules. Always returns a `Type` — `unknown!` when no
/// meaningful type can be produced, so enclosing expressions can continue.
pub fn infer<L: ResourceLookup>(expr: &Expr, ctx: &mut InferCtx<'_, L>) -> Type {
    match &expr.kind {
        ExprKind::Literal(lit) => infer_literal(lit),
        ExprKind::Identifier(name) => infer_identifier(name, expr, ctx),
        ExprKind::SelfExpr => infer_self(expr, ctx),
        ExprKind::FieldAccess { object, field } => infer_field_access(object, field, expr, ctx, false),
        ExprKind::SafeNavigation { object, field } => infer_field_access(object, field, expr, ctx, true),
        ExprKind::Call { namespace, function, args } => infer_call(namespace.as_deref(), function, args, expr, ctx),
        ExprKind::Binary { op, left, right } => infer_binary(op, left, right, expr, ctx),
        ExprKind::Unary { op, operand } => infer_unary(op, operand, expr, ctx),
        ExprKind::Logical { op: _, left, right } => {
            infer(left, ctx);
            infer(right, ctx);
            Type::bool_()
        }
        ExprKind::NullCoalesce { left, right } => infer_null_coalesce(left, right, expr, ctx),
        ExprKind::ArrayLiteral(elements) => infer_array_literal(elements, expr, ctx),
        ExprKind::HashLiteral(pairs) => infer_hash_literal(pairs, expr, ctx),
        ExprKind::Index { object, index } => infer_index(object, index, expr, ctx),
        ExprKind::Paren(inner) => infer(inner, ctx),
        ExprKind::InterpolatedString(parts) => {
            for part in parts {
                if let reslang_ast::InterpolationPart::Expr(inner) = part {
                    infer(inner, ctx);
                }
            }
            Type::string()
        }
        ExprKind::Range { start, end, .. } => {
            infer(start, ctx);
            infer(end, ctx);
            Type::unknown()
        }
        // Type is a closed sum with no function-value variant; a lambda's
        // body is checked when the stdlib call that receives it is checked,
        // not here.
        ExprKind::Lambda { .. } => Type::unknown(),
    }
}

fn infer_literal(lit: &Literal) -> Type {
    match lit {
        Literal::Nil => Type::nil_sentinel(),
        Literal::String(_) => Type::string(),
        Literal::Int(_) => Type::int(),
        Literal::Float(_) => Type::float(),
        Literal::Bool(_) => Type::bool_(),
    }
}

fn infer_identifier<L: ResourceLookup>(name: &str, expr: &Expr, ctx: &mut InferCtx<'_, L>) -> Type {
    if let Some(ty) = ctx.scopes.lookup(name) {
        return ty.clone();
    }
    if ctx.lookup.resource_exists(name) {
        return Type::resource(name.to_string(), false);
    }
    ctx.diagnostics.push(
        Diagnostic::new(DiagnosticCode::Typ201, format!("undefined variable `{name}`"), expr.location)
            .with_suggestion(format!("bind `{name}` with `let` before using it, or check for a typo")),
    );
    Type::unknown()
}

fn infer_self<L: ResourceLookup>(expr: &Expr, ctx: &mut InferCtx<'_, L>) -> Type {
    match ctx.self_type() {
        Some(ty) => ty,
        None => {
            ctx.diagnostics.push(Diagnostic::new(
                DiagnosticCode::Typ201,
                "`self` used outside of a resource context",
                expr.location,
            ));
            Type::unknown()
        }
    }
}

fn infer_field_access<L: ResourceLookup>(
    object: &Expr,
    field: &str,
    expr: &Expr,
    ctx: &mut InferCtx<'_, L>,
    safe: bool,
) -> Type {
    let object_ty = infer(object, ctx);

    let resolved = match &object_ty {
        Type::Resource { name, .. } => match ctx.lookup.find_field(name, field) {
            Some(field_node) => from_type_node(&field_node.type_node, field_node.nullable).ok(),
            None => {
                ctx.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCode::Typ201,
                        format!("resource `{name}` has no field `{field}`"),
                        expr.location,
                    )
                    .with_suggestion(format!("check the field name on `{name}`")),
                );
                None
            }
        },
        Type::Struct { .. } => match object_ty.get_field(field) {
            Some(ty) => Some(ty),
            None => {
                ctx.diagnostics.push(Diagnostic::new(
                    DiagnosticCode::Typ201,
                    format!("struct has no field `{field}`"),
                    expr.location,
                ));
                None
            }
        },
        _ => None,
    };

    let Some(resolved) = resolved else {
        return Type::unknown();
    };

    if safe {
        if ctx.options.warn_unnecessary_unwraps && !object_ty.is_nullable() {
            emit_unnecessary_narrowing(ctx, expr, "unnecessary safe navigation: the accessed object is already required");
        }
        resolved.to_nullable()
    } else {
        resolved
    }
}

fn infer_call<L: ResourceLookup>(
    namespace: Option<&str>,
    function: &str,
    args: &[CallArg],
    expr: &Expr,
    ctx: &mut InferCtx<'_, L>,
) -> Type {
    let Some(namespace) = namespace else {
        for arg in args {
            infer(&arg.expr, ctx);
        }
        ctx.diagnostics.push(
            Diagnostic::new(DiagnosticCode::Typ300, format!("undefined function `{function}`"), expr.location)
                .with_suggestion("use a namespaced stdlib function (e.g. `String.upcase`) or define a custom function"),
        );
        return Type::unknown();
    };

    let Some(signature) = reslang_stdlib::lookup(namespace, function) else {
        for arg in args {
            infer(&arg.expr, ctx);
        }
        ctx.diagnostics.push(Diagnostic::new(
            DiagnosticCode::Typ300,
            format!("undefined function `{namespace}.{function}`"),
            expr.location,
        ));
        return Type::unknown();
    };

    let required_count = signature.required_count();
    let total_parameters = signature.total_parameters();
    let arg_count = args.len();

    if arg_count < required_count || arg_count > total_parameters {
        ctx.diagnostics.push(
            Diagnostic::new(
                DiagnosticCode::Typ301,
                format!(
                    "`{}` expects {} but got {arg_count}",
                    signature.full_name(),
                    arity_description(required_count, total_parameters)
                ),
                expr.location,
            )
            .with_expected(arity_description(required_count, total_parameters))
            .with_actual(arg_count.to_string()),
        );
    }

    for (index, arg) in args.iter().enumerate().take(arg_count.min(total_parameters)) {
        let arg_ty = infer(&arg.expr, ctx);
        let param = &signature.params[index];
        if !param.ty.is_assignable_from(&arg_ty) {
            ctx.diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::Typ302,
                    format!("argument {} (`{}`) to `{}` has the wrong type", index + 1, param.name, signature.full_name()),
                    arg.expr.location,
                )
                .with_expected(param.ty.string_form())
                .with_actual(arg_ty.string_form()),
            );
        }
    }
    // Any arguments beyond total_parameters are still visited for diagnostics.
    for arg in args.iter().skip(total_parameters) {
        infer(&arg.expr, ctx);
    }

    signature.return_type.clone()
}

fn arity_description(required: usize, total: usize) -> String {
    if required == total {
        format!("{required} argument(s)")
    } else {
        format!("between {required} and {total} argument(s)")
    }
}

fn infer_binary<L: ResourceLookup>(op: &str, left: &Expr, right: &Expr, expr: &Expr, ctx: &mut InferCtx<'_, L>) -> Type {
    let left_ty = infer(left, ctx);
    let right_ty = infer(right, ctx);

    if COMPARISON_OPS.contains(&op) {
        return Type::bool_();
    }

    if op == "**" {
        if is_numeric(&left_ty) && is_numeric(&right_ty) {
            return Type::float();
        }
        emit_invalid_binary(ctx, expr, op, &left_ty, &right_ty);
        return Type::unknown();
    }

    if ARITHMETIC_OPS.contains(&op) {
        if !is_numeric(&left_ty) || !is_numeric(&right_ty) {
            emit_invalid_binary(ctx, expr, op, &left_ty, &right_ty);
            return Type::unknown();
        }
        return if is_float(&left_ty) || is_float(&right_ty) { Type::float() } else { Type::int() };
    }

    if LOGICAL_OPS.contains(&op) {
        return Type::bool_();
    }

    ctx.diagnostics.push(Diagnostic::new(
        DiagnosticCode::Typ500,
        format!("invalid binary operator `{op}`"),
        expr.location,
    ));
    Type::unknown()
}

fn emit_invalid_binary<L: ResourceLookup>(ctx: &mut InferCtx<'_, L>, expr: &Expr, op: &str, left: &Type, right: &Type) {
    ctx.diagnostics.push(
        Diagnostic::new(
            DiagnosticCode::Typ500,
            format!("operator `{op}` requires numeric operands"),
            expr.location,
        )
        .with_expected("int! or float!")
        .with_actual(format!("{} and {}", left.string_form(), right.string_form())),
    );
}

fn is_numeric(ty: &Type) -> bool {
    matches!(ty, Type::Primitive { name, .. } if reslang_types::is_numeric_name(name))
}

fn is_float(ty: &Type) -> bool {
    matches!(ty, Type::Primitive { name, .. } if name == "float")
}

fn infer_unary<L: ResourceLookup>(op: &str, operand: &Expr, expr: &Expr, ctx: &mut InferCtx<'_, L>) -> Type {
    let operand_ty = infer(operand, ctx);

    match op {
        "!" => {
            if ctx.options.warn_unnecessary_unwraps && !operand_ty.is_nullable() {
                emit_unnecessary_narrowing(ctx, expr, "unnecessary unwrap: the operand is already required");
            }
            operand_ty.to_required()
        }
        "-" => {
            if is_numeric(&operand_ty) {
                operand_ty
            } else {
                ctx.diagnostics.push(
                    Diagnostic::new(DiagnosticCode::Typ501, "unary `-` requires a numeric operand", expr.location)
                        .with_expected("int! or float!")
                        .with_actual(operand_ty.string_form()),
                );
                Type::unknown()
            }
        }
        "not" => Type::bool_(),
        other => {
            ctx.diagnostics.push(Diagnostic::new(
                DiagnosticCode::Typ501,
                format!("invalid unary operator `{other}`"),
                expr.location,
            ));
            Type::unknown()
        }
    }
}

fn infer_null_coalesce<L: ResourceLookup>(left: &Expr, right: &Expr, expr: &Expr, ctx: &mut InferCtx<'_, L>) -> Type {
    let left_ty = infer(left, ctx);
    let _right_ty = infer(right, ctx);

    if ctx.options.warn_unnecessary_unwraps && !left_ty.is_nullable() {
        emit_unnecessary_narrowing(ctx, expr, "unnecessary coalesce: the left-hand side is already required");
    }

    left_ty.to_required()
}

fn infer_array_literal<L: ResourceLookup>(elements: &[Expr], expr: &Expr, ctx: &mut InferCtx<'_, L>) -> Type {
    let Some((first, rest)) = elements.split_first() else {
        return Type::array(Type::any(), false);
    };

    let element_ty = infer(first, ctx);
    for element in rest {
        let this_ty = infer(element, ctx);
        if !element_ty.is_assignable_from(&this_ty) {
            ctx.diagnostics.push(
                Diagnostic::new(DiagnosticCode::Typ102, "array literal elements have incompatible types", element.location)
                    .with_expected(element_ty.string_form())
                    .with_actual(this_ty.string_form()),
            );
        }
    }
    let _ = expr;
    Type::array(element_ty, false)
}

fn infer_hash_literal<L: ResourceLookup>(pairs: &[(Expr, Expr)], expr: &Expr, ctx: &mut InferCtx<'_, L>) -> Type {
    let Some(((first_key, first_value), rest)) = pairs.split_first() else {
        return Type::hash(Type::string(), Type::any(), false);
    };

    let key_ty = infer(first_key, ctx);
    let value_ty = infer(first_value, ctx);

    for (key, value) in rest {
        let this_key = infer(key, ctx);
        if !key_ty.is_assignable_from(&this_key) {
            ctx.diagnostics.push(
                Diagnostic::new(DiagnosticCode::Typ102, "hash literal keys have incompatible types", key.location)
                    .with_expected(key_ty.string_form())
                    .with_actual(this_key.string_form()),
            );
        }
        let this_value = infer(value, ctx);
        if !value_ty.is_assignable_from(&this_value) {
            ctx.diagnostics.push(
                Diagnostic::new(DiagnosticCode::Typ102, "hash literal values have incompatible types", value.location)
                    .with_expected(value_ty.string_form())
                    .with_actual(this_value.string_form()),
            );
        }
    }
    let _ = expr;
    Type::hash(key_ty, value_ty, false)
}

fn infer_index<L: ResourceLookup>(object: &Expr, index: &Expr, expr: &Expr, ctx: &mut InferCtx<'_, L>) -> Type {
    let object_ty = infer(object, ctx);
    infer(index, ctx);

    match &object_ty {
        Type::Array { element, .. } => element.to_nullable(),
        Type::Hash { value, .. } => value.to_nullable(),
        _ => {
            ctx.diagnostics.push(
                Diagnostic::new(DiagnosticCode::Typ502, "cannot index a value that is not an array or hash", expr.location)
                    .with_actual(object_ty.string_form()),
            );
            Type::unknown()
        }
    }
}

fn emit_unnecessary_narrowing<L: ResourceLookup>(ctx: &mut InferCtx<'_, L>, expr: &Expr, message: &str) {
    let severity = if ctx.options.warnings_as_errors { Severity::Error } else { Severity::Warning };
    ctx.diagnostics.push(Diagnostic::new(DiagnosticCode::Typ103, message, expr.location).with_severity(severity));
}

#[cfg(test)]
mod tests {
    use reslang_ast::builder::{
        bare_call, field, field_access, ident, int_lit, loc, namespaced_call, null_coalesce, safe_nav, self_expr,
        string_lit, unary,
    };
    use reslang_ast::{Expr, ExprKind, Field, TypeNode};
    use reslang_common::{CheckerOptions, DiagnosticCode, ErrorList};

    use super::*;

    struct FakeLookup {
        resources: Vec<(String, Vec<Field>)>,
    }

    impl FakeLookup {
        fn new() -> Self {
            FakeLookup { resources: Vec::new() }
        }

        fn with_resource(mut self, name: &str, fields: Vec<Field>) -> Self {
            self.resources.push((name.to_string(), fields));
            self
        }
    }

    impl ResourceLookup for FakeLookup {
        fn resource_exists(&self, name: &str) -> bool {
            self.resources.iter().any(|(n, _)| n == name)
        }

        fn find_field<'a>(&'a self, resource_name: &str, field_name: &str) -> Option<&'a Field> {
            self.resources
                .iter()
                .find(|(n, _)| n == resource_name)
                .and_then(|(_, fields)| fields.iter().find(|f| f.name == field_name))
        }
    }

    fn infer_with(lookup: &FakeLookup, options: &CheckerOptions, expr: &Expr) -> (Type, ErrorList) {
        let mut diagnostics = ErrorList::new();
        let ty = {
            let mut ctx = InferCtx::new(&mut diagnostics, lookup, options);
            infer(expr, &mut ctx)
        };
        (ty, diagnostics)
    }

    fn infer_in_resource(lookup: &FakeLookup, options: &CheckerOptions, resource: &str, expr: &Expr) -> (Type, ErrorList) {
        let mut diagnostics = ErrorList::new();
        let ty = {
            let mut ctx = InferCtx::with_resource(&mut diagnostics, lookup, options, resource);
            infer(expr, &mut ctx)
        };
        (ty, diagnostics)
    }

    #[test]
    fn literal_ints_and_strings_infer_directly() {
        let lookup = FakeLookup::new();
        let options = CheckerOptions::default();
        let (ty, diagnostics) = infer_with(&lookup, &options, &int_lit(3));
        assert_eq!(ty, Type::int());
        assert!(diagnostics.is_empty());

        let (ty, _) = infer_with(&lookup, &options, &string_lit("hi"));
        assert_eq!(ty, Type::string());
    }

    #[test]
    fn self_outside_a_resource_is_undefined() {
        let lookup = FakeLookup::new();
        let options = CheckerOptions::default();
        let (ty, diagnostics) = infer_with(&lookup, &options, &self_expr());
        assert_eq!(ty, Type::unknown());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.as_slice()[0].code, DiagnosticCode::Typ201);
    }

    #[test]
    fn field_access_on_self_resolves_through_lookup() {
        let bio = field("bio", TypeNode::primitive("string", false, loc(1, 1)), true);
        let lookup = FakeLookup::new().with_resource("User", vec![bio]);
        let options = CheckerOptions::default();

        let expr = field_access(self_expr(), "bio");
        let (ty, diagnostics) = infer_in_resource(&lookup, &options, "User", &expr);
        assert_eq!(ty.string_form(), "string?");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn safe_navigation_always_widens_to_nullable() {
        let name = field("name", TypeNode::primitive("string", false, loc(1, 1)), false);
        let lookup = FakeLookup::new().with_resource("User", vec![name]);
        let options = CheckerOptions::default();

        let expr = safe_nav(self_expr(), "name");
        let (ty, _) = infer_in_resource(&lookup, &options, "User", &expr);
        assert_eq!(ty.string_form(), "string?");
    }

    #[test]
    fn unwrap_on_an_already_required_value_warns_when_enabled() {
        let name = field("name", TypeNode::primitive("string", false, loc(1, 1)), false);
        let lookup = FakeLookup::new().with_resource("User", vec![name]);
        let mut options = CheckerOptions::default();
        options.warn_unnecessary_unwraps = true;

        let expr = unary("!", field_access(self_expr(), "name"));
        let (ty, diagnostics) = infer_in_resource(&lookup, &options, "User", &expr);
        assert_eq!(ty.string_form(), "string!");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.as_slice()[0].code, DiagnosticCode::Typ103);
    }

    #[test]
    fn null_coalesce_always_produces_a_required_type() {
        let bio = field("bio", TypeNode::primitive("string", false, loc(1, 1)), true);
        let lookup = FakeLookup::new().with_resource("User", vec![bio]);
        let options = CheckerOptions::default();

        let expr = null_coalesce(field_access(self_expr(), "bio"), string_lit("anonymous"));
        let (ty, diagnostics) = infer_in_resource(&lookup, &options, "User", &expr);
        assert_eq!(ty.string_form(), "string!");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn bare_calls_are_always_undefined_functions() {
        let lookup = FakeLookup::new();
        let options = CheckerOptions::default();
        let (ty, diagnostics) = infer_with(&lookup, &options, &bare_call("doStuff", vec![]));
        assert_eq!(ty, Type::unknown());
        assert_eq!(diagnostics.as_slice()[0].code, DiagnosticCode::Typ300);
    }

    #[test]
    fn stdlib_call_with_too_few_arguments_reports_invalid_arity() {
        let lookup = FakeLookup::new();
        let options = CheckerOptions::default();
        let expr = namespaced_call("String", "replace", vec![string_lit("hi")]);
        let (_, diagnostics) = infer_with(&lookup, &options, &expr);
        assert_eq!(diagnostics.as_slice()[0].code, DiagnosticCode::Typ301);
    }

    #[test]
    fn stdlib_call_with_wrong_argument_type_reports_type_mismatch() {
        let lookup = FakeLookup::new();
        let options = CheckerOptions::default();
        let expr = namespaced_call("String", "length", vec![int_lit(3)]);
        let (ty, diagnostics) = infer_with(&lookup, &options, &expr);
        assert_eq!(ty.string_form(), "int!");
        assert_eq!(diagnostics.as_slice()[0].code, DiagnosticCode::Typ302);
    }

    #[test]
    fn stdlib_call_returns_its_declared_return_type() {
        let lookup = FakeLookup::new();
        let options = CheckerOptions::default();
        let expr = namespaced_call("UUID", "generate", vec![]);
        let (ty, diagnostics) = infer_with(&lookup, &options, &expr);
        assert_eq!(ty.string_form(), "uuid!");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn arithmetic_on_non_numeric_operands_is_rejected() {
        let lookup = FakeLookup::new();
        let options = CheckerOptions::default();
        let expr = Expr::new(
            ExprKind::Binary { op: "+".to_string(), left: Box::new(string_lit("a")), right: Box::new(int_lit(1)) },
            loc(1, 1),
        );
        let (ty, diagnostics) = infer_with(&lookup, &options, &expr);
        assert_eq!(ty, Type::unknown());
        assert_eq!(diagnostics.as_slice()[0].code, DiagnosticCode::Typ500);
    }

    #[test]
    fn mixed_int_and_float_arithmetic_widens_to_float() {
        let lookup = FakeLookup::new();
        let options = CheckerOptions::default();
        let expr = Expr::new(
            ExprKind::Binary {
                op: "*".to_string(),
                left: Box::new(int_lit(2)),
                right: Box::new(Expr::new(ExprKind::Literal(reslang_ast::Literal::Float(1.5)), loc(1, 1))),
            },
            loc(1, 1),
        );
        let (ty, diagnostics) = infer_with(&lookup, &options, &expr);
        assert_eq!(ty.string_form(), "float!");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn indexing_a_non_collection_is_rejected() {
        let lookup = FakeLookup::new();
        let options = CheckerOptions::default();
        let expr = Expr::new(
            ExprKind::Index { object: Box::new(int_lit(3)), index: Box::new(int_lit(0)) },
            loc(1, 1),
        );
        let (ty, diagnostics) = infer_with(&lookup, &options, &expr);
        assert_eq!(ty, Type::unknown());
        assert_eq!(diagnostics.as_slice()[0].code, DiagnosticCode::Typ502);
    }

    #[test]
    fn indexing_an_array_widens_the_element_type() {
        let lookup = FakeLookup::new();
        let options = CheckerOptions::default();
        let array = Expr::new(
            ExprKind::ArrayLiteral(vec![int_lit(1), int_lit(2)]),
            loc(1, 1),
        );
        let expr = Expr::new(ExprKind::Index { object: Box::new(array), index: Box::new(int_lit(0)) }, loc(1, 1));
        let (ty, diagnostics) = infer_with(&lookup, &options, &expr);
        assert_eq!(ty.string_form(), "int?");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn undefined_identifier_reports_undefined_field() {
        let lookup = FakeLookup::new();
        let options = CheckerOptions::default();
        let (ty, diagnostics) = infer_with(&lookup, &options, &ident("whoops"));
        assert_eq!(ty, Type::unknown());
        assert_eq!(diagnostics.as_slice()[0].code, DiagnosticCode::Typ201);
    }
}
