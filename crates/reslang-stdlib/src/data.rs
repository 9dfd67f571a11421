//! The single source-of-truth signature table.
//!
//! Both the core function set and the extended catalog are built from this
//! one list, so adding a function never requires updating two surfaces that
//! could drift out of sync.

use reslang_types::Type;

use crate::signature::{Param, Signature};

fn sig(namespace: &str, name: &str, params: Vec<Param>, return_type: Type) -> Signature {
    Signature {
        namespace: namespace.to_string(),
        name: name.to_string(),
        params,
        return_type,
    }
}

fn req(name: &str, ty: Type) -> Param {
    Param::required(name, ty)
}

/// Every signature in the registry: the core set first, then the extended
/// catalog. Order is irrelevant to lookup; it only affects doc generation.
pub fn build_entries() -> Vec<Signature> {
    let mut entries = Vec::new();

    // ---- Core function set ----------------------------------------------
    entries.push(sig("String", "length", vec![req("s", Type::string())], Type::int()));
    entries.push(sig("String", "slugify", vec![req("s", Type::string())], Type::string()));
    entries.push(sig("String", "upcase", vec![req("s", Type::string())], Type::string()));
    entries.push(sig("String", "downcase", vec![req("s", Type::string())], Type::string()));
    entries.push(sig("String", "trim", vec![req("s", Type::string())], Type::string()));
    entries.push(sig(
        "String",
        "contains",
        vec![req("s", Type::string()), req("substr", Type::string())],
        Type::bool_(),
    ));
    entries.push(sig(
        "String",
        "replace",
        vec![req("s", Type::string()), req("old", Type::string()), req("new", Type::string())],
        Type::string(),
    ));
    entries.push(sig("Time", "now", vec![], Type::timestamp()));
    entries.push(sig(
        "Time",
        "format",
        vec![req("t", Type::timestamp()), req("layout", Type::string())],
        Type::string(),
    ));
    entries.push(sig(
        "Time",
        "parse",
        vec![req("s", Type::string()), req("layout", Type::string())],
        Type::timestamp().to_nullable(),
    ));
    entries.push(sig(
        "Time",
        "add_days",
        vec![req("t", Type::timestamp()), req("days", Type::int())],
        Type::timestamp(),
    ));
    entries.push(sig(
        "Array",
        "length",
        vec![req("arr", Type::array(Type::any(), false))],
        Type::int(),
    ));
    entries.push(sig(
        "Array",
        "contains",
        vec![req("arr", Type::array(Type::any(), false)), req("value", Type::any())],
        Type::bool_(),
    ));
    entries.push(sig(
        "Hash",
        "has_key",
        vec![req("h", Type::hash(Type::any(), Type::any(), false)), req("key", Type::any())],
        Type::bool_(),
    ));
    entries.push(sig("UUID", "generate", vec![], Type::uuid()));

    // ---- Extended catalog --------------------------------------------
    entries.push(sig("String", "capitalize", vec![req("s", Type::string())], Type::string()));
    entries.push(sig(
        "String",
        "truncate",
        vec![req("s", Type::string()), req("length", Type::int())],
        Type::string(),
    ));
    entries.push(sig(
        "String",
        "split",
        vec![req("s", Type::string()), req("separator", Type::string())],
        Type::array(Type::string(), false),
    ));
    entries.push(sig(
        "String",
        "pad_left",
        vec![req("s", Type::string()), req("width", Type::int()), req("fill", Type::string())],
        Type::string(),
    ));
    entries.push(sig(
        "String",
        "pad_right",
        vec![req("s", Type::string()), req("width", Type::int()), req("fill", Type::string())],
        Type::string(),
    ));
    entries.push(sig(
        "String",
        "starts_with",
        vec![req("s", Type::string()), req("prefix", Type::string())],
        Type::bool_(),
    ));
    entries.push(sig(
        "String",
        "ends_with",
        vec![req("s", Type::string()), req("suffix", Type::string())],
        Type::bool_(),
    ));

    entries.push(sig(
        "Array",
        "first",
        vec![req("arr", Type::array(Type::any(), false))],
        Type::any().to_nullable(),
    ));
    entries.push(sig(
        "Array",
        "last",
        vec![req("arr", Type::array(Type::any(), false))],
        Type::any().to_nullable(),
    ));
    entries.push(sig(
        "Array",
        "push",
        vec![req("arr", Type::array(Type::any(), false)), req("value", Type::any())],
        Type::array(Type::any(), false),
    ));
    entries.push(sig(
        "Array",
        "unique",
        vec![req("arr", Type::array(Type::any(), false))],
        Type::array(Type::any(), false),
    ));
    entries.push(sig(
        "Array",
        "sort",
        vec![req("arr", Type::array(Type::any(), false))],
        Type::array(Type::any(), false),
    ));
    entries.push(sig(
        "Array",
        "reverse",
        vec![req("arr", Type::array(Type::any(), false))],
        Type::array(Type::any(), false),
    ));
    entries.push(sig(
        "Array",
        "join",
        vec![req("arr", Type::array(Type::any(), false)), req("separator", Type::string())],
        Type::string(),
    ));
    entries.push(sig("Array", "sum", vec![req("arr", Type::array(Type::any(), false))], Type::float()));
    entries.push(sig(
        "Array",
        "min",
        vec![req("arr", Type::array(Type::any(), false))],
        Type::any().to_nullable(),
    ));
    entries.push(sig(
        "Array",
        "max",
        vec![req("arr", Type::array(Type::any(), false))],
        Type::any().to_nullable(),
    ));
    entries.push(sig("Array", "empty", vec![req("arr", Type::array(Type::any(), false))], Type::bool_()));

    entries.push(sig(
        "Hash",
        "keys",
        vec![req("h", Type::hash(Type::any(), Type::any(), false))],
        Type::array(Type::any(), false),
    ));
    entries.push(sig(
        "Hash",
        "values",
        vec![req("h", Type::hash(Type::any(), Type::any(), false))],
        Type::array(Type::any(), false),
    ));
    entries.push(sig(
        "Hash",
        "get",
        vec![req("h", Type::hash(Type::any(), Type::any(), false)), req("key", Type::any())],
        Type::any().to_nullable(),
    ));
    entries.push(sig(
        "Hash",
        "merge",
        vec![
            req("h", Type::hash(Type::any(), Type::any(), false)),
            req("other", Type::hash(Type::any(), Type::any(), false)),
        ],
        Type::hash(Type::any(), Type::any(), false),
    ));
    entries.push(sig(
        "Hash",
        "delete",
        vec![req("h", Type::hash(Type::any(), Type::any(), false)), req("key", Type::any())],
        Type::hash(Type::any(), Type::any(), false),
    ));

    entries.push(sig(
        "Time",
        "add_hours",
        vec![req("t", Type::timestamp()), req("hours", Type::int())],
        Type::timestamp(),
    ));
    entries.push(sig(
        "Time",
        "add_minutes",
        vec![req("t", Type::timestamp()), req("minutes", Type::int())],
        Type::timestamp(),
    ));
    entries.push(sig(
        "Time",
        "diff_days",
        vec![req("a", Type::timestamp()), req("b", Type::timestamp())],
        Type::int(),
    ));
    entries.push(sig("Time", "to_date", vec![req("t", Type::timestamp())], Type::primitive("date", false)));
    entries.push(sig("Time", "today", vec![], Type::primitive("date", false)));
    entries.push(sig(
        "Time",
        "is_before",
        vec![req("a", Type::timestamp()), req("b", Type::timestamp())],
        Type::bool_(),
    ));
    entries.push(sig(
        "Time",
        "is_after",
        vec![req("a", Type::timestamp()), req("b", Type::timestamp())],
        Type::bool_(),
    ));

    entries.push(sig("Math", "round", vec![req("n", Type::float())], Type::int()));
    entries.push(sig("Math", "floor", vec![req("n", Type::float())], Type::int()));
    entries.push(sig("Math", "ceil", vec![req("n", Type::float())], Type::int()));
    entries.push(sig("Math", "abs", vec![req("n", Type::float())], Type::float()));
    entries.push(sig("Math", "min", vec![req("a", Type::float()), req("b", Type::float())], Type::float()));
    entries.push(sig("Math", "max", vec![req("a", Type::float()), req("b", Type::float())], Type::float()));
    entries.push(sig("Math", "pow", vec![req("base", Type::float()), req("exponent", Type::float())], Type::float()));
    entries.push(sig("Math", "sqrt", vec![req("n", Type::float())], Type::float()));

    entries.push(sig("ULID", "generate", vec![], Type::primitive("ulid", false)));
    entries.push(sig("UUID", "is_valid", vec![req("s", Type::string())], Type::bool_()));
    entries.push(sig("ULID", "is_valid", vec![req("s", Type::string())], Type::bool_()));

    entries.push(sig("Number", "to_string", vec![req("n", Type::float())], Type::string()));
    entries.push(sig("Number", "parse_int", vec![req("s", Type::string())], Type::int().to_nullable()));
    entries.push(sig("Number", "parse_float", vec![req("s", Type::string())], Type::float().to_nullable()));

    entries.push(sig("Validation", "is_email", vec![req("s", Type::string())], Type::bool_()));
    entries.push(sig("Validation", "is_url", vec![req("s", Type::string())], Type::bool_()));
    entries.push(sig("Validation", "is_phone", vec![req("s", Type::string())], Type::bool_()));

    entries
}

/// The 15 function names the core set pins. Used by tests to assert this
/// baseline subset is present and unchanged regardless of catalog growth.
pub const CORE_FUNCTIONS: [(&str, &str); 15] = [
    ("String", "length"),
    ("String", "slugify"),
    ("String", "upcase"),
    ("String", "downcase"),
    ("String", "trim"),
    ("String", "contains"),
    ("String", "replace"),
    ("Time", "now"),
    ("Time", "format"),
    ("Time", "parse"),
    ("Time", "add_days"),
    ("Array", "length"),
    ("Array", "contains"),
    ("Hash", "has_key"),
    ("UUID", "generate"),
];
