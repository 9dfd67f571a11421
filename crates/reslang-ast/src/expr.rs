//! Expression AST nodes.

use reslang_common::Location;

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Nil,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// An interpolated string's alternating literal/expression parts, e.g.
/// `"hello #{name}!"` becomes `[Literal("hello "), Expr(name), Literal("!")]`.
#[derive(Clone, Debug, PartialEq)]
pub enum InterpolationPart {
    Literal(String),
    Expr(Box<Expr>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallArg {
    pub expr: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub location: Location,
}

impl Expr {
    pub fn new(kind: ExprKind, location: Location) -> Self {
        Expr { kind, location }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    Identifier(String),
    SelfExpr,
    FieldAccess {
        object: Box<Expr>,
        field: String,
    },
    SafeNavigation {
        object: Box<Expr>,
        field: String,
    },
    Call {
        namespace: Option<String>,
        function: String,
        args: Vec<CallArg>,
    },
    Binary {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: String,
        operand: Box<Expr>,
    },
    Logical {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    NullCoalesce {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    ArrayLiteral(Vec<Expr>),
    HashLiteral(Vec<(Expr, Expr)>),
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    Paren(Box<Expr>),
    InterpolatedString(Vec<InterpolationPart>),
    Range {
        start: Box<Expr>,
        end: Box<Expr>,
        inclusive: bool,
    },
    Lambda {
        params: Vec<String>,
        body: Vec<crate::stmt::Stmt>,
    },
}
