//! Statement AST nodes, used inside hook bodies and lambda bodies.

use reslang_common::Location;

use crate::expr::Expr;
use crate::type_node::TypeNode;

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub location: Location,
}

impl Stmt {
    pub fn new(kind: StmtKind, location: Location) -> Self {
        Stmt { kind, location }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchCase {
    /// Patterns are not type-checked against the matched value; the
    /// pattern's own sub-expressions (if any) are still visited.
    pub pattern: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfBranch {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Expr(Expr),
    Assignment {
        target: Expr,
        value: Expr,
    },
    Let {
        name: String,
        declared_type: Option<TypeNode>,
        value: Expr,
    },
    Return(Option<Expr>),
    If {
        branches: Vec<IfBranch>,
        else_body: Option<Vec<Stmt>>,
    },
    Block {
        body: Vec<Stmt>,
        is_async: bool,
    },
    Rescue {
        try_body: Vec<Stmt>,
        error_binding: Option<String>,
        rescue_body: Vec<Stmt>,
    },
    Match {
        value: Expr,
        cases: Vec<MatchCase>,
    },
}
