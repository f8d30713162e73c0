use std::fmt;

use tally_diagnostic::span::Span;

use crate::{Node, NodeCopy};

#[derive(Node!)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Node!)]
pub enum ExprKind {
    Integer {
        /// The literal as written.
        text: String,
        value: i64,
    },

    Prefix {
        op: UnOp,
        operand: Box<Expr>,
    },

    Infix {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

#[derive(NodeCopy!)]
pub enum UnOp {
    Negate,
}

impl UnOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnOp::Negate => "-",
        }
    }
}

#[derive(NodeCopy!)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

/// Renders the expression fully parenthesized, so that `-1 + 2 * 3` comes
/// out as `((-1) + (2 * 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Integer { text, .. } => f.write_str(text),
            ExprKind::Prefix { op, operand } => write!(f, "({}{operand})", op.as_str()),
            ExprKind::Infix { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.as_str()),
        }
    }
}
