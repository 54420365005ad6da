//! Abstract syntax tree for propositional formulas.
//!
//! The tree is immutable once the parser has built it. Equality is
//! structural (derived, recursive over children), never identity; the
//! table compiler relies on exactly this relation to merge duplicate
//! sub-expressions.

use std::fmt;

use crate::ops::{BinaryOp, UnaryOp};

/// A propositional formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A variable reference, e.g. `p`.
    Var(String),
    /// A unary operation applied to one sub-formula.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// A binary operation applied to two sub-formulas.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

/// Constructors.
///
/// These build the tree verbatim: no rewriting, no simplification. The
/// compiler only ever merges sub-expressions that are structurally equal
/// as written, so the constructors must not normalize anything.
impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn unary(op: UnaryOp, operand: Self) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn not(operand: Self) -> Self {
        Expr::unary(UnaryOp::Not, operand)
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::Implies, lhs, rhs)
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::Iff, lhs, rhs)
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::binary(BinaryOp::Xor, lhs, rhs)
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Expr::Binary { .. })
    }
}

/// Renders the formula with minimal parenthesization: a binary operand is
/// wrapped in parentheses, a variable or unary operand never is.
///
/// Note that this deliberately under-parenthesizes a unary operator over
/// a grouped binary operand: `!(p & q)` renders as `¬p ∧ q`. Table
/// column headers are built from these strings, so the rule is part of
/// the observable output and must stay as is.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_operand(expr: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if expr.is_binary() {
                write!(f, "({})", expr)
            } else {
                write!(f, "{}", expr)
            }
        }

        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Unary { op, operand } => write!(f, "{}{}", op, operand),
            Expr::Binary { op, lhs, rhs } => {
                write_operand(lhs, f)?;
                write!(f, " {} ", op)?;
                write_operand(rhs, f)
            }
        }
    }
}
