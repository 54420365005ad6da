//! Boolean operator vocabulary.
//!
//! The operator sets are closed: the compiler matches on them
//! exhaustively, so a malformed operator cannot reach evaluation.

use std::fmt;

/// Unary boolean operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical negation: ¬A
    Not,
}

impl UnaryOp {
    /// Evaluate this operation on a boolean value.
    #[inline]
    pub fn eval(self, value: bool) -> bool {
        match self {
            UnaryOp::Not => !value,
        }
    }

    /// The display symbol, written directly before the operand.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "¬",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary boolean operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Conjunction: A ∧ B
    And,
    /// Disjunction: A ∨ B
    Or,
    /// Conditional: A → B
    Implies,
    /// Biconditional: A ↔ B
    Iff,
    /// Exclusive or: A ⊕ B
    Xor,
}

impl BinaryOp {
    /// Evaluate this operation on two boolean values.
    #[inline]
    pub fn eval(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinaryOp::And => lhs && rhs,
            BinaryOp::Or => lhs || rhs,
            BinaryOp::Implies => !lhs || rhs,
            BinaryOp::Iff => lhs == rhs,
            BinaryOp::Xor => lhs != rhs,
        }
    }

    /// The display symbol, written between the operands.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "∧",
            BinaryOp::Or => "∨",
            BinaryOp::Implies => "→",
            BinaryOp::Iff => "↔",
            BinaryOp::Xor => "⊕",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
