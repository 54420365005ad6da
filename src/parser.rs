//! Recursive-descent parser with operator-precedence climbing.
//!
//! Precedence ladder, lowest first:
//!
//! ```text
//! ^  <  <->  <  ->  <  |  <  &  <  !  <  primary
//! ```
//!
//! All binary operators are left-associative: the recursive call for a
//! right operand requires strictly higher precedence, so equal-precedence
//! operators bind left-to-right.

use log::debug;

use crate::ast::Expr;
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::ops::BinaryOp;
use crate::token::TokenKind;

/// Precedence of `!`, one above every binary operator. A `!` grabs only
/// the following primary/unary chain, never a whole binary expression.
const NOT_PRECEDENCE: u8 = 5;

fn binary_precedence(kind: TokenKind) -> Option<(BinaryOp, u8)> {
    match kind {
        TokenKind::Xor => Some((BinaryOp::Xor, 0)),
        TokenKind::Iff => Some((BinaryOp::Iff, 1)),
        TokenKind::Implies => Some((BinaryOp::Implies, 2)),
        TokenKind::Or => Some((BinaryOp::Or, 3)),
        TokenKind::And => Some((BinaryOp::And, 4)),
        _ => None,
    }
}

/// Parses a formula into an AST.
///
/// All failures on malformed input come back as a [`ParseError`] value;
/// this never panics.
///
/// # Examples
///
/// ```
/// use truthtable_rs::ast::Expr;
/// use truthtable_rs::parser::parse;
///
/// let ast = parse("p & q | r").unwrap();
/// assert_eq!(ast, Expr::or(Expr::and(Expr::var("p"), Expr::var("q")), Expr::var("r")));
/// ```
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    debug!("parse({:?})", input);

    let mut parser = Parser {
        lexer: Lexer::new(input)?,
    };

    // Parse one expression and require the input to end there.
    let expr = parser.parse_expr(0)?;
    parser.lexer.expect(TokenKind::Eof)?;

    Ok(expr)
}

struct Parser {
    lexer: Lexer,
}

impl Parser {
    fn parse_expr(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_primary()?;

        loop {
            // Stop when the next token is not a binary operator, or binds
            // too weakly for this level.
            let Some((op, precedence)) = binary_precedence(self.lexer.current().kind) else {
                break;
            };
            if precedence < min_precedence {
                break;
            }

            self.lexer.advance();
            let rhs = self.parse_expr(precedence + 1)?;
            lhs = Expr::binary(op, lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.lexer.current().clone();

        if self.lexer.eat(TokenKind::Identifier) {
            return Ok(Expr::var(token.text));
        }

        if self.lexer.eat(TokenKind::Not) {
            let operand = self.parse_expr(NOT_PRECEDENCE)?;
            return Ok(Expr::not(operand));
        }

        if self.lexer.eat(TokenKind::LParen) {
            // Parentheses reset the precedence scope.
            let expr = self.parse_expr(0)?;
            self.lexer.expect(TokenKind::RParen)?;
            return Ok(expr);
        }

        Err(ParseError::UnexpectedToken {
            offset: token.offset,
            kind: token.kind,
            text: token.text,
        })
    }
}
