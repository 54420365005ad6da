//! Error types for lexing and parsing.
//!
//! All failures on malformed input are returned as plain data; nothing in
//! the pipeline panics on user input.

use thiserror::Error;

use crate::token::TokenKind;

/// Errors produced while turning formula text into an AST.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character matched no lexer rule.
    #[error("[{offset}] invalid character: '{character}'")]
    InvalidCharacter { offset: usize, character: char },

    /// No expression can start with this token.
    #[error("[{offset}] unexpected [{kind}] \"{text}\"")]
    UnexpectedToken {
        offset: usize,
        kind: TokenKind,
        text: String,
    },

    /// A specific token was required but something else was found.
    #[error("[{offset}] expected [{expected}] but got [{found}] \"{text}\"")]
    ExpectedToken {
        offset: usize,
        expected: TokenKind,
        found: TokenKind,
        text: String,
    },
}

impl ParseError {
    /// Byte offset into the input where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::InvalidCharacter { offset, .. } => *offset,
            ParseError::UnexpectedToken { offset, .. } => *offset,
            ParseError::ExpectedToken { offset, .. } => *offset,
        }
    }
}
