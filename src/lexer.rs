//! Lexer for the formula language.
//!
//! Tokenization happens eagerly: the whole input is turned into a token
//! sequence up front, terminated by an [`TokenKind::Eof`] sentinel. The
//! parser then walks the sequence through a small cursor API.
//!
//! Rules are tried in a fixed priority order against the remaining input
//! and the first match wins, greedily: identifiers consume the longest
//! run of ASCII letters, `<->` is one token (never `<` + `->`), and `->`
//! is one token (never `-` + `>`). A character that starts no rule fails
//! the whole tokenization immediately; there is no recovery.

use log::debug;

use crate::error::ParseError;
use crate::token::{Token, TokenKind};

pub struct Lexer {
    tokens: Vec<Token>,
    index: usize,
}

impl Lexer {
    /// Tokenizes the whole input, or fails on the first character that
    /// matches no rule.
    pub fn new(input: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(input)?;
        Ok(Self { tokens, index: 0 })
    }

    /// The token under the cursor. The sentinel is never advanced past,
    /// so this is always valid.
    pub fn current(&self) -> &Token {
        &self.tokens[self.index]
    }

    /// Moves the cursor forward, stopping at the sentinel.
    pub fn advance(&mut self) {
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
    }

    /// Consumes the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current().kind != kind {
            return false;
        }
        self.advance();
        true
    }

    /// Like [`eat`][Lexer::eat], but failure is an error naming the
    /// expected and the actual token.
    pub fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.eat(kind) {
            return Ok(());
        }
        let token = self.current();
        Err(ParseError::ExpectedToken {
            offset: token.offset,
            expected: kind,
            found: token.kind,
            text: token.text.clone(),
        })
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while offset < input.len() {
        let rest = &input[offset..];
        let ch = rest.chars().next().unwrap();

        // Whitespace contributes to offsets but emits no token.
        if matches!(ch, ' ' | '\t' | '\r' | '\n') {
            offset += ch.len_utf8();
            continue;
        }

        let (kind, length) = match ch {
            c if c.is_ascii_alphabetic() => {
                let length = rest
                    .find(|c: char| !c.is_ascii_alphabetic())
                    .unwrap_or(rest.len());
                (TokenKind::Identifier, length)
            }
            '!' => (TokenKind::Not, 1),
            '&' => (TokenKind::And, 1),
            '|' => (TokenKind::Or, 1),
            '-' if rest.starts_with("->") => (TokenKind::Implies, 2),
            '<' if rest.starts_with("<->") => (TokenKind::Iff, 3),
            '^' => (TokenKind::Xor, 1),
            '(' => (TokenKind::LParen, 1),
            ')' => (TokenKind::RParen, 1),
            _ => {
                return Err(ParseError::InvalidCharacter {
                    offset,
                    character: ch,
                });
            }
        };

        let token = Token::new(offset, kind, &rest[..length]);
        debug!("lexed {} at {}", token, offset);
        tokens.push(token);
        offset += length;
    }

    tokens.push(Token::new(input.len(), TokenKind::Eof, ""));
    Ok(tokens)
}
