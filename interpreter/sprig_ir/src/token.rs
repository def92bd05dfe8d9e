//! Tokens produced by the lexer.

use crate::Span;
use std::rc::Rc;

/// A single token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// What a token is.
///
/// The three bracket pairs are distinct tokens even though the reader treats
/// any of them as opening a list; keeping them distinct is what lets the
/// reader insist that `(` is closed by `)` and not `]`.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// A numeric literal, already parsed to its value.
    Number(f64),
    /// A bareword atom: names, operator symbols, `true`/`false`.
    Word(Rc<str>),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// The bracket character of a closing bracket token.
    #[must_use]
    pub fn close_bracket(&self) -> Option<char> {
        match self {
            TokenKind::RParen => Some(')'),
            TokenKind::RBrace => Some('}'),
            TokenKind::RBracket => Some(']'),
            _ => None,
        }
    }
}
