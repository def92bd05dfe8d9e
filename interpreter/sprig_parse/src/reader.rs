//! Recursive-descent reader over the lazy token stream.
//!
//! The reader pulls tokens one at a time from [`sprig_lexer::Lexer`] and
//! builds [`Expr`] trees. Any of `(`, `{`, `[` opens a list; the three
//! kinds are structurally equivalent, but every list must be closed by
//! the closer matching its opener. Atom tokens are expressions on their
//! own. Nesting depth is bounded only by the host stack; the evaluator,
//! not the reader, enforces the interpreter's depth limit.

use crate::ParseError;
use sprig_ir::{Expr, Span, Token, TokenKind};
use sprig_lexer::Lexer;
use tracing::trace;

/// Reads expression trees from one source unit.
pub struct Reader<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Reader<'a> {
    pub fn new(src: &'a str) -> Self {
        Reader {
            lexer: Lexer::new(src),
        }
    }

    /// Read one expression and leave the stream positioned just past it.
    pub fn read_expr(&mut self) -> Result<Expr, ParseError> {
        let token = self.lexer.next_token()?;
        self.read_from(token)
    }

    /// Read every expression up to end of input.
    pub fn read_all(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = Vec::new();
        while !matches!(self.lexer.peek()?.kind, TokenKind::Eof) {
            exprs.push(self.read_expr()?);
        }
        Ok(exprs)
    }

    fn read_from(&mut self, token: Token) -> Result<Expr, ParseError> {
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::number(value, token.span)),
            TokenKind::Word(text) => Ok(Expr::word(text, token.span)),
            TokenKind::LParen => self.read_list(token.span, ')'),
            TokenKind::LBrace => self.read_list(token.span, '}'),
            TokenKind::LBracket => self.read_list(token.span, ']'),
            TokenKind::RParen => Err(ParseError::unexpected_closer(')', token.span)),
            TokenKind::RBrace => Err(ParseError::unexpected_closer('}', token.span)),
            TokenKind::RBracket => Err(ParseError::unexpected_closer(']', token.span)),
            TokenKind::Eof => Err(ParseError::expected_expr(token.span)),
        }
    }

    /// Read children until the closer matching the opener at `opened_at`.
    /// The list's span runs from the opener through the closer.
    fn read_list(&mut self, opened_at: Span, expected: char) -> Result<Expr, ParseError> {
        trace!(%expected, start = opened_at.start, "read_list");
        let mut items = Vec::new();
        loop {
            let token = self.lexer.next_token()?;
            if let Some(found) = token.kind.close_bracket() {
                if found == expected {
                    return Ok(Expr::list(items, opened_at.merge(token.span)));
                }
                return Err(ParseError::mismatched_closer(
                    expected, found, opened_at, token.span,
                ));
            }
            if matches!(token.kind, TokenKind::Eof) {
                return Err(ParseError::unclosed_list(opened_at, token.span));
            }
            items.push(self.read_from(token)?);
        }
    }
}
