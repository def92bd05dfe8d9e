//! Lazy tokenizer for Sprig source text.
//!
//! The lexer produces one token per [`Lexer::next_token`] call and holds
//! exactly one token of lookahead, readable through [`Lexer::peek`]
//! without consuming it. End of input is an explicit [`TokenKind::Eof`]
//! token that repeats forever, so callers never deal with an `Option`.
//!
//! Scanning rules, in priority order:
//!
//! 1. a digit, or a `-` immediately followed by a digit, starts a numeric
//!    literal consuming the maximal run of digits, `.` and `-`; the run
//!    must parse as an `f64` or scanning fails with
//!    [`LexErrorKind::MalformedNumber`],
//! 2. each of `( ) { } [ ]` is its own single-character token,
//! 3. whitespace separates tokens and produces none,
//! 4. any other maximal run of non-whitespace, non-bracket bytes is a
//!    bareword [`TokenKind::Word`].
//!
//! So `-5x` is the number `-5` followed by the word `x`, while a lone `-`
//! or `--5` is a word.

mod cursor;
mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use cursor::Cursor;
use sprig_ir::{Span, Token, TokenKind};
use std::rc::Rc;

/// A lazy token stream over one source unit.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    /// The lookahead slot. Always holds the next unconsumed token, or the
    /// error its scan produced.
    head: Result<Token, LexError>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        let mut cursor = Cursor::new(src);
        let head = scan_token(&mut cursor);
        Lexer { cursor, head }
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> Result<&Token, LexError> {
        match &self.head {
            Ok(token) => Ok(token),
            Err(err) => Err(err.clone()),
        }
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let next = scan_token(&mut self.cursor);
        std::mem::replace(&mut self.head, next)
    }
}

fn scan_token(cursor: &mut Cursor<'_>) -> Result<Token, LexError> {
    cursor.eat_while(|b| b.is_ascii_whitespace());
    let start = cursor.pos();
    if cursor.is_eof() {
        return Ok(Token::new(TokenKind::Eof, Span::point(start)));
    }

    let b = cursor.current();
    if let Some(kind) = bracket_kind(b) {
        cursor.advance();
        return Ok(Token::new(kind, Span::new(start, cursor.pos())));
    }
    if b.is_ascii_digit() || (b == b'-' && cursor.peek().is_ascii_digit()) {
        return scan_number(cursor, start);
    }
    Ok(scan_word(cursor, start))
}

fn scan_number(cursor: &mut Cursor<'_>, start: u32) -> Result<Token, LexError> {
    cursor.eat_while(|b| b.is_ascii_digit() || b == b'.' || b == b'-');
    let lexeme = cursor.slice_from(start);
    let span = Span::new(start, cursor.pos());
    match lexeme.parse::<f64>() {
        Ok(value) => Ok(Token::new(TokenKind::Number(value), span)),
        Err(_) => Err(LexError::malformed_number(lexeme, span)),
    }
}

fn scan_word(cursor: &mut Cursor<'_>, start: u32) -> Token {
    cursor.eat_while(|b| !b.is_ascii_whitespace() && !is_bracket(b));
    let text: Rc<str> = Rc::from(cursor.slice_from(start));
    Token::new(TokenKind::Word(text), Span::new(start, cursor.pos()))
}

fn bracket_kind(b: u8) -> Option<TokenKind> {
    match b {
        b'(' => Some(TokenKind::LParen),
        b')' => Some(TokenKind::RParen),
        b'{' => Some(TokenKind::LBrace),
        b'}' => Some(TokenKind::RBrace),
        b'[' => Some(TokenKind::LBracket),
        b']' => Some(TokenKind::RBracket),
        _ => None,
    }
}

fn is_bracket(b: u8) -> bool {
    matches!(b, b'(' | b')' | b'{' | b'}' | b'[' | b']')
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(src);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            let done = token.kind == TokenKind::Eof;
            out.push(token.kind);
            if done {
                break;
            }
        }
        out
    }

    fn word(text: &str) -> TokenKind {
        TokenKind::Word(Rc::from(text))
    }

    #[test]
    fn brackets_are_single_tokens() {
        assert_eq!(
            kinds("({[]})"),
            vec![
                TokenKind::LParen,
                TokenKind::LBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::RBrace,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn whitespace_separates_and_vanishes() {
        assert_eq!(
            kinds("  +\t1\n 2 "),
            vec![
                word("+"),
                TokenKind::Number(1.0),
                TokenKind::Number(2.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn negative_and_decimal_numbers() {
        assert_eq!(
            kinds("-5 3.25"),
            vec![
                TokenKind::Number(-5.0),
                TokenKind::Number(3.25),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lone_minus_is_a_word() {
        assert_eq!(kinds("-"), vec![word("-"), TokenKind::Eof]);
    }

    #[test]
    fn double_minus_is_a_word() {
        assert_eq!(kinds("--5"), vec![word("--5"), TokenKind::Eof]);
    }

    #[test]
    fn numeric_run_stops_at_word_characters() {
        assert_eq!(
            kinds("-5x"),
            vec![TokenKind::Number(-5.0), word("x"), TokenKind::Eof]
        );
        assert_eq!(
            kinds("5abc"),
            vec![TokenKind::Number(5.0), word("abc"), TokenKind::Eof]
        );
    }

    #[test]
    fn words_stop_at_brackets() {
        assert_eq!(
            kinds("foo(bar"),
            vec![word("foo"), TokenKind::LParen, word("bar"), TokenKind::Eof]
        );
    }

    #[test]
    fn malformed_number_is_rejected_with_its_run() {
        let mut lexer = Lexer::new(" 1.2.3 rest");
        let err = lexer.next_token().unwrap_err();
        assert_eq!(
            err.kind,
            LexErrorKind::MalformedNumber {
                lexeme: "1.2.3".to_owned()
            }
        );
        assert_eq!(err.span, Span::new(1, 6));
    }

    #[test]
    fn embedded_minus_makes_the_run_malformed() {
        let mut lexer = Lexer::new("1-2");
        let err = lexer.next_token().unwrap_err();
        assert_eq!(
            err.kind,
            LexErrorKind::MalformedNumber {
                lexeme: "1-2".to_owned()
            }
        );
    }

    #[test]
    fn peek_does_not_consume() {
        let mut lexer = Lexer::new("a b");
        assert_eq!(lexer.peek().unwrap().kind, word("a"));
        assert_eq!(lexer.peek().unwrap().kind, word("a"));
        assert_eq!(lexer.next_token().unwrap().kind, word("a"));
        assert_eq!(lexer.peek().unwrap().kind, word("b"));
    }

    #[test]
    fn eof_repeats_forever() {
        let mut lexer = Lexer::new("");
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        }
    }

    #[test]
    fn spans_index_back_into_the_source() {
        let src = "(add 10)";
        let mut lexer = Lexer::new(src);
        let open = lexer.next_token().unwrap();
        let name = lexer.next_token().unwrap();
        let num = lexer.next_token().unwrap();
        assert_eq!(&src[open.span.range()], "(");
        assert_eq!(&src[name.span.range()], "add");
        assert_eq!(&src[num.span.range()], "10");
    }

    #[test]
    fn eof_span_is_a_point_at_the_end() {
        let mut lexer = Lexer::new("ab ");
        lexer.next_token().unwrap();
        let eof = lexer.next_token().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.span, Span::point(3));
    }
}
