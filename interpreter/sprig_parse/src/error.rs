//! Reader errors: bracket discipline violations and lexer failures.

use sprig_ir::Span;
use sprig_lexer::LexError;
use thiserror::Error;

/// A parse failure with the span where reading stopped.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// What went wrong while reading.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseErrorKind {
    /// The lexer rejected the text under the reader.
    #[error(transparent)]
    Lex(LexError),
    /// A closing bracket with no list open, e.g. a unit starting with `)`.
    #[error("unexpected closing `{found}` with no open list")]
    UnexpectedCloser { found: char },
    /// A list closed with the wrong bracket kind, e.g. `(+ 1 2]`.
    #[error("expected `{expected}` to close this list, found `{found}`")]
    MismatchedCloser {
        expected: char,
        found: char,
        opened_at: Span,
    },
    /// End of input before the list's closing bracket.
    #[error("end of input inside an unclosed list")]
    UnclosedList { opened_at: Span },
    /// End of input where an expression was required.
    #[error("expected an expression, found end of input")]
    ExpectedExpr,
}

impl ParseError {
    #[cold]
    pub fn unexpected_closer(found: char, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedCloser { found },
            span,
        }
    }

    #[cold]
    pub fn mismatched_closer(expected: char, found: char, opened_at: Span, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::MismatchedCloser {
                expected,
                found,
                opened_at,
            },
            span,
        }
    }

    #[cold]
    pub fn unclosed_list(opened_at: Span, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnclosedList { opened_at },
            span,
        }
    }

    #[cold]
    pub fn expected_expr(span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::ExpectedExpr,
            span,
        }
    }

    /// The span of the offending list's opening bracket, for errors that
    /// remember one. Diagnostics render it as a secondary label.
    #[must_use]
    pub fn opened_at(&self) -> Option<Span> {
        match self.kind {
            ParseErrorKind::MismatchedCloser { opened_at, .. }
            | ParseErrorKind::UnclosedList { opened_at } => Some(opened_at),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let span = err.span;
        ParseError {
            kind: ParseErrorKind::Lex(err),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_names_both_brackets() {
        let err = ParseError::mismatched_closer(')', ']', Span::new(0, 1), Span::new(6, 7));
        assert_eq!(err.to_string(), "expected `)` to close this list, found `]`");
        assert_eq!(err.opened_at(), Some(Span::new(0, 1)));
    }

    #[test]
    fn lex_errors_keep_their_span_and_message() {
        let lex = LexError::malformed_number("1.2.3", Span::new(2, 7));
        let err = ParseError::from(lex);
        assert_eq!(err.span, Span::new(2, 7));
        assert_eq!(err.to_string(), "malformed numeric literal `1.2.3`");
        assert_eq!(err.opened_at(), None);
    }
}
