//! Lexer error type: a kind plus the span of the offending text.

use sprig_ir::Span;
use thiserror::Error;

/// A lexing failure with the source span that produced it.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// What went wrong while scanning.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LexErrorKind {
    /// A numeric run that does not parse as a 64-bit float, such as
    /// `1.2.3` or `1-2`. The run is never silently split or re-read as
    /// a word.
    #[error("malformed numeric literal `{lexeme}`")]
    MalformedNumber { lexeme: String },
}

impl LexError {
    #[cold]
    pub fn malformed_number(lexeme: &str, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::MalformedNumber {
                lexeme: lexeme.to_owned(),
            },
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_names_the_lexeme() {
        let err = LexError::malformed_number("1.2.3", Span::new(4, 9));
        assert_eq!(err.to_string(), "malformed numeric literal `1.2.3`");
        assert_eq!(err.span, Span::new(4, 9));
    }
}
