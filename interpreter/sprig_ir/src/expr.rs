//! Expression trees produced by the reader.

use crate::Span;
use std::fmt;
use std::rc::Rc;

/// One node of a parsed expression tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// An expression is an atom (number or word) or a list of expressions.
///
/// Words cover everything the lexer could not read as a number: variable
/// names, operator symbols like `+`, and the literals `true`/`false`. Which
/// of those a word *is* gets decided at evaluation time.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Number(f64),
    Word(Rc<str>),
    List(Vec<Expr>),
}

impl Expr {
    #[must_use]
    pub fn number(value: f64, span: Span) -> Self {
        Expr {
            kind: ExprKind::Number(value),
            span,
        }
    }

    #[must_use]
    pub fn word(text: Rc<str>, span: Span) -> Self {
        Expr {
            kind: ExprKind::Word(text),
            span,
        }
    }

    #[must_use]
    pub fn list(items: Vec<Expr>, span: Span) -> Self {
        Expr {
            kind: ExprKind::List(items),
            span,
        }
    }
}

impl fmt::Display for Expr {
    /// Renders the tree back in written form: atoms bare, lists
    /// parenthesized and space-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => write!(f, "{n}"),
            ExprKind::Word(w) => write!(f, "{w}"),
            ExprKind::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}
