//! Shared data model for the Sprig interpreter.
//!
//! Everything downstream of the lexer speaks in these types: [`Span`]s tie
//! tokens, expressions, and errors back to source bytes, [`Token`]s are the
//! lexer's output, and [`Expr`] trees are the reader's output and the
//! evaluator's input.

pub mod expr;
pub mod span;
pub mod token;

pub use expr::{Expr, ExprKind};
pub use span::Span;
pub use token::{Token, TokenKind};
