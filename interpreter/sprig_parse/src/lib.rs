//! Reader for Sprig: turns source text into expression trees.
//!
//! [`Reader`] drives the lazy lexer and performs the one piece of
//! validation the token stream cannot: bracket pairs must match. All
//! failures come back as [`ParseError`] values carrying spans; nothing
//! here panics on malformed input.

mod error;
mod reader;

pub use error::{ParseError, ParseErrorKind};
pub use reader::Reader;
