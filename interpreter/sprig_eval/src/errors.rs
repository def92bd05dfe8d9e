//! Evaluation errors.
//!
//! Every failure the evaluator can produce is an [`EvalError`] carrying a
//! structured [`EvalErrorKind`] and, when known, the source span of the
//! offending expression. `UnboundIdentifier` doubles as the warning kind
//! collected by [`crate::Evaluator`] when a bareword falls back to
//! self-evaluation instead of failing.

use crate::value::Value;
use sprig_ir::Span;
use std::fmt;
use thiserror::Error;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category for evaluation failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A bareword resolved to no binding. Surfaced as a warning, never a
    /// hard failure: the word still self-evaluates.
    UnboundIdentifier { name: String },
    /// A list form that does not have the shape its head requires,
    /// e.g. an `if` branch that is a bare atom instead of a list.
    StructuralError { context: String },
    /// A callable invoked with the wrong number of arguments.
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// A builtin operand of the wrong kind.
    TypeMismatch {
        op: String,
        expected: String,
        got: String,
    },
    /// The evaluation depth counter hit its limit.
    StackOverflow { depth: usize },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundIdentifier { name } => write!(f, "unbound identifier `{name}`"),
            Self::StructuralError { context } => write!(f, "{context}"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "`{name}` expects {expected} {arg_word}, got {got}")
            }
            Self::TypeMismatch { op, expected, got } => {
                write!(f, "`{op}` expects {expected} operands, got {got}")
            }
            Self::StackOverflow { depth } => {
                write!(f, "maximum evaluation depth exceeded (limit: {depth})")
            }
        }
    }
}

/// Evaluation error.
///
/// The span is the expression the evaluator was looking at when it gave
/// up. Errors born inside builtins carry no span of their own; the
/// evaluator attaches the call site before propagating them.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// Bareword with no binding, kept as the warning emitted alongside
/// self-evaluation.
#[cold]
pub fn unbound_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundIdentifier {
        name: name.to_string(),
    })
}

/// Malformed special form or application.
#[cold]
pub fn structural(context: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StructuralError {
        context: context.into(),
    })
}

/// Wrong number of arguments for a function or builtin.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Builtin operand of the wrong kind.
#[cold]
pub fn type_mismatch(op: &str, expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op: op.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Maximum evaluation depth exceeded.
#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}
