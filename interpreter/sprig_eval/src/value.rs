//! Runtime values.

use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::evaluator::Evaluator;
use sprig_ir::Expr;
use std::fmt;
use std::rc::Rc;

/// Signature shared by every builtin operation. Arguments arrive already
/// evaluated, left to right, in the caller's environment.
pub type BuiltinFn = fn(&mut Evaluator, &[Value]) -> EvalResult;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// 64-bit float; the only numeric type.
    Number(f64),
    Bool(bool),
    /// Text atom, produced when a bareword self-evaluates.
    Str(Rc<str>),
    /// Inert list data.
    List(Rc<Vec<Value>>),
    Function(Rc<FunctionValue>),
    /// Host-supplied primitive, carrying the name it was registered under.
    Builtin(BuiltinFn, &'static str),
    /// "No value": the result of effects, empty forms, and a false `if`
    /// with no else branch.
    Void,
}

impl Value {
    /// Short type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Function(_) => "function",
            Self::Builtin(..) => "builtin",
            Self::Void => "void",
        }
    }
}

impl PartialEq for Value {
    /// Functions compare by identity, builtins by registered name;
    /// everything else compares structurally.
    #[expect(
        clippy::float_cmp,
        reason = "number equality is IEEE `==`, the comparison the language exposes"
    )]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(_, a), Self::Builtin(_, b)) => a == b,
            (Self::Void, Self::Void) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Self::Function(func) => write!(f, "<fn {}>", func.name),
            Self::Builtin(_, name) => write!(f, "<builtin {name}>"),
            Self::Void => write!(f, "()"),
        }
    }
}

/// Function value (closure).
///
/// The environment is the defining scope's frame chain plus one fresh
/// frame, shared by reference: mutations to outer frames made after the
/// definition are visible through it. The function's own name is bound
/// in the fresh frame so recursive self-calls resolve at definition
/// time, not call time.
#[derive(Clone)]
pub struct FunctionValue {
    /// Name given at definition, used for self-reference and diagnostics.
    pub name: Rc<str>,
    /// Parameter names, in call order.
    pub params: Vec<Rc<str>>,
    /// Body expressions; the last one's value is the call's result.
    pub body: Rc<[Expr]>,
    /// Captured environment.
    pub env: Environment,
}

// The captured frame holds the function itself, so a derived impl would
// recurse through that cycle.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::{assert_eq, assert_ne};

    fn sample_function(name: &str) -> Rc<FunctionValue> {
        Rc::new(FunctionValue {
            name: Rc::from(name),
            params: Vec::new(),
            body: Vec::new().into(),
            env: Environment::new(),
        })
    }

    #[test]
    fn display_renders_like_source() {
        assert_eq!(Value::Number(6.0).to_string(), "6");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Str(Rc::from("hello")).to_string(), "hello");
        assert_eq!(Value::Void.to_string(), "()");
    }

    #[test]
    fn display_renders_lists_in_brackets() {
        let list = Value::List(Rc::new(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ]));
        assert_eq!(list.to_string(), "(1 2 3)");
        assert_eq!(Value::List(Rc::new(Vec::new())).to_string(), "()");
    }

    #[test]
    fn functions_compare_by_identity() {
        let f = sample_function("f");
        assert_eq!(Value::Function(Rc::clone(&f)), Value::Function(Rc::clone(&f)));
        let twin = sample_function("f");
        assert_ne!(Value::Function(f), Value::Function(twin));
    }

    #[test]
    fn values_of_different_kinds_never_compare_equal() {
        assert_ne!(Value::Number(0.0), Value::Void);
        assert_ne!(Value::Str(Rc::from("true")), Value::Bool(true));
    }

    #[test]
    fn debug_skips_the_captured_environment() {
        let f = sample_function("loop");
        let rendered = format!("{f:?}");
        assert!(rendered.contains("loop"));
        assert!(!rendered.contains("frames"));
    }
}
