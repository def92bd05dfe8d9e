//! Builtin operation table.
//!
//! Builtins are free functions over a slice of already-evaluated
//! arguments, registered in the root environment as [`Value::Builtin`]
//! entries. Arithmetic folds left to right and is n-ary; comparisons,
//! logic, and the transcendental functions are fixed-arity. Operands of
//! the wrong kind are reported, never coerced.

use crate::environment::Environment;
use crate::errors::{arity_mismatch, type_mismatch, EvalError, EvalResult};
use crate::evaluator::Evaluator;
use crate::value::Value;

/// Seed `env` with the builtin operation table.
pub fn register_builtins(env: &Environment) {
    env.define("+", Value::Builtin(builtin_add, "+"));
    env.define("-", Value::Builtin(builtin_sub, "-"));
    env.define("*", Value::Builtin(builtin_mul, "*"));
    env.define("/", Value::Builtin(builtin_div, "/"));
    env.define("^", Value::Builtin(builtin_pow, "^"));
    env.define(">", Value::Builtin(builtin_gt, ">"));
    env.define(">=", Value::Builtin(builtin_ge, ">="));
    env.define("<", Value::Builtin(builtin_lt, "<"));
    env.define("<=", Value::Builtin(builtin_le, "<="));
    env.define("==", Value::Builtin(builtin_eq, "=="));
    env.define("!=", Value::Builtin(builtin_ne, "!="));
    env.define("&&", Value::Builtin(builtin_and, "&&"));
    env.define("||", Value::Builtin(builtin_or, "||"));
    env.define("!", Value::Builtin(builtin_not, "!"));
    env.define("sin", Value::Builtin(builtin_sin, "sin"));
    env.define("cos", Value::Builtin(builtin_cos, "cos"));
    env.define("tan", Value::Builtin(builtin_tan, "tan"));
    env.define("exp", Value::Builtin(builtin_exp, "exp"));
    env.define("log", Value::Builtin(builtin_log, "log"));
    env.define("mod", Value::Builtin(builtin_mod, "mod"));
    env.define("%", Value::Builtin(builtin_rem, "%"));
    env.define("out", Value::Builtin(builtin_out, "out"));
    env.define("ret", Value::Builtin(builtin_ret, "ret"));
}

// Operand helpers

fn numeric_operand(op: &'static str, value: &Value) -> Result<f64, EvalError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(type_mismatch(op, "number", other.type_name())),
    }
}

fn boolean_operand(op: &'static str, value: &Value) -> Result<bool, EvalError> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(type_mismatch(op, "bool", other.type_name())),
    }
}

fn binary_operands(op: &'static str, args: &[Value]) -> Result<(f64, f64), EvalError> {
    match args {
        [left, right] => Ok((numeric_operand(op, left)?, numeric_operand(op, right)?)),
        _ => Err(arity_mismatch(op, 2, args.len())),
    }
}

/// Left fold seeded with the first argument; at least one is required.
fn fold_from_first(op: &'static str, args: &[Value], apply: fn(f64, f64) -> f64) -> EvalResult {
    let (first, rest) = args
        .split_first()
        .ok_or_else(|| arity_mismatch(op, 1, 0))?;
    let mut acc = numeric_operand(op, first)?;
    for arg in rest {
        acc = apply(acc, numeric_operand(op, arg)?);
    }
    Ok(Value::Number(acc))
}

fn unary_numeric(op: &'static str, args: &[Value], apply: fn(f64) -> f64) -> EvalResult {
    match args {
        [value] => Ok(Value::Number(apply(numeric_operand(op, value)?))),
        _ => Err(arity_mismatch(op, 1, args.len())),
    }
}

fn numeric_comparison(op: &'static str, args: &[Value], cmp: fn(f64, f64) -> bool) -> EvalResult {
    let (left, right) = binary_operands(op, args)?;
    Ok(Value::Bool(cmp(left, right)))
}

// Arithmetic

fn builtin_add(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    let mut total = 0.0;
    for arg in args {
        total += numeric_operand("+", arg)?;
    }
    Ok(Value::Number(total))
}

fn builtin_mul(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    let mut product = 1.0;
    for arg in args {
        product *= numeric_operand("*", arg)?;
    }
    Ok(Value::Number(product))
}

fn builtin_sub(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    fold_from_first("-", args, |acc, n| acc - n)
}

/// Division by zero follows IEEE 754: it yields an infinity or NaN, not
/// an error.
fn builtin_div(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    fold_from_first("/", args, |acc, n| acc / n)
}

fn builtin_pow(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    let (base, exponent) = binary_operands("^", args)?;
    Ok(Value::Number(base.powf(exponent)))
}

fn builtin_mod(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    floating_remainder("mod", args)
}

fn builtin_rem(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    floating_remainder("%", args)
}

fn floating_remainder(op: &'static str, args: &[Value]) -> EvalResult {
    let (left, right) = binary_operands(op, args)?;
    Ok(Value::Number(left % right))
}

// Comparisons

fn builtin_gt(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    numeric_comparison(">", args, |a, b| a > b)
}

fn builtin_ge(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    numeric_comparison(">=", args, |a, b| a >= b)
}

fn builtin_lt(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    numeric_comparison("<", args, |a, b| a < b)
}

fn builtin_le(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    numeric_comparison("<=", args, |a, b| a <= b)
}

#[expect(
    clippy::float_cmp,
    reason = "numeric equality in the language is IEEE `==`"
)]
fn builtin_eq(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    numeric_comparison("==", args, |a, b| a == b)
}

#[expect(
    clippy::float_cmp,
    reason = "numeric inequality in the language is IEEE `!=`"
)]
fn builtin_ne(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    numeric_comparison("!=", args, |a, b| a != b)
}

// Boolean logic. Arguments are evaluated before the builtin runs, so
// `&&` and `||` do not short-circuit.

fn builtin_and(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    match args {
        [left, right] => Ok(Value::Bool(
            boolean_operand("&&", left)? && boolean_operand("&&", right)?,
        )),
        _ => Err(arity_mismatch("&&", 2, args.len())),
    }
}

fn builtin_or(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    match args {
        [left, right] => Ok(Value::Bool(
            boolean_operand("||", left)? || boolean_operand("||", right)?,
        )),
        _ => Err(arity_mismatch("||", 2, args.len())),
    }
}

fn builtin_not(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    match args {
        [value] => Ok(Value::Bool(!boolean_operand("!", value)?)),
        _ => Err(arity_mismatch("!", 1, args.len())),
    }
}

// Transcendental functions

fn builtin_sin(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    unary_numeric("sin", args, f64::sin)
}

fn builtin_cos(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    unary_numeric("cos", args, f64::cos)
}

fn builtin_tan(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    unary_numeric("tan", args, f64::tan)
}

fn builtin_exp(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    unary_numeric("exp", args, f64::exp)
}

/// Natural logarithm.
fn builtin_log(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    unary_numeric("log", args, f64::ln)
}

// Effects

/// Print the arguments space-separated on one line. Returns no value.
fn builtin_out(ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    ev.print_handler().println(&line);
    Ok(Value::Void)
}

/// Return the first argument unchanged.
fn builtin_ret(_ev: &mut Evaluator, args: &[Value]) -> EvalResult {
    match args.first() {
        Some(value) => Ok(value.clone()),
        None => Err(arity_mismatch("ret", 1, 0)),
    }
}
