//! The tree-walking evaluator.
//!
//! [`Evaluator::eval`] dispatches on expression shape: atoms evaluate
//! to themselves or to their binding, lists to special forms (`set`,
//! `if`, `fn`, `for`) or to application of a callable. Failures
//! propagate as results and never abort the process; an unbound
//! bareword instead falls back to self-evaluation and is recorded as a
//! warning for the front end to surface.


use crate::environment::Environment;
use crate::errors::{
    arity_mismatch, recursion_limit_exceeded, structural, unbound_identifier, EvalError,
    EvalResult,
};
use crate::print_handler::PrintHandler;
use crate::stack::ensure_sufficient_stack;
use crate::value::{FunctionValue, Value};
use sprig_ir::{Expr, ExprKind, Span};
use std::rc::Rc;
use tracing::{debug, trace};

/// Hard cap on evaluation nesting depth.
///
/// Every recursive `eval` entry draws from the same budget, so user
/// recursion, expression nesting, and loop bodies are all bounded
/// together. `stacker` keeps the host stack ahead of this limit.
pub const MAX_EVAL_DEPTH: usize = 4096;

/// Evaluates expression trees against an environment.
///
/// Owns what outlives a single expression: the `out` destination and
/// the warnings collected since the last drain. The environment is
/// passed per call, so one evaluator serves a whole session.
pub struct Evaluator {
    print: Rc<PrintHandler>,
    warnings: Vec<EvalError>,
    depth: usize,
}

impl Evaluator {
    /// Evaluator whose `out` writes to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(PrintHandler::stdout())
    }

    /// Evaluator with a caller-chosen `out` destination.
    pub fn with_print_handler(print: Rc<PrintHandler>) -> Self {
        Evaluator {
            print,
            warnings: Vec::new(),
            depth: 0,
        }
    }

    /// The handler `out` writes through.
    pub fn print_handler(&self) -> &PrintHandler {
        &self.print
    }

    /// Drain the warnings collected since the last drain.
    pub fn take_warnings(&mut self) -> Vec<EvalError> {
        std::mem::take(&mut self.warnings)
    }

    /// Evaluate one expression in `env`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        if self.depth >= MAX_EVAL_DEPTH {
            return Err(recursion_limit_exceeded(MAX_EVAL_DEPTH).with_span(expr.span));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.eval_expr(expr, env));
        self.depth -= 1;
        result
    }

    fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match &expr.kind {
            ExprKind::Number(n) => Ok(Value::Number(*n)),
            ExprKind::Word(word) => self.eval_word(word, expr.span, env),
            ExprKind::List(items) => self.eval_list(expr.span, items, env),
        }
    }

    /// The literal spellings `true`/`false` win over any binding; an
    /// unbound word evaluates to itself and leaves a warning behind.
    fn eval_word(&mut self, word: &Rc<str>, span: Span, env: &Environment) -> EvalResult {
        match word.as_ref() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => {
                if let Some(value) = env.get(word) {
                    Ok(value)
                } else {
                    self.warnings.push(unbound_identifier(word).with_span(span));
                    Ok(Value::Str(Rc::clone(word)))
                }
            }
        }
    }

    fn eval_list(&mut self, span: Span, items: &[Expr], env: &Environment) -> EvalResult {
        let Some(head) = items.first() else {
            return Ok(Value::Void);
        };
        let ExprKind::Word(name) = &head.kind else {
            // A lone non-word element is inert, not a malformed
            // application.
            if items.len() < 2 {
                return Ok(Value::Void);
            }
            return Err(structural("list head must be a word").with_span(head.span));
        };
        // Special forms engage only with operands present; a bare
        // `(set)` is an ordinary one-element list.
        if items.len() < 2 {
            return self.eval_application(name, head.span, &[], env, span);
        }
        match name.as_ref() {
            "set" | "=" => self.eval_set(name, items, env, span),
            "if" => self.eval_if(items, env, span),
            "fn" => self.eval_fn(items, env, span),
            "for" => self.eval_for(items, env, span),
            _ => self.eval_application(name, head.span, &items[1..], env, span),
        }
    }

    /// `(set name expr)` and its `=` alias: bind and yield the value.
    fn eval_set(&mut self, form: &str, items: &[Expr], env: &Environment, span: Span) -> EvalResult {
        let [_, target, value_expr] = items else {
            return Err(
                structural(format!("`{form}` expects a name and a value expression"))
                    .with_span(span),
            );
        };
        let ExprKind::Word(name) = &target.kind else {
            return Err(structural(format!("`{form}` target must be a word")).with_span(target.span));
        };
        let value = self.eval(value_expr, env)?;
        trace!(name = %name, "set");
        env.set(Rc::clone(name), value.clone());
        Ok(value)
    }

    fn eval_if(&mut self, items: &[Expr], env: &Environment, span: Span) -> EvalResult {
        let (cond_expr, then_expr, else_expr) = match items {
            [_, cond, then] => (cond, then, None),
            [_, cond, then, else_branch] => (cond, then, Some(else_branch)),
            _ => {
                return Err(
                    structural("`if` expects a condition and one or two branches").with_span(span),
                );
            }
        };
        // Branch shape is checked before the condition runs, so a
        // malformed branch is reported even when it would not have been
        // taken.
        let then_body = block_items("if", then_expr)?;
        let else_body = else_expr.map(|e| block_items("if", e)).transpose()?;
        if self.boolean_condition("if", cond_expr, env)? {
            self.eval_block(then_body, env)
        } else if let Some(body) = else_body {
            self.eval_block(body, env)
        } else {
            Ok(Value::Void)
        }
    }

    /// `(fn name [params] {body})`: build the closure, bind the name in
    /// the caller, and bind it again inside the captured frame so the
    /// body can call itself.
    fn eval_fn(&mut self, items: &[Expr], env: &Environment, span: Span) -> EvalResult {
        let [_, name_expr, params_expr, body_expr] = items else {
            return Err(
                structural("`fn` expects a name, a parameter list, and a body").with_span(span),
            );
        };
        let ExprKind::Word(name) = &name_expr.kind else {
            return Err(structural("`fn` name must be a word").with_span(name_expr.span));
        };
        let ExprKind::List(param_items) = &params_expr.kind else {
            return Err(
                structural("`fn` parameter list must be bracketed").with_span(params_expr.span),
            );
        };
        let mut params = Vec::with_capacity(param_items.len());
        for param in param_items {
            let ExprKind::Word(param_name) = &param.kind else {
                return Err(structural("`fn` parameters must be words").with_span(param.span));
            };
            params.push(Rc::clone(param_name));
        }
        let body = block_items("fn", body_expr)?;
        debug!(name = %name, params = params.len(), "define fn");

        let captured = env.extend();
        let function = Value::Function(Rc::new(FunctionValue {
            name: Rc::clone(name),
            params,
            body: body.into(),
            env: captured.clone(),
        }));
        // Self-reference resolves against the definition, not whatever
        // the caller later rebinds the name to.
        captured.define(Rc::clone(name), function.clone());
        env.set(Rc::clone(name), function.clone());
        Ok(function)
    }

    /// `(for cond {body})`: one scope for the whole loop, so bindings
    /// accumulate across iterations instead of resetting.
    fn eval_for(&mut self, items: &[Expr], env: &Environment, span: Span) -> EvalResult {
        let [_, cond_expr, body_expr] = items else {
            return Err(structural("`for` expects a condition and a body").with_span(span));
        };
        let body = block_items("for", body_expr)?;
        let scope = env.extend();
        while self.boolean_condition("for", cond_expr, &scope)? {
            for expr in body {
                self.eval(expr, &scope)?;
            }
        }
        Ok(Value::Void)
    }

    fn eval_application(
        &mut self,
        name: &Rc<str>,
        name_span: Span,
        operands: &[Expr],
        env: &Environment,
        span: Span,
    ) -> EvalResult {
        match env.get(name) {
            Some(Value::Builtin(call, op)) => {
                let args = self.eval_args(operands, env)?;
                trace!(op, args = args.len(), "builtin");
                call(self, &args).map_err(|err| err.with_span(span))
            }
            Some(Value::Function(function)) => {
                let args = self.eval_args(operands, env)?;
                self.call_function(&function, args, span)
            }
            // A head bound to a plain value applies to nothing.
            Some(_) => Ok(Value::Void),
            None => {
                self.warnings
                    .push(unbound_identifier(name).with_span(name_span));
                Ok(Value::Void)
            }
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn call_function(
        &mut self,
        function: &Rc<FunctionValue>,
        args: Vec<Value>,
        span: Span,
    ) -> EvalResult {
        if args.len() != function.params.len() {
            return Err(
                arity_mismatch(&function.name, function.params.len(), args.len()).with_span(span),
            );
        }
        debug!(name = %function.name, args = args.len(), "call");
        let call_env = function.env.extend();
        for (param, arg) in function.params.iter().zip(args) {
            call_env.define(Rc::clone(param), arg);
        }
        let mut result = Value::Void;
        for expr in function.body.iter() {
            result = self.eval(expr, &call_env)?;
        }
        Ok(result)
    }

    fn eval_args(&mut self, operands: &[Expr], env: &Environment) -> Result<Vec<Value>, EvalError> {
        let mut args = Vec::with_capacity(operands.len());
        for operand in operands {
            args.push(self.eval(operand, env)?);
        }
        Ok(args)
    }

    /// Evaluate a block in a fresh child scope; the last value wins and
    /// an empty block is no value.
    fn eval_block(&mut self, body: &[Expr], env: &Environment) -> EvalResult {
        let scope = env.extend();
        let mut result = Value::Void;
        for expr in body {
            result = self.eval(expr, &scope)?;
        }
        Ok(result)
    }

    fn boolean_condition(
        &mut self,
        form: &'static str,
        cond: &Expr,
        env: &Environment,
    ) -> Result<bool, EvalError> {
        match self.eval(cond, env)? {
            Value::Bool(b) => Ok(b),
            other => Err(structural(format!(
                "`{form}` condition must be a bool, got {}",
                other.type_name()
            ))
            .with_span(cond.span)),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// The expressions of a branch or body that must be a bracketed list.
fn block_items<'a>(form: &'static str, expr: &'a Expr) -> Result<&'a [Expr], EvalError> {
    match &expr.kind {
        ExprKind::List(items) => Ok(items),
        _ => Err(structural(format!(
            "`{form}` body must be a bracketed sequence, got a bare atom"
        ))
        .with_span(expr.span)),
    }
}
