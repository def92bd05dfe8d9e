//! A persistent interpreter session.
//!
//! [`Session`] pairs one environment, seeded with the builtin table,
//! with one evaluator. Feeding it units one at a time is how both the
//! file runner and the interactive loop work: bindings made by one
//! unit are visible to the next.

use sprig_eval::{
    register_builtins, Environment, EvalError, Evaluator, PrintHandler, Value,
};
use sprig_parse::{ParseError, Reader};
use std::rc::Rc;
use thiserror::Error;
use tracing::trace;

/// Why a unit stopped early. Either the reader rejected the text or
/// evaluation of one of its expressions failed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum UnitError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// One environment plus one evaluator, reused across units.
pub struct Session {
    env: Environment,
    evaluator: Evaluator,
}

impl Session {
    /// A session whose `out` builtin writes to stdout.
    #[must_use]
    pub fn new() -> Self {
        Session::with_print_handler(PrintHandler::stdout())
    }

    /// A session with a caller-chosen print handler, e.g. a buffer in
    /// tests.
    #[must_use]
    pub fn with_print_handler(print: Rc<PrintHandler>) -> Self {
        let env = Environment::new();
        register_builtins(&env);
        Session {
            env,
            evaluator: Evaluator::with_print_handler(print),
        }
    }

    /// Read `source` as a sequence of expressions and evaluate them in
    /// order against the session environment. Values come back in the
    /// same order; the first failure ends the unit.
    pub fn eval_source(&mut self, source: &str) -> Result<Vec<Value>, UnitError> {
        let exprs = Reader::new(source).read_all()?;
        trace!(count = exprs.len(), "unit read");
        let mut values = Vec::with_capacity(exprs.len());
        for expr in &exprs {
            values.push(self.evaluator.eval(expr, &self.env)?);
        }
        Ok(values)
    }

    /// Drain the warnings collected since the last call.
    pub fn take_warnings(&mut self) -> Vec<EvalError> {
        self.evaluator.take_warnings()
    }

    /// The handler `out` writes through.
    #[must_use]
    pub fn print_handler(&self) -> &PrintHandler {
        self.evaluator.print_handler()
    }

    /// The session's root environment.
    #[must_use]
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
