//! End-to-end tests for the Sprig front end.
//!
//! These drive the same pieces the binary wires together: scripts are
//! carved by `script::segment` and run through one persistent
//! [`Session`], with `out` captured in a buffer.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use sprig::script;
use sprig::session::{Session, UnitError};
use sprig_eval::{PrintHandler, Value};

/// Run every unit of a script in one buffered session, panicking on
/// the first failure.
fn run_script(source: &str) -> (Session, String) {
    let mut session = Session::with_print_handler(PrintHandler::buffer());
    for unit in script::segment(source).units {
        session
            .eval_source(&unit.text)
            .expect("unit should run clean");
    }
    let output = session.print_handler().captured();
    (session, output)
}

/// Run every unit, collecting failures instead of stopping.
fn run_script_collecting(source: &str) -> (Session, String, Vec<UnitError>) {
    let mut session = Session::with_print_handler(PrintHandler::buffer());
    let mut failures = Vec::new();
    for unit in script::segment(source).units {
        if let Err(err) = session.eval_source(&unit.text) {
            failures.push(err);
        }
    }
    let output = session.print_handler().captured();
    (session, output, failures)
}

// ======================================================================
// Script segmentation end to end
// ======================================================================

mod scripts {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn units_share_one_session_top_to_bottom() {
        let (_, output) = run_script("(set total 0)\n(set total (+ total 5))\n(out total)\n");
        assert_eq!(output, "5\n");
    }

    #[test]
    fn prose_between_expressions_is_commentary() {
        let source = "\
Totals come first.
(set total 12)
Then we show them (out total) and stop.
";
        let (_, output) = run_script(source);
        assert_eq!(output, "12\n");
    }

    #[test]
    fn a_block_defines_a_function_across_lines() {
        let source = "\
S:
(fn avg [a b]        # two-arg mean
  {(/ (+ a b) 2)})
:E
(out (avg 8 4))
";
        let (_, output) = run_script(source);
        assert_eq!(output, "6\n");
    }

    #[test]
    fn an_erroring_unit_does_not_stop_the_script() {
        let (_, output, failures) = run_script_collecting("(set a 1)\n(+ true 1)\n(out a)\n");
        assert_eq!(failures.len(), 1);
        assert_eq!(output, "1\n");
    }

    #[test]
    fn units_before_an_open_block_still_run() {
        let script = script::segment("(out 7)\nS:\n(set a 2)\n");
        assert!(script.unterminated.is_some());
        let mut session = Session::with_print_handler(PrintHandler::buffer());
        for unit in &script.units {
            session.eval_source(&unit.text).unwrap();
        }
        assert_eq!(session.print_handler().captured(), "7\n");
    }
}

// ======================================================================
// Whole programs
// ======================================================================

mod programs {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recursive_fibonacci() {
        let source = "\
S:
(fn fib [n]
  {(if (< n 2)
     {n}
     {(+ (fib (- n 1)) (fib (- n 2)))})})
:E
(out (fib 10))
";
        let (_, output) = run_script(source);
        assert_eq!(output, "55\n");
    }

    #[test]
    fn a_closure_counts_through_its_captured_frame() {
        let source = "\
(set n 0)
(fn tick [] {(set n (+ n 1)) n})
(out (tick) (tick) (tick))
";
        let (_, output) = run_script(source);
        assert_eq!(output, "1 2 3\n");
    }

    #[test]
    fn a_loop_sums_squares() {
        let source = "\
(set total 0)
(set i 1)
(for (<= i 5) {(set total (+ total (* i i))) (set i (+ i 1))})
(out total)
";
        let (session, output) = run_script(source);
        assert_eq!(output, "55\n");
        assert!(session.env().contains("total"));
    }

    #[test]
    fn bracket_kinds_group_interchangeably() {
        let (_, output) = run_script("(out [+ 1 2] {* 2 3})\n");
        assert_eq!(output, "3 6\n");
    }
}

// ======================================================================
// Diagnostics surfaced through the session
// ======================================================================

mod diagnostics {
    use super::*;
    use pretty_assertions::assert_eq;
    use sprig_eval::EvalErrorKind;
    use sprig_ir::Span;

    #[test]
    fn unbound_identifiers_warn_and_self_evaluate() {
        let mut session = Session::with_print_handler(PrintHandler::buffer());
        session.eval_source("(out greeting)").unwrap();
        assert_eq!(session.print_handler().captured(), "greeting\n");
        let warnings = session.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].kind,
            EvalErrorKind::UnboundIdentifier {
                name: "greeting".to_string()
            }
        );
    }

    #[test]
    fn arity_mismatches_name_the_function() {
        let mut session = Session::with_print_handler(PrintHandler::silent());
        session.eval_source("(fn double [n] {(* n 2)})").unwrap();
        let err = session.eval_source("(double 1 2)").unwrap_err();
        let UnitError::Eval(err) = err else {
            panic!("expected an eval error, got {err:?}");
        };
        assert_eq!(
            err.kind,
            EvalErrorKind::ArityMismatch {
                name: "double".to_string(),
                expected: 1,
                got: 2
            }
        );
    }

    #[test]
    fn parse_failures_remember_the_open_bracket() {
        let mut session = Session::with_print_handler(PrintHandler::silent());
        let err = session.eval_source("(+ 1 2").unwrap_err();
        let UnitError::Parse(err) = err else {
            panic!("expected a parse error, got {err:?}");
        };
        assert_eq!(err.opened_at(), Some(Span::new(0, 1)));
    }

    #[test]
    fn set_results_come_back_to_the_caller() {
        let mut session = Session::with_print_handler(PrintHandler::silent());
        let values = session.eval_source("(set a 4) (= a 9)").unwrap();
        assert_eq!(values, vec![Value::Number(4.0), Value::Number(9.0)]);
    }
}
