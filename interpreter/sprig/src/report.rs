//! Rendering parse and evaluation diagnostics against source text.
//!
//! Reports go to stderr through [`ariadne`], with the offending span
//! underlined in the unit it came from. `name` identifies the unit in
//! the report header: `demo.sp:3` for the unit starting on line 3 of a
//! script, `<repl>` for interactive input.

use crate::session::UnitError;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use sprig_eval::EvalError;
use sprig_parse::ParseError;
use std::io::IsTerminal;

fn config() -> Config {
    Config::default().with_color(std::io::stderr().is_terminal())
}

/// Render a reader failure. Errors that remember an opening bracket
/// get a secondary label pointing at it.
pub fn parse_error(name: &str, source: &str, err: &ParseError) {
    let mut report = Report::build(ReportKind::Error, name, err.span.start as usize)
        .with_config(config())
        .with_message(err.to_string())
        .with_label(Label::new((name, err.span.range())).with_color(Color::Red));
    if let Some(opened_at) = err.opened_at() {
        report = report.with_label(
            Label::new((name, opened_at.range()))
                .with_message("list opened here")
                .with_color(Color::Blue),
        );
    }
    let _ = report.finish().eprint((name, Source::from(source)));
}

/// Render an evaluation failure. Errors that carry no span fall back
/// to a bare line.
pub fn eval_error(name: &str, source: &str, err: &EvalError) {
    let Some(span) = err.span else {
        eprintln!("Error: {err}");
        return;
    };
    let report = Report::build(ReportKind::Error, name, span.start as usize)
        .with_config(config())
        .with_message(err.to_string())
        .with_label(Label::new((name, span.range())).with_color(Color::Red));
    let _ = report.finish().eprint((name, Source::from(source)));
}

/// Render a collected warning, e.g. an unbound identifier.
pub fn eval_warning(name: &str, source: &str, warning: &EvalError) {
    let Some(span) = warning.span else {
        eprintln!("Warning: {warning}");
        return;
    };
    let report = Report::build(ReportKind::Warning, name, span.start as usize)
        .with_config(config())
        .with_message(warning.to_string())
        .with_label(Label::new((name, span.range())).with_color(Color::Yellow));
    let _ = report.finish().eprint((name, Source::from(source)));
}

/// Render whichever failure ended a unit.
pub fn unit_error(name: &str, source: &str, err: &UnitError) {
    match err {
        UnitError::Parse(parse) => parse_error(name, source, parse),
        UnitError::Eval(eval) => eval_error(name, source, eval),
    }
}
