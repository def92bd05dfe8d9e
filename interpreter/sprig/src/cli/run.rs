//! Run command: segment a script and evaluate it unit by unit.
//!
//! One unit failing does not stop the script; the failure is rendered
//! and the next unit runs in the same session. The process exit code
//! reflects whether anything failed.

use sprig::report;
use sprig::script;
use sprig::session::Session;
use std::fs;
use tracing::debug;

/// Evaluate a script file, rendering failures as they happen. Exits
/// nonzero when the file cannot be read or any unit failed.
pub fn run_file_and_print(path: &str) {
    match run_file(path) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
    }
}

/// Run a script file. `Ok(true)` means every unit ran clean.
pub fn run_file(path: &str) -> Result<bool, String> {
    let source = fs::read_to_string(path)
        .map_err(|err| format!("could not read '{path}': {err}"))?;
    Ok(run_source(&source, path))
}

/// Evaluate every unit of `source` in one session, reporting failures
/// and warnings without stopping.
pub fn run_source(source: &str, path: &str) -> bool {
    let script = script::segment(source);
    let mut session = Session::new();
    let mut clean = true;
    for unit in &script.units {
        debug!(line = unit.line, text = %unit.text, "unit");
        let name = format!("{path}:{}", unit.line);
        if let Err(err) = session.eval_source(&unit.text) {
            report::unit_error(&name, &unit.text, &err);
            clean = false;
        }
        for warning in session.take_warnings() {
            report::eval_warning(&name, &unit.text, &warning);
        }
    }
    if let Some(block) = script.unterminated {
        eprintln!("Error: {path}: {block}");
        clean = false;
    }
    clean
}
