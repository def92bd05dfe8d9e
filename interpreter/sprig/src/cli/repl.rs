//! Interactive read-eval-print loop.
//!
//! One [`Session`] lives for the whole loop, so bindings and function
//! definitions persist from line to line. Values are echoed back;
//! `Void` results stay silent.

use sprig::report;
use sprig::session::Session;
use sprig_eval::Value;
use std::io::{self, Write};

const SOURCE_NAME: &str = "<repl>";

/// Start the interactive loop on stdin.
pub fn start() {
    let mut session = Session::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = input.trim();

        match input {
            "" => {}
            ":quit" | ":q" | "exit" => break,
            ":help" | ":h" => print_help(),
            _ => eval_line(&mut session, input),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :quit, :q, exit   Leave the session");
    println!("  :help, :h         Show this help");
    println!("Anything else is read as Sprig source and evaluated.");
}

fn eval_line(session: &mut Session, line: &str) {
    match session.eval_source(line) {
        Ok(values) => {
            for value in values {
                if !matches!(value, Value::Void) {
                    println!("{value}");
                }
            }
        }
        Err(err) => report::unit_error(SOURCE_NAME, line, &err),
    }
    for warning in session.take_warnings() {
        report::eval_warning(SOURCE_NAME, line, &warning);
    }
}
