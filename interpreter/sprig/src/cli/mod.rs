//! CLI commands for the Sprig interpreter.
//!
//! - `run` segments a script file and evaluates it unit by unit
//! - `repl` starts the interactive session
//! - `lex` and `parse` show the pipeline's view of each unit

pub mod inspect;
pub mod repl;
pub mod run;

/// Print usage information.
pub fn print_usage() {
    eprintln!("Sprig interpreter v{}", env!("CARGO_PKG_VERSION"));
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  sprig run <file.sp>      Evaluate a script");
    eprintln!("  sprig repl               Start an interactive session");
    eprintln!("  sprig lex <file.sp>      Print each unit's token stream");
    eprintln!("  sprig parse <file.sp>    Print each unit's expression trees");
    eprintln!("  sprig <file.sp>          Evaluate a script (shorthand for run)");
    eprintln!();
    eprintln!("With no arguments, sprig starts the interactive session.");
}
