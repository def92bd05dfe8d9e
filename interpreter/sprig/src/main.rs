//! Sprig interpreter CLI.

use std::env;

mod cli;

fn main() {
    sprig::init_tracing();

    let args: Vec<String> = env::args().collect();

    // No arguments starts the interactive session.
    if args.len() < 2 {
        cli::repl::start();
        return;
    }

    match args[1].as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: sprig run <file.sp>");
                std::process::exit(1);
            }
            cli::run::run_file_and_print(&args[2]);
        }
        "repl" => cli::repl::start(),
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: sprig lex <file.sp>");
                std::process::exit(1);
            }
            cli::inspect::lex_file_and_print(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: sprig parse <file.sp>");
                std::process::exit(1);
            }
            cli::inspect::parse_file_and_print(&args[2]);
        }
        "-h" | "--help" | "help" => {
            cli::print_usage();
        }
        "-V" | "--version" | "version" => {
            println!("sprig {}", env!("CARGO_PKG_VERSION"));
        }
        // Shorthand: `sprig file.sp` means `sprig run file.sp`.
        arg if arg.ends_with(".sp") => {
            cli::run::run_file_and_print(arg);
        }
        cmd => {
            eprintln!("Unknown command: {cmd}");
            cli::print_usage();
            std::process::exit(1);
        }
    }
}
