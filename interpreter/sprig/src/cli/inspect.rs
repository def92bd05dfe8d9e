//! Token and tree dumps for debugging scripts.
//!
//! Both commands segment the file the same way `run` does, then show
//! what the pipeline sees for each unit.

use sprig::report;
use sprig::script::{self, Script};
use sprig_ir::TokenKind;
use sprig_lexer::Lexer;
use sprig_parse::{ParseError, Reader};
use std::fs;

/// Print the token stream of every unit in a file.
pub fn lex_file_and_print(path: &str) {
    let source = read_or_exit(path);
    let script = script::segment(&source);
    let mut clean = true;
    for unit in &script.units {
        println!("{path}:{}:", unit.line);
        let mut lexer = Lexer::new(&unit.text);
        loop {
            match lexer.next_token() {
                Ok(token) => {
                    if matches!(token.kind, TokenKind::Eof) {
                        break;
                    }
                    println!("  {:?} @ {}", token.kind, token.span);
                }
                Err(err) => {
                    let name = format!("{path}:{}", unit.line);
                    report::parse_error(&name, &unit.text, &ParseError::from(err));
                    clean = false;
                    break;
                }
            }
        }
    }
    if !report_unterminated(&script, path) {
        clean = false;
    }
    if !clean {
        std::process::exit(1);
    }
}

/// Print the expression trees of every unit in a file.
pub fn parse_file_and_print(path: &str) {
    let source = read_or_exit(path);
    let script = script::segment(&source);
    let mut clean = true;
    for unit in &script.units {
        println!("{path}:{}:", unit.line);
        match Reader::new(&unit.text).read_all() {
            Ok(exprs) => {
                for expr in &exprs {
                    println!("  {expr} @ {}", expr.span);
                }
            }
            Err(err) => {
                let name = format!("{path}:{}", unit.line);
                report::parse_error(&name, &unit.text, &err);
                clean = false;
            }
        }
    }
    if !report_unterminated(&script, path) {
        clean = false;
    }
    if !clean {
        std::process::exit(1);
    }
}

fn read_or_exit(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: could not read '{path}': {err}");
            std::process::exit(1);
        }
    }
}

fn report_unterminated(script: &Script, path: &str) -> bool {
    if let Some(block) = script.unterminated {
        eprintln!("Error: {path}: {block}");
        return false;
    }
    true
}
