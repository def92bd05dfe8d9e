//! Property-based tests for the reader.
//!
//! Random inputs, both well-formed trees and arbitrary byte soup, must
//! never panic the reader, and rendered trees must read back to the same
//! shape.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use sprig_ir::ExprKind;
use sprig_parse::Reader;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

const BRACKET_PAIRS: &[(&str, &str)] = &[("(", ")"), ("{", "}"), ("[", "]")];

/// Strategy for numeric atoms the lexer accepts.
fn arb_number() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1000i64..=1000).prop_map(|n| n.to_string()),
        (0.0f64..1000.0).prop_map(|f| format!("{f:.2}")),
    ]
}

/// Strategy for bareword atoms: names and operator symbols.
fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9]{0,6}".prop_map(|s| s),
        Just("+".to_owned()),
        Just("*".to_owned()),
        Just("==".to_owned()),
        Just("true".to_owned()),
        Just("false".to_owned()),
    ]
}

fn arb_atom() -> impl Strategy<Value = String> {
    prop_oneof![arb_number(), arb_word()]
}

/// Strategy for well-formed expression trees, rendered as source text
/// using a random bracket kind at each level.
fn arb_tree() -> impl Strategy<Value = String> {
    arb_atom().prop_recursive(4, 48, 6, |inner| {
        (
            prop::sample::select(BRACKET_PAIRS),
            prop::collection::vec(inner, 0..6),
        )
            .prop_map(|((open, close), items)| format!("{open}{}{close}", items.join(" ")))
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The reader returns a value or an error for any input; it never panics.
    #[test]
    fn reader_no_panic(input in "[ \\t\\n(){}\\[\\]a-z0-9.+*/=<>!&|%^-]{0,200}") {
        let _ = Reader::new(&input).read_all();
    }

    /// Arbitrary unicode is also safe (words can hold any non-bracket text).
    #[test]
    fn reader_no_panic_on_unicode(input in ".{0,80}") {
        let _ = Reader::new(&input).read_all();
    }

    /// Every well-formed tree reads as exactly one expression.
    #[test]
    fn well_formed_tree_reads(src in arb_tree()) {
        let exprs = Reader::new(&src).read_all().unwrap();
        prop_assert_eq!(exprs.len(), 1, "one tree expected for: {}", src);
    }

    /// Rendering a tree and reading it back reaches a fixpoint: the
    /// second render equals the first.
    #[test]
    fn rendered_trees_reread(src in arb_tree()) {
        let first = Reader::new(&src).read_all().unwrap();
        let rendered = first
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let second = Reader::new(&rendered).read_all().unwrap();
        let rerendered = second
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        prop_assert_eq!(rendered, rerendered);
    }

    /// Reading the same source twice yields identical trees, spans included.
    #[test]
    fn reader_deterministic(src in arb_tree()) {
        let a = Reader::new(&src).read_all().unwrap();
        let b = Reader::new(&src).read_all().unwrap();
        prop_assert_eq!(a, b);
    }
}

// ============================================================================
// Edge cases worth pinning down exactly
// ============================================================================

#[test]
fn deeply_nested_brackets_read() {
    let depth = 64;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let exprs = Reader::new(&src).read_all().unwrap();
    assert_eq!(exprs.len(), 1);

    let mut expr = &exprs[0];
    for _ in 0..depth {
        match &expr.kind {
            ExprKind::List(items) => {
                assert_eq!(items.len(), 1);
                expr = &items[0];
            }
            other => panic!("expected a list, got {other:?}"),
        }
    }
    assert_eq!(expr.kind, ExprKind::Number(1.0));
}

#[test]
fn long_words_stay_whole() {
    let word = "w".repeat(200);
    let exprs = Reader::new(&word).read_all().unwrap();
    assert_eq!(exprs.len(), 1);
    assert_eq!(exprs[0].to_string(), word);
}

#[test]
fn wide_lists_read() {
    let items: Vec<String> = (0..100).map(|i| i.to_string()).collect();
    let src = format!("({})", items.join(" "));
    let expr = Reader::new(&src).read_expr().unwrap();
    match expr.kind {
        ExprKind::List(items) => assert_eq!(items.len(), 100),
        other => panic!("expected a list, got {other:?}"),
    }
}
