use std::fs;

use arithtree::{
    ast::Expr,
    evaluate, get_result,
    interpreter::{
        evaluator::core::{Context, OverflowPolicy},
        loader::load_tree_file,
    },
};
use serde::Deserialize;
use walkdir::WalkDir;

/// A stored tree with its expected value; `null` means evaluation fails.
#[derive(Deserialize)]
struct Fixture {
    expected: Option<i64>,
    tree:     Expr,
}

#[test]
fn stored_trees_evaluate_as_recorded() {
    let mut count = 0;

    for entry in WalkDir::new("tests/trees").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path().extension().is_some_and(|ext| ext == "json")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let fixture: Fixture = serde_json::from_str(&content).unwrap_or_else(|e| {
                                                                  panic!("Invalid fixture {path:?}: {e}")
                                                              });

        count += 1;
        assert_eq!(evaluate(&fixture.tree).ok(),
                   fixture.expected,
                   "Tree in {path:?} evaluated unexpectedly: {}",
                   fixture.tree);
    }

    assert!(count > 0, "No stored trees found in tests/trees");
}

fn assert_value(src: &str, expected: i64) {
    match get_result(src, &Context::new()) {
        Ok(value) => assert_eq!(value, expected, "Tree {src} evaluated to {value}"),
        Err(e) => panic!("Tree failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if get_result(src, &Context::new()).is_ok() {
        panic!("Tree succeeded but was expected to fail")
    }
}

#[test]
fn inline_sources() {
    assert_value(r#"{"Number":-7}"#, -7);
    assert_value(r#"{"Addition":[{"Number":5},{"Number":4}]}"#, 9);
    assert_value(r#"{"Multiplication":[{"Addition":[{"Number":5},{"Number":4}]},{"Number":2}]}"#,
                 18);
}

#[test]
fn malformed_sources_are_errors() {
    assert_failure("");
    assert_failure(r#"{"Number":"5"}"#);
    assert_failure(r#"{"Division":[{"Number":1},{"Number":0}]}"#);
    assert_failure(r#"{"Addition":[{"Number":1},{"Number":2},{"Number":3}]}"#);
}

#[test]
fn overflow_is_an_error_unless_opted_out() {
    let src = r#"{"Addition":[{"Number":9223372036854775807},{"Number":1}]}"#;

    assert_failure(src);

    let wrapping = Context::new().with_overflow(OverflowPolicy::Wrapping);
    assert_eq!(get_result(src, &wrapping).unwrap(), i64::MIN);
}

#[test]
fn tree_file_loads() {
    let expr = load_tree_file("tests/product.tree").expect("missing file");

    assert_eq!(expr,
               Expr::multiplication(Expr::addition(Expr::number(5), Expr::number(4)),
                                    Expr::number(2)));
    assert_eq!(evaluate(&expr), Ok(18));
}
