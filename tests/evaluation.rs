use std::thread;

use arithtree::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    evaluate,
    interpreter::evaluator::core::{Context, OverflowPolicy, Strategy as Traversal},
};
use proptest::prelude::*;

fn num(value: i64) -> Expr {
    Expr::number(value)
}

fn add(left: Expr, right: Expr) -> Expr {
    Expr::addition(left, right)
}

fn mul(left: Expr, right: Expr) -> Expr {
    Expr::multiplication(left, right)
}

/// A right-nested chain of `leaves` ones joined by additions.
fn ones(leaves: usize) -> Expr {
    let mut expr = num(1);
    for _ in 1..leaves {
        expr = add(num(1), expr);
    }
    expr
}

fn contexts() -> [Context; 2] {
    let iterative = Context::new();
    [iterative, iterative.with_strategy(Traversal::Recursive)]
}

#[test]
fn tutorial_scenarios() {
    let cases = [(num(5), 5),
                 (add(num(5), num(4)), 9),
                 (mul(add(num(5), num(4)), num(2)), 18),
                 (mul(num(0), num(999)), 0),
                 (add(num(-3), num(3)), 0)];

    for (expr, expected) in cases {
        for context in contexts() {
            assert_eq!(context.eval(&expr), Ok(expected), "{expr} with {context:?}");
        }
    }
}

#[test]
fn leaf_evaluates_to_itself_at_the_bounds() {
    for value in [i64::MIN, -1, 0, 1, i64::MAX] {
        assert_eq!(evaluate(&num(value)), Ok(value));
    }
}

#[test]
fn checked_overflow_is_an_error() {
    let expr = add(num(i64::MAX), num(1));
    assert_eq!(evaluate(&expr),
               Err(RuntimeError::Overflow { op:    BinaryOperator::Add,
                                            left:  i64::MAX,
                                            right: 1, }));

    let expr = mul(num(i64::MIN), num(-1));
    assert_eq!(evaluate(&expr),
               Err(RuntimeError::Overflow { op:    BinaryOperator::Mul,
                                            left:  i64::MIN,
                                            right: -1, }));
}

#[test]
fn overflow_inside_a_subtree_propagates() {
    // The overflow is hidden behind a multiplication by zero, but still fails.
    let expr = mul(num(0), add(num(i64::MAX), num(1)));

    assert!(matches!(evaluate(&expr), Err(RuntimeError::Overflow { .. })));
}

#[test]
fn wrapping_and_saturating_policies() {
    let expr = add(num(i64::MAX), num(1));

    let wrapping = Context::new().with_overflow(OverflowPolicy::Wrapping);
    let saturating = Context::new().with_overflow(OverflowPolicy::Saturating);
    assert_eq!(wrapping.eval(&expr), Ok(i64::MIN));
    assert_eq!(saturating.eval(&expr), Ok(i64::MAX));

    let expr = mul(num(i64::MIN), num(3));
    assert_eq!(wrapping.eval(&expr), Ok(i64::MIN));
    assert_eq!(saturating.eval(&expr), Ok(i64::MIN));
}

#[test]
fn million_leaf_chain_evaluates_iteratively() {
    let expr = ones(1_000_000);

    assert_eq!(evaluate(&expr), Ok(1_000_000));
}

#[test]
fn recursion_limit_is_enforced() {
    let context = Context::new().with_strategy(Traversal::Recursive);

    assert_eq!(context.eval(&ones(context.recursion_limit)),
               Ok(i64::try_from(context.recursion_limit).unwrap()));
    assert_eq!(context.eval(&ones(context.recursion_limit + 1)),
               Err(RuntimeError::RecursionLimitExceeded { limit: context.recursion_limit }));
}

#[test]
fn shared_tree_evaluates_on_many_threads() {
    let expr = mul(ones(10_000), add(num(2), num(3)));
    let context = Context::new();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| context.eval(&expr)))
                                    .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(50_000));
        }
    });
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = (-1000i64..1000i64).prop_map(Expr::Number);
    leaf.prop_recursive(6, 64, 2, |inner| {
            prop_oneof![(inner.clone(), inner.clone()).prop_map(|(l, r)| add(l, r)),
                        (inner.clone(), inner).prop_map(|(l, r)| mul(l, r)),]
        })
}

fn arb_large_expr() -> impl Strategy<Value = Expr> {
    let leaf = any::<i64>().prop_map(Expr::Number);
    leaf.prop_recursive(5, 32, 2, |inner| {
            prop_oneof![(inner.clone(), inner.clone()).prop_map(|(l, r)| add(l, r)),
                        (inner.clone(), inner).prop_map(|(l, r)| mul(l, r)),]
        })
}

proptest! {
    #[test]
    fn number_is_identity(v in any::<i64>()) {
        prop_assert_eq!(evaluate(&num(v)), Ok(v));
    }

    #[test]
    fn addition_is_sum_of_operands(a in arb_expr(), b in arb_expr()) {
        let expected = evaluate(&a).ok()
                                   .zip(evaluate(&b).ok())
                                   .and_then(|(a, b)| a.checked_add(b));
        prop_assert_eq!(evaluate(&add(a, b)).ok(), expected);
    }

    #[test]
    fn multiplication_is_product_of_operands(a in arb_expr(), b in arb_expr()) {
        let expected = evaluate(&a).ok()
                                   .zip(evaluate(&b).ok())
                                   .and_then(|(a, b)| a.checked_mul(b));
        prop_assert_eq!(evaluate(&mul(a, b)).ok(), expected);
    }

    #[test]
    fn operators_commute(a in arb_expr(), b in arb_expr()) {
        prop_assert_eq!(evaluate(&add(a.clone(), b.clone())).ok(),
                        evaluate(&add(b.clone(), a.clone())).ok());
        prop_assert_eq!(evaluate(&mul(a.clone(), b.clone())).ok(),
                        evaluate(&mul(b, a)).ok());
    }

    #[test]
    fn multiplication_distributes_over_addition(a in arb_large_expr(),
                                                b in arb_large_expr(),
                                                c in arb_large_expr()) {
        let wrapping = Context::new().with_overflow(OverflowPolicy::Wrapping);
        let factored = mul(add(a.clone(), b.clone()), c.clone());
        let expanded = add(mul(a, c.clone()), mul(b, c));

        prop_assert_eq!(wrapping.eval(&factored), wrapping.eval(&expanded));
    }

    #[test]
    fn strategies_agree(expr in arb_large_expr(), policy_index in 0usize..3) {
        let policy = [OverflowPolicy::Checked,
                      OverflowPolicy::Wrapping,
                      OverflowPolicy::Saturating][policy_index];
        let iterative = Context::new().with_overflow(policy);
        let recursive = iterative.with_strategy(Traversal::Recursive);

        prop_assert_eq!(iterative.eval(&expr), recursive.eval(&expr));
    }

    #[test]
    fn rendering_counts_operators(expr in arb_expr()) {
        let rendered = expr.to_string();
        let operators = rendered.matches(" + ").count() + rendered.matches(" * ").count();

        prop_assert_eq!(operators * 2 + 1, expr.node_count());
    }
}
