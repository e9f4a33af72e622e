//! Expression rendering tests.

use pretty_assertions::assert_eq;

use crate::ast::BinaryOp;
use crate::ast::builders::*;
use crate::emitter::emit;

#[test]
fn test_unary_prefix_operations() {
    assert_eq!(emit(&pos(integer(1))).unwrap(), "+1");
    assert_eq!(emit(&neg(integer(1))).unwrap(), "-1");
    assert_eq!(emit(&not(boolean(true))).unwrap(), "NOT TRUE");
}

#[test]
fn test_unary_prefix_nests() {
    assert_eq!(emit(&not(not(boolean(false)))).unwrap(), "NOT NOT FALSE");
    assert_eq!(emit(&neg(neg(integer(3)))).unwrap(), "--3");
}

#[test]
fn test_unary_function_operations() {
    let cases = [
        (count(id("foo")), "COUNT"),
        (sum(id("foo")), "SUM"),
        (min(id("foo")), "MIN"),
        (max(id("foo")), "MAX"),
        (avg(id("foo")), "AVG"),
        (var_pop(id("foo")), "VAR_POP"),
        (stddev_pop(id("foo")), "STDDEV_POP"),
        (sqrt(id("foo")), "SQRT"),
        (abs(id("foo")), "ABS"),
        (length(id("foo")), "LENGTH"),
    ];
    for (node, keyword) in cases {
        assert_eq!(emit(&node).unwrap(), format!("{keyword} (\"foo\")"));
    }
}

#[test]
fn test_function_operand_always_parenthesized() {
    // even a trivial operand is wrapped
    assert_eq!(emit(&count(integer(1))).unwrap(), "COUNT (1)");
}

#[test]
fn test_binary_infix_operations() {
    let cases = [
        (BinaryOp::Or, "OR"),
        (BinaryOp::And, "AND"),
        (BinaryOp::Concat, "||"),
        (BinaryOp::Mul, "*"),
        (BinaryOp::Add, "+"),
        (BinaryOp::Sub, "-"),
        (BinaryOp::Div, "/"),
        (BinaryOp::Mod, "%"),
        (BinaryOp::Pow, "^"),
        (BinaryOp::Eq, "="),
        (BinaryOp::Ne, "<>"),
        (BinaryOp::Gt, ">"),
        (BinaryOp::Gte, ">="),
        (BinaryOp::Lt, "<"),
        (BinaryOp::Lte, "<="),
    ];
    for (op, token) in cases {
        let node = binary(op, id("foo"), id("bar"));
        assert_eq!(emit(&node).unwrap(), format!("\"foo\" {token} \"bar\""));
    }
}

#[test]
fn test_binary_recurses_into_operands() {
    let node = and(
        eq(id("name"), string("foo")),
        gt(id("age"), integer(18)),
    );
    assert_eq!(
        emit(&node).unwrap(),
        r#""name" = 'foo' AND "age" > 18"#
    );
}

#[test]
fn test_is_null() {
    assert_eq!(emit(&is_null(id("foo"))).unwrap(), r#""foo" IS NULL"#);
}

#[test]
fn test_is_not_null() {
    assert_eq!(
        emit(&is_not_null(id("foo"))).unwrap(),
        r#""foo" IS NOT NULL"#
    );
}

#[test]
fn test_in_with_tuple() {
    let node = in_list(id("foo"), [integer(1), integer(2)]);
    assert_eq!(emit(&node).unwrap(), r#""foo" IN (1, 2)"#);
}

#[test]
fn test_in_with_empty_tuple() {
    let node = in_list(id("foo"), []);
    assert_eq!(emit(&node).unwrap(), r#""foo" IN ()"#);
}

#[test]
fn test_between() {
    let node = between(id("foo"), integer(1), integer(2));
    assert_eq!(emit(&node).unwrap(), r#""foo" BETWEEN 1 AND 2"#);
}

#[test]
fn test_tuples() {
    assert_eq!(
        emit(&tuple([integer(1), string("foo")])).unwrap(),
        "(1, 'foo')"
    );
    assert_eq!(emit(&tuple([])).unwrap(), "()");
    assert_eq!(
        emit(&tuple([tuple([integer(1)]), null()])).unwrap(),
        "((1), NULL)"
    );
}
