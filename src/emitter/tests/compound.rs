//! Set operation and join rendering tests.

use pretty_assertions::assert_eq;

use crate::ast::builders::*;
use crate::ast::Node;
use crate::emitter::{emit, emit_pretty};

fn names_from(table: &str) -> Node {
    select([id("name")], id(table))
}

#[test]
fn test_union() {
    let stmt = union([
        names_from("users"),
        names_from("customers"),
        names_from("employees"),
    ]);
    assert_eq!(
        emit(&stmt).unwrap(),
        r#"(SELECT "name" FROM "users") UNION (SELECT "name" FROM "customers") UNION (SELECT "name" FROM "employees")"#
    );
}

#[test]
fn test_intersect() {
    let stmt = intersect([names_from("users"), names_from("customers")]);
    assert_eq!(
        emit(&stmt).unwrap(),
        r#"(SELECT "name" FROM "users") INTERSECT (SELECT "name" FROM "customers")"#
    );
}

#[test]
fn test_except_preserves_operand_order() {
    let stmt = except([names_from("users"), names_from("customers")]);
    assert_eq!(
        emit(&stmt).unwrap(),
        r#"(SELECT "name" FROM "users") EXCEPT (SELECT "name" FROM "customers")"#
    );
}

#[test]
fn test_set_op_pretty_layout() {
    let stmt = union([names_from("users"), names_from("customers")]);
    assert_eq!(
        emit_pretty(&stmt).unwrap(),
        "(\n  SELECT \"name\"\n  FROM \"users\"\n)\nUNION\n(\n  SELECT \"name\"\n  FROM \"customers\"\n)"
    );
}

#[test]
fn test_joins_with_on() {
    let predicate = || {
        eq(
            qualified_id(["foo", "name"]),
            qualified_id(["bar", "name"]),
        )
    };
    let cases = [
        (join(id("foo"), id("bar")).on(predicate()), "JOIN"),
        (left_join(id("foo"), id("bar")).on(predicate()), "LEFT JOIN"),
        (
            right_join(id("foo"), id("bar")).on(predicate()),
            "RIGHT JOIN",
        ),
        (full_join(id("foo"), id("bar")).on(predicate()), "FULL JOIN"),
    ];
    for (stmt, keyword) in cases {
        assert_eq!(
            emit(&stmt).unwrap(),
            format!(r#""foo" {keyword} "bar" ON "foo"."name" = "bar"."name""#)
        );
    }
}

#[test]
fn test_joins_with_using() {
    let cases = [
        (join(id("foo"), id("bar")), "JOIN"),
        (left_join(id("foo"), id("bar")), "LEFT JOIN"),
        (right_join(id("foo"), id("bar")), "RIGHT JOIN"),
        (full_join(id("foo"), id("bar")), "FULL JOIN"),
    ];
    for (stmt, keyword) in cases {
        assert_eq!(
            emit(&stmt.using([id("name")])).unwrap(),
            format!(r#""foo" {keyword} "bar" USING ("name")"#)
        );
    }
}

#[test]
fn test_unqualified_joins() {
    assert_eq!(
        emit(&natural_join(id("foo"), id("bar"))).unwrap(),
        r#""foo" NATURAL JOIN "bar""#
    );
    assert_eq!(
        emit(&cross_join(id("foo"), id("bar"))).unwrap(),
        r#""foo" CROSS JOIN "bar""#
    );
}

#[test]
fn test_join_of_join() {
    let stmt = join(join(id("a"), id("b")).using([id("k")]), id("c")).using([id("k")]);
    assert_eq!(
        emit(&stmt).unwrap(),
        r#""a" JOIN "b" USING ("k") JOIN "c" USING ("k")"#
    );
}
