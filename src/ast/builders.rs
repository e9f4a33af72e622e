//! Ergonomic constructor functions for AST nodes.
//!
//! These helpers build well-formed [`Node`] trees without the verbosity
//! of spelling out enum variants and boxes. Statement nodes support
//! chainable clause methods on [`Node`] itself (`.filter()`,
//! `.group_by()`, `.on()`, ...).
//!
//! # Example
//! ```
//! use sqlgen::prelude::*;
//!
//! let query = select([id("name"), id("age")], id("users"))
//!     .filter(eq(id("id"), integer(1)))
//!     .order_by([desc(id("age"))]);
//!
//! assert_eq!(
//!     emit(&query).unwrap(),
//!     r#"SELECT "name", "age" FROM "users" WHERE "id" = 1 ORDER BY "age" DESC"#,
//! );
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;

use super::{BinaryOp, FunctionOp, JoinKind, Node, SetOpKind, SortExpr, SortOrder, UnaryOp};

// --- Literals ---

/// `TRUE` or `FALSE`.
pub fn boolean(value: bool) -> Node {
    if value { Node::True } else { Node::False }
}

/// `NULL`.
pub fn null() -> Node {
    Node::Null
}

/// Integer literal.
pub fn integer(value: i64) -> Node {
    Node::Integer(value)
}

/// Floating-point literal.
pub fn float(value: f64) -> Node {
    Node::Float(value)
}

/// Arbitrary-precision decimal literal.
pub fn decimal(value: Decimal) -> Node {
    Node::Decimal(value)
}

/// Single-quoted string literal.
pub fn string(value: impl Into<String>) -> Node {
    Node::String(value.into())
}

/// Double-quoted identifier.
pub fn id(name: impl Into<String>) -> Node {
    Node::Id(vec![name.into()])
}

/// Qualified identifier; parts join with `.`, each part quoted.
pub fn qualified_id<I, S>(parts: I) -> Node
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Node::Id(parts.into_iter().map(Into::into).collect())
}

/// Date literal.
pub fn date(value: NaiveDate) -> Node {
    Node::Date(value)
}

/// Timestamp literal rendered in UTC with a `+00:00` suffix.
pub fn datetime(value: DateTime<FixedOffset>) -> Node {
    Node::DateTime(value)
}

/// Timestamp literal rendered in UTC with a `Z` suffix.
pub fn time(value: DateTime<FixedOffset>) -> Node {
    Node::Time(value)
}

// --- Unary operations ---

/// `+expr`
pub fn pos(expr: Node) -> Node {
    unary(UnaryOp::Plus, expr)
}

/// `-expr`
pub fn neg(expr: Node) -> Node {
    unary(UnaryOp::Minus, expr)
}

/// `NOT expr`
pub fn not(expr: Node) -> Node {
    unary(UnaryOp::Not, expr)
}

fn unary(op: UnaryOp, expr: Node) -> Node {
    Node::Unary {
        op,
        expr: Box::new(expr),
    }
}

// --- Function operations ---

/// `COUNT (expr)`
pub fn count(expr: Node) -> Node {
    function(FunctionOp::Count, expr)
}

/// `SUM (expr)`
pub fn sum(expr: Node) -> Node {
    function(FunctionOp::Sum, expr)
}

/// `MIN (expr)`
pub fn min(expr: Node) -> Node {
    function(FunctionOp::Min, expr)
}

/// `MAX (expr)`
pub fn max(expr: Node) -> Node {
    function(FunctionOp::Max, expr)
}

/// `AVG (expr)`
pub fn avg(expr: Node) -> Node {
    function(FunctionOp::Avg, expr)
}

/// `VAR_POP (expr)`
pub fn var_pop(expr: Node) -> Node {
    function(FunctionOp::VarPop, expr)
}

/// `STDDEV_POP (expr)`
pub fn stddev_pop(expr: Node) -> Node {
    function(FunctionOp::StddevPop, expr)
}

/// `SQRT (expr)`
pub fn sqrt(expr: Node) -> Node {
    function(FunctionOp::Sqrt, expr)
}

/// `ABS (expr)`
pub fn abs(expr: Node) -> Node {
    function(FunctionOp::Abs, expr)
}

/// `LENGTH (expr)`
pub fn length(expr: Node) -> Node {
    function(FunctionOp::Length, expr)
}

fn function(op: FunctionOp, expr: Node) -> Node {
    Node::Function {
        op,
        expr: Box::new(expr),
    }
}

// --- Binary operations ---

/// Build any binary infix operation.
pub fn binary(op: BinaryOp, left: Node, right: Node) -> Node {
    Node::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

/// `left OR right`
pub fn or(left: Node, right: Node) -> Node {
    binary(BinaryOp::Or, left, right)
}

/// `left AND right`
pub fn and(left: Node, right: Node) -> Node {
    binary(BinaryOp::And, left, right)
}

/// `left || right`
pub fn concat(left: Node, right: Node) -> Node {
    binary(BinaryOp::Concat, left, right)
}

/// `left = right`
pub fn eq(left: Node, right: Node) -> Node {
    binary(BinaryOp::Eq, left, right)
}

/// `left <> right`
pub fn ne(left: Node, right: Node) -> Node {
    binary(BinaryOp::Ne, left, right)
}

/// `left > right`
pub fn gt(left: Node, right: Node) -> Node {
    binary(BinaryOp::Gt, left, right)
}

/// `left >= right`
pub fn gte(left: Node, right: Node) -> Node {
    binary(BinaryOp::Gte, left, right)
}

/// `left < right`
pub fn lt(left: Node, right: Node) -> Node {
    binary(BinaryOp::Lt, left, right)
}

/// `left <= right`
pub fn lte(left: Node, right: Node) -> Node {
    binary(BinaryOp::Lte, left, right)
}

// --- Specialized predicates ---

/// `expr IS NULL`
pub fn is_null(expr: Node) -> Node {
    Node::Is {
        expr: Box::new(expr),
        negated: false,
    }
}

/// `expr IS NOT NULL`
pub fn is_not_null(expr: Node) -> Node {
    Node::Is {
        expr: Box::new(expr),
        negated: true,
    }
}

/// `expr IN (elements...)`
pub fn in_list(expr: Node, elements: impl IntoIterator<Item = Node>) -> Node {
    Node::In {
        expr: Box::new(expr),
        list: Box::new(tuple(elements)),
    }
}

/// `expr BETWEEN low AND high`
pub fn between(expr: Node, low: Node, high: Node) -> Node {
    Node::Between {
        expr: Box::new(expr),
        low: Box::new(low),
        high: Box::new(high),
    }
}

/// `(elements...)`
pub fn tuple(elements: impl IntoIterator<Item = Node>) -> Node {
    Node::Tuple(elements.into_iter().collect())
}

// --- ORDER BY entries ---

/// `expr ASC`
pub fn asc(expr: Node) -> SortExpr {
    SortExpr {
        expr,
        direction: SortOrder::Asc,
    }
}

/// `expr DESC`
pub fn desc(expr: Node) -> SortExpr {
    SortExpr {
        expr,
        direction: SortOrder::Desc,
    }
}

// --- Statements ---

/// `INSERT INTO <into> VALUES <values>`
pub fn insert(into: Node, values: Node) -> Node {
    Node::Insert {
        into: Box::new(into),
        values: Box::new(values),
    }
}

/// `DELETE FROM <from>`; chain [`Node::filter`] for a WHERE clause.
pub fn delete(from: Node) -> Node {
    Node::Delete {
        from: Box::new(from),
        filter: None,
    }
}

/// `UPDATE <table> SET <assignments>`; chain [`Node::filter`] for a
/// WHERE clause. Assignments are equality expressions.
pub fn update(table: Node, assignments: impl IntoIterator<Item = Node>) -> Node {
    Node::Update {
        table: Box::new(table),
        set: assignments.into_iter().collect(),
        filter: None,
    }
}

/// `SELECT <fields> FROM <from>`; chain [`Node::filter`],
/// [`Node::group_by`], [`Node::having`] and [`Node::order_by`] for the
/// optional clauses.
pub fn select(fields: impl IntoIterator<Item = Node>, from: Node) -> Node {
    Node::Select {
        fields: fields.into_iter().collect(),
        from: Box::new(from),
        filter: None,
        group_by: vec![],
        having: None,
        order_by: vec![],
    }
}

/// `(a) UNION (b) ...`
pub fn union(operands: impl IntoIterator<Item = Node>) -> Node {
    set_op(SetOpKind::Union, operands)
}

/// `(a) INTERSECT (b) ...`
pub fn intersect(operands: impl IntoIterator<Item = Node>) -> Node {
    set_op(SetOpKind::Intersect, operands)
}

/// `(a) EXCEPT (b) ...`
pub fn except(operands: impl IntoIterator<Item = Node>) -> Node {
    set_op(SetOpKind::Except, operands)
}

fn set_op(op: SetOpKind, operands: impl IntoIterator<Item = Node>) -> Node {
    Node::SetOp {
        op,
        operands: operands.into_iter().collect(),
    }
}

/// `left JOIN right`; chain [`Node::on`] or [`Node::using`].
pub fn join(left: Node, right: Node) -> Node {
    join_kind(JoinKind::Inner, left, right)
}

/// `left LEFT JOIN right`; chain [`Node::on`] or [`Node::using`].
pub fn left_join(left: Node, right: Node) -> Node {
    join_kind(JoinKind::Left, left, right)
}

/// `left RIGHT JOIN right`; chain [`Node::on`] or [`Node::using`].
pub fn right_join(left: Node, right: Node) -> Node {
    join_kind(JoinKind::Right, left, right)
}

/// `left FULL JOIN right`; chain [`Node::on`] or [`Node::using`].
pub fn full_join(left: Node, right: Node) -> Node {
    join_kind(JoinKind::Full, left, right)
}

/// `left NATURAL JOIN right`; takes no ON/USING clause.
pub fn natural_join(left: Node, right: Node) -> Node {
    join_kind(JoinKind::Natural, left, right)
}

/// `left CROSS JOIN right`; takes no ON/USING clause.
pub fn cross_join(left: Node, right: Node) -> Node {
    join_kind(JoinKind::Cross, left, right)
}

fn join_kind(kind: JoinKind, left: Node, right: Node) -> Node {
    Node::Join {
        kind,
        left: Box::new(left),
        right: Box::new(right),
        constraint: None,
    }
}

// --- Extensions ---

/// Node with a tag the built-in emitter does not know; rendering it
/// requires a renderer registered for `tag`.
pub fn ext(tag: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Node {
    Node::Extension {
        tag: tag.into(),
        children: children.into_iter().collect(),
    }
}
