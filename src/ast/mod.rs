//! Abstract Syntax Tree for SQL statements and expressions.
//!
//! [`Node`] is a closed sum over every construct the emitter knows how
//! to render, so dispatch is an exhaustive `match` rather than a
//! runtime lookup. The one open seam is [`Node::Extension`], which is
//! routed through the [`Emitter`](crate::Emitter) registry and is the
//! only way emission can fail.

pub mod builders;
pub mod operators;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use self::operators::{BinaryOp, FunctionOp, JoinKind, SetOpKind, SortOrder, UnaryOp};

/// One SQL construct: a literal, an expression or a statement.
///
/// The shape of each variant (which children it carries, and what they
/// may be) is the contract the renderers rely on. The emitter does not
/// validate it; a `Select` whose `from` is a `Between` node is a caller
/// bug and yields nonsense SQL, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// `TRUE`
    True,
    /// `FALSE`
    False,
    /// `NULL`
    Null,
    /// Integer literal
    Integer(i64),
    /// Floating-point literal
    Float(f64),
    /// Arbitrary-precision decimal literal
    Decimal(Decimal),
    /// String literal, single-quoted on output
    String(String),
    /// Identifier; multiple parts form a qualified name (`"a"."b"`)
    Id(Vec<String>),
    /// Date literal
    Date(NaiveDate),
    /// Timestamp literal, rendered in UTC with a `+00:00` suffix
    DateTime(DateTime<FixedOffset>),
    /// Timestamp literal, rendered in UTC with a `Z` suffix
    Time(DateTime<FixedOffset>),

    /// Unary prefix operation (`-x`, `NOT x`)
    Unary { op: UnaryOp, expr: Box<Node> },
    /// Unary function-call operation (`COUNT ("foo")`)
    Function { op: FunctionOp, expr: Box<Node> },
    /// Binary infix operation (`a = b`, `a || b`)
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// `expr IS NULL` / `expr IS NOT NULL`
    Is { expr: Box<Node>, negated: bool },
    /// `expr IN (list)`; `list` is expected to be a `Tuple`
    In { expr: Box<Node>, list: Box<Node> },
    /// `expr BETWEEN low AND high`
    Between {
        expr: Box<Node>,
        low: Box<Node>,
        high: Box<Node>,
    },
    /// Parenthesized, comma-joined element list
    Tuple(Vec<Node>),

    /// `INSERT INTO <into> VALUES <values>`
    Insert { into: Box<Node>, values: Box<Node> },
    /// `DELETE FROM <from> [WHERE <filter>]`
    Delete {
        from: Box<Node>,
        filter: Option<Box<Node>>,
    },
    /// `UPDATE <table> SET <set> [WHERE <filter>]`
    Update {
        table: Box<Node>,
        set: Vec<Node>,
        filter: Option<Box<Node>>,
    },
    /// `SELECT <fields> FROM <from> [WHERE ...] [GROUP BY ...]
    /// [HAVING ...] [ORDER BY ...]`
    Select {
        fields: Vec<Node>,
        from: Box<Node>,
        filter: Option<Box<Node>>,
        group_by: Vec<Node>,
        having: Option<Box<Node>>,
        order_by: Vec<SortExpr>,
    },
    /// UNION / INTERSECT / EXCEPT over parenthesized operands
    SetOp {
        op: SetOpKind,
        operands: Vec<Node>,
    },
    /// `<left> <JOIN-KEYWORDS> <right> [ON ... | USING (...)]`
    Join {
        kind: JoinKind,
        left: Box<Node>,
        right: Box<Node>,
        constraint: Option<JoinConstraint>,
    },

    /// Escape hatch for node kinds this crate does not know about.
    /// Rendered by whatever renderer was registered for `tag`;
    /// emission fails with [`Error::UnknownNode`](crate::Error) if
    /// none was.
    Extension { tag: String, children: Vec<Node> },
}

/// One ORDER BY entry: an expression plus its direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortExpr {
    pub expr: Node,
    pub direction: SortOrder,
}

/// Join qualification clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinConstraint {
    /// `ON <predicate>`
    On(Box<Node>),
    /// `USING (<columns>)`
    Using(Vec<Node>),
}

impl Node {
    /// Attach a WHERE predicate to a `Select`, `Update` or `Delete`.
    ///
    /// No-op for any other variant.
    pub fn filter(mut self, predicate: Node) -> Self {
        match &mut self {
            Node::Select { filter, .. }
            | Node::Update { filter, .. }
            | Node::Delete { filter, .. } => *filter = Some(Box::new(predicate)),
            _ => {}
        }
        self
    }

    /// Attach a GROUP BY column list to a `Select`. No-op otherwise.
    pub fn group_by(mut self, columns: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Select { group_by, .. } = &mut self {
            group_by.extend(columns);
        }
        self
    }

    /// Attach a HAVING predicate to a `Select`. No-op otherwise.
    pub fn having(mut self, predicate: Node) -> Self {
        if let Node::Select { having, .. } = &mut self {
            *having = Some(Box::new(predicate));
        }
        self
    }

    /// Attach ORDER BY entries to a `Select`. No-op otherwise.
    pub fn order_by(mut self, entries: impl IntoIterator<Item = SortExpr>) -> Self {
        if let Node::Select { order_by, .. } = &mut self {
            order_by.extend(entries);
        }
        self
    }

    /// Attach an `ON` predicate to a `Join`. No-op otherwise.
    pub fn on(mut self, predicate: Node) -> Self {
        if let Node::Join { constraint, .. } = &mut self {
            *constraint = Some(JoinConstraint::On(Box::new(predicate)));
        }
        self
    }

    /// Attach a `USING (columns)` clause to a `Join`. No-op otherwise.
    pub fn using(mut self, columns: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Join { constraint, .. } = &mut self {
            *constraint = Some(JoinConstraint::Using(columns.into_iter().collect()));
        }
        self
    }
}
