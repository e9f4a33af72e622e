//! Rendering of operator expressions and tuples.

use crate::ast::{BinaryOp, FunctionOp, Node, UnaryOp};
use crate::error::Result;

use super::{Buffer, Emitter};

pub fn unary(emitter: &Emitter, op: UnaryOp, expr: &Node, out: &mut Buffer) -> Result<()> {
    out.append(op.token());
    emitter.visit(expr, out)
}

/// Fixed `NAME (operand)` layout; the operand is always parenthesized.
pub fn function(emitter: &Emitter, op: FunctionOp, expr: &Node, out: &mut Buffer) -> Result<()> {
    out.append(op.token());
    out.append(" (");
    emitter.visit(expr, out)?;
    out.append(")");
    Ok(())
}

pub fn binary(
    emitter: &Emitter,
    op: BinaryOp,
    left: &Node,
    right: &Node,
    out: &mut Buffer,
) -> Result<()> {
    emitter.visit(left, out)?;
    out.append(" ");
    out.append(op.token());
    out.append(" ");
    emitter.visit(right, out)
}

pub fn is(emitter: &Emitter, expr: &Node, negated: bool, out: &mut Buffer) -> Result<()> {
    emitter.visit(expr, out)?;
    out.append(if negated { " IS NOT NULL" } else { " IS NULL" });
    Ok(())
}

pub fn in_list(emitter: &Emitter, expr: &Node, list: &Node, out: &mut Buffer) -> Result<()> {
    emitter.visit(expr, out)?;
    out.append(" IN ");
    emitter.visit(list, out)
}

pub fn between(
    emitter: &Emitter,
    expr: &Node,
    low: &Node,
    high: &Node,
    out: &mut Buffer,
) -> Result<()> {
    emitter.visit(expr, out)?;
    out.append(" BETWEEN ");
    emitter.visit(low, out)?;
    out.append(" AND ");
    emitter.visit(high, out)
}

/// Comma-joined, parenthesized element list. Empty tuples render `()`.
pub fn tuple(emitter: &Emitter, elements: &[Node], out: &mut Buffer) -> Result<()> {
    out.append("(");
    super::join_nodes(emitter, elements, out)?;
    out.append(")");
    Ok(())
}
