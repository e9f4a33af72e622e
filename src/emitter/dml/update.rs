//! UPDATE rendering.

use crate::ast::Node;
use crate::emitter::{Buffer, Emitter, join_nodes};
use crate::error::Result;

/// `UPDATE <table> SET <assignments>` with an optional WHERE clause.
/// Assignments are equality expressions, comma-joined.
pub fn visit(
    emitter: &Emitter,
    table: &Node,
    set: &[Node],
    filter: Option<&Node>,
    out: &mut Buffer,
) -> Result<()> {
    out.append("UPDATE ");
    emitter.visit(table, out)?;
    out.separator();
    out.append("SET ");
    join_nodes(emitter, set, out)?;
    if let Some(predicate) = filter {
        out.separator();
        out.append("WHERE ");
        emitter.visit(predicate, out)?;
    }
    Ok(())
}
