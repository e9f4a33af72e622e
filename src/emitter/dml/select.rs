//! SELECT rendering.

use crate::ast::{Node, SortExpr};
use crate::emitter::{Buffer, Emitter, join_nodes};
use crate::error::Result;

/// `SELECT <fields> FROM <from>` followed, in fixed order, by the
/// optional WHERE, GROUP BY, HAVING and ORDER BY clauses. Absent
/// clauses emit nothing.
pub fn visit(
    emitter: &Emitter,
    fields: &[Node],
    from: &Node,
    filter: Option<&Node>,
    group_by: &[Node],
    having: Option<&Node>,
    order_by: &[SortExpr],
    out: &mut Buffer,
) -> Result<()> {
    out.append("SELECT ");
    join_nodes(emitter, fields, out)?;
    out.separator();
    out.append("FROM ");
    emitter.visit(from, out)?;
    if let Some(predicate) = filter {
        out.separator();
        out.append("WHERE ");
        emitter.visit(predicate, out)?;
    }
    if !group_by.is_empty() {
        out.separator();
        out.append("GROUP BY ");
        join_nodes(emitter, group_by, out)?;
    }
    if let Some(predicate) = having {
        out.separator();
        out.append("HAVING ");
        emitter.visit(predicate, out)?;
    }
    if !order_by.is_empty() {
        out.separator();
        out.append("ORDER BY ");
        for (index, entry) in order_by.iter().enumerate() {
            if index > 0 {
                out.append(", ");
            }
            emitter.visit(&entry.expr, out)?;
            out.append(" ");
            out.append(entry.direction.token());
        }
    }
    Ok(())
}
