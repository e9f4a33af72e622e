//! DELETE rendering.

use crate::ast::Node;
use crate::emitter::{Buffer, Emitter};
use crate::error::Result;

/// `DELETE FROM <from>`, plus a WHERE clause when a predicate is
/// present. An absent clause emits nothing, not an empty keyword.
pub fn visit(
    emitter: &Emitter,
    from: &Node,
    filter: Option<&Node>,
    out: &mut Buffer,
) -> Result<()> {
    out.append("DELETE FROM ");
    emitter.visit(from, out)?;
    if let Some(predicate) = filter {
        out.separator();
        out.append("WHERE ");
        emitter.visit(predicate, out)?;
    }
    Ok(())
}
