//! INSERT rendering.

use crate::ast::Node;
use crate::emitter::{Buffer, Emitter};
use crate::error::Result;

/// `INSERT INTO <into> VALUES <values>`; `values` is expected to be a
/// tuple, which parenthesizes itself.
pub fn visit(emitter: &Emitter, into: &Node, values: &Node, out: &mut Buffer) -> Result<()> {
    out.append("INSERT INTO ");
    emitter.visit(into, out)?;
    out.separator();
    out.append("VALUES ");
    emitter.visit(values, out)
}
