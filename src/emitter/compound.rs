//! Set operations and joins.

use crate::ast::{JoinConstraint, JoinKind, Node, SetOpKind};
use crate::error::Result;

use super::{Buffer, Emitter, Style, expr};

/// UNION / INTERSECT / EXCEPT. Every operand is parenthesized,
/// including the first, and operand order is preserved. In compact
/// style the operator sits between single spaces; in pretty style each
/// operand body goes on its own indented line with the operator alone
/// between them.
pub fn set_op(emitter: &Emitter, op: SetOpKind, operands: &[Node], out: &mut Buffer) -> Result<()> {
    for (index, operand) in operands.iter().enumerate() {
        if index > 0 {
            out.separator();
            out.append(op.token());
            out.separator();
        }
        match out.style() {
            Style::Compact => {
                out.append("(");
                emitter.visit(operand, out)?;
                out.append(")");
            }
            Style::Pretty => {
                out.append("(");
                out.indented(|out| {
                    out.separator();
                    emitter.visit(operand, out)
                })?;
                out.separator();
                out.append(")");
            }
        }
    }
    Ok(())
}

/// `<left> <JOIN-KEYWORDS> <right>` with an optional ON or USING
/// clause. NATURAL and CROSS joins carry no constraint by
/// construction.
pub fn join(
    emitter: &Emitter,
    kind: JoinKind,
    left: &Node,
    right: &Node,
    constraint: Option<&JoinConstraint>,
    out: &mut Buffer,
) -> Result<()> {
    emitter.visit(left, out)?;
    out.append(" ");
    out.append(kind.token());
    out.append(" ");
    emitter.visit(right, out)?;
    match constraint {
        Some(JoinConstraint::On(predicate)) => {
            out.append(" ON ");
            emitter.visit(predicate, out)
        }
        Some(JoinConstraint::Using(columns)) => {
            out.append(" USING ");
            expr::tuple(emitter, columns, out)
        }
        None => Ok(()),
    }
}
