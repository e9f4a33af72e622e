//! SQL emission engine.
//!
//! [`Emitter::visit`] routes each [`Node`] to its renderer with an
//! exhaustive match, so every built-in node kind is guaranteed a
//! renderer at compile time. [`Node::Extension`] nodes go through the
//! registry instead; a tag nobody registered is the engine's single
//! runtime failure.

pub mod buffer;
mod compound;
mod dml;
mod expr;
mod literal;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::ast::Node;
use crate::error::{Error, Result};

pub use buffer::{Buffer, Style};

/// Renderer for one extension tag. Receives the extension node's
/// children and may recurse through the emitter; the children's shape
/// is the renderer's own precondition, not validated here.
pub type Renderer = fn(&Emitter, &[Node], &mut Buffer) -> Result<()>;

/// The emission engine: break style plus the extension-tag registry.
///
/// Populate the registry with [`register`](Self::register) before
/// emitting; during emission the emitter is read-only and may be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct Emitter {
    renderers: HashMap<String, Renderer>,
    style: Style,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// Emitter producing compact (single-line) SQL.
    pub fn new() -> Self {
        Self::with_style(Style::Compact)
    }

    /// Emitter producing output in the given break style.
    pub fn with_style(style: Style) -> Self {
        Self {
            renderers: HashMap::new(),
            style,
        }
    }

    /// Register a renderer for an extension tag. Registering a tag
    /// twice replaces the earlier renderer.
    pub fn register(&mut self, tag: impl Into<String>, renderer: Renderer) {
        self.renderers.insert(tag.into(), renderer);
    }

    /// Render a node tree to SQL text.
    ///
    /// Fails with [`Error::UnknownNode`] if any node in the tree is an
    /// extension with no registered renderer; the partial output is
    /// discarded.
    pub fn emit(&self, node: &Node) -> Result<String> {
        let mut out = Buffer::with_style(self.style);
        self.visit(node, &mut out)?;
        Ok(out.finish())
    }

    /// Render `node` into an existing buffer. Renderers call this to
    /// recurse into child nodes.
    pub fn visit(&self, node: &Node, out: &mut Buffer) -> Result<()> {
        match node {
            Node::True => literal::boolean(true, out),
            Node::False => literal::boolean(false, out),
            Node::Null => literal::null(out),
            Node::Integer(value) => literal::integer(*value, out),
            Node::Float(value) => literal::float(*value, out),
            Node::Decimal(value) => literal::decimal(value, out),
            Node::String(value) => literal::string(value, out),
            Node::Id(parts) => literal::identifier(parts, out),
            Node::Date(value) => literal::date(value, out),
            Node::DateTime(value) => literal::datetime(value, out),
            Node::Time(value) => literal::time(value, out),

            Node::Unary { op, expr } => return expr::unary(self, *op, expr, out),
            Node::Function { op, expr } => return expr::function(self, *op, expr, out),
            Node::Binary { op, left, right } => return expr::binary(self, *op, left, right, out),
            Node::Is { expr, negated } => return expr::is(self, expr, *negated, out),
            Node::In { expr, list } => return expr::in_list(self, expr, list, out),
            Node::Between { expr, low, high } => return expr::between(self, expr, low, high, out),
            Node::Tuple(elements) => return expr::tuple(self, elements, out),

            Node::Insert { into, values } => return dml::insert::visit(self, into, values, out),
            Node::Delete { from, filter } => {
                return dml::delete::visit(self, from, filter.as_deref(), out);
            }
            Node::Update { table, set, filter } => {
                return dml::update::visit(self, table, set, filter.as_deref(), out);
            }
            Node::Select {
                fields,
                from,
                filter,
                group_by,
                having,
                order_by,
            } => {
                return dml::select::visit(
                    self,
                    fields,
                    from,
                    filter.as_deref(),
                    group_by,
                    having.as_deref(),
                    order_by,
                    out,
                );
            }
            Node::SetOp { op, operands } => return compound::set_op(self, *op, operands, out),
            Node::Join {
                kind,
                left,
                right,
                constraint,
            } => return compound::join(self, *kind, left, right, constraint.as_ref(), out),

            Node::Extension { tag, children } => {
                return match self.renderers.get(tag) {
                    Some(render) => render(self, children, out),
                    None => Err(Error::unknown(tag.clone())),
                };
            }
        }
        Ok(())
    }
}

/// Dispatch each node in order, comma-and-space joined.
pub(crate) fn join_nodes(emitter: &Emitter, nodes: &[Node], out: &mut Buffer) -> Result<()> {
    for (index, node) in nodes.iter().enumerate() {
        if index > 0 {
            out.append(", ");
        }
        emitter.visit(node, out)?;
    }
    Ok(())
}

/// Render a node tree to compact SQL with a default [`Emitter`].
pub fn emit(node: &Node) -> Result<String> {
    Emitter::new().emit(node)
}

/// Render a node tree to pretty (multi-line) SQL with a default
/// [`Emitter`].
pub fn emit_pretty(node: &Node) -> Result<String> {
    Emitter::with_style(Style::Pretty).emit(node)
}
