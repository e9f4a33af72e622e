//! # sqlgen — SQL generation from an abstract syntax tree
//!
//! sqlgen renders an already-constructed [`ast::Node`] tree as a SQL
//! string. It does no parsing, no semantic validation and no I/O;
//! producing well-formed trees is the caller's job (the constructor
//! functions in [`ast::builders`] help with that).
//!
//! ## Quick Example
//!
//! ```rust
//! use sqlgen::prelude::*;
//!
//! let stmt = delete(id("users")).filter(eq(id("name"), string("foo")));
//!
//! let sql = emit(&stmt).unwrap();
//! // => DELETE FROM "users" WHERE "name" = 'foo'
//! # assert_eq!(sql, r#"DELETE FROM "users" WHERE "name" = 'foo'"#);
//! ```
//!
//! Emission only fails for an [`ast::Node::Extension`] whose tag has no
//! renderer registered on the [`Emitter`]; every built-in node kind is
//! handled exhaustively at compile time.

pub mod ast;
pub mod emitter;
pub mod error;

pub use emitter::{Emitter, emit, emit_pretty};
pub use error::{Error, Result};

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::emitter::{Buffer, Emitter, Style, emit, emit_pretty};
    pub use crate::error::{Error, Result};
}
