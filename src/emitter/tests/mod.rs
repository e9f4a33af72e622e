//! Emitter test modules.
//!
//! Tests are organized by category:
//! - `literals`: Scalar constants, identifiers, temporal values
//! - `expressions`: Unary, function, binary, IS/IN/BETWEEN, tuples
//! - `statements`: INSERT, DELETE, UPDATE, SELECT clause assembly
//! - `compound`: Set operations and joins
//! - `registry`: Extension-tag registry and the unknown-node error

mod compound;
mod expressions;
mod registry;
