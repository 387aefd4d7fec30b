//! # sqlx-sqlite-catalog
//!
//! Immutable per-table column catalogs: the fixed set of addressable columns
//! a query layer is allowed to reference by name.
//!
//! ## Core Types
//!
//! - **[`ColumnCatalog`]**: The lookup contract — `property name → column handle`
//! - **[`TableCatalog`]**: In-memory catalog for one table, built once and frozen
//! - **[`ColumnRef`]**: Validated, quotable handle to a single column
//! - **[`Error`]**: Error type for catalog construction and introspection
//!
//! ## Architecture
//!
//! - **Construction-then-freeze**: A catalog is assembled through
//!   [`TableCatalogBuilder`] (or introspected from a live database), validated
//!   in one step, and immutable afterwards
//! - **Case-sensitive names**: Lookup keys are exact; `Name` and `name` are
//!   different properties
//! - **No query semantics**: The catalog answers "does this column exist" and
//!   hands out quotable handles — whether a column is meaningfully orderable
//!   is the query layer's concern

mod catalog;
mod column;
mod error;
mod introspect;

// Re-export public types
pub use catalog::{ColumnCatalog, TableCatalog, TableCatalogBuilder};
pub use column::ColumnRef;
pub use error::{Error, Result};
