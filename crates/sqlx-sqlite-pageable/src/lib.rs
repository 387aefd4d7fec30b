//! # sqlx-sqlite-pageable
//!
//! Offset pagination for SQLite queries: turn an abstract page request
//! (page index, page size, ordered sort keys) into a validated ORDER BY
//! clause plus a LIMIT/OFFSET window, against the fixed set of addressable
//! columns described by a [`sqlx_sqlite_catalog`] catalog.
//!
//! ## Core Types
//!
//! - **[`PageRequest`]**: The abstract request — page index, page size, sort keys
//! - **[`SortKey`]** / **[`SortDirection`]**: One ordering criterion
//! - **[`OrderTerm`]**: A resolved (column, direction) pair
//! - **[`PageWindow`]**: The computed (offset, limit) pair
//! - **[`Translation`]**: Resolved ordering plus window for one request
//! - **[`Error`]**: Error type for rejected translations
//!
//! ## Architecture
//!
//! - **Validate, then compose**: Every sort key must resolve against the
//!   catalog before any SQL is built; the first unknown property rejects the
//!   whole request, with no partial output
//! - **Order is semantics**: Sort keys are tie-break priority, first key
//!   primary — terms are emitted and rendered in exactly the request order
//! - **Pure core**: Translation is a stateless function of its inputs; the
//!   catalog is read-only and shared freely across threads. Executing the
//!   enhanced SQL (and decoding rows) stays with the caller
//!
//! ## Example
//!
//! ```
//! use sqlx_sqlite_catalog::TableCatalog;
//! use sqlx_sqlite_pageable::{PageRequest, paginate};
//!
//! let catalog = TableCatalog::builder("user")
//!    .columns(["id", "name", "status", "created_on"])
//!    .build()?;
//!
//! let request = PageRequest::new(2, 10)
//!    .sort_asc("created_on")
//!    .sort_asc("status")
//!    .sort_desc("name");
//!
//! let sql = paginate("SELECT * FROM user", &request, &catalog)?;
//!
//! assert_eq!(
//!    sql,
//!    r#"SELECT * FROM user ORDER BY "created_on" ASC, "status" ASC, "name" DESC LIMIT 10 OFFSET 20"#
//! );
//! # Ok::<(), sqlx_sqlite_pageable::Error>(())
//! ```

mod error;
mod order;
mod query;
mod request;
mod window;

// Re-export public types
pub use error::{Error, Result};
pub use order::{OrderTerm, translate_order};
pub use query::{Translation, enhance_query, paginate, translate};
pub use request::{PageRequest, SortDirection, SortKey};
pub use window::{PageWindow, compute_window};
