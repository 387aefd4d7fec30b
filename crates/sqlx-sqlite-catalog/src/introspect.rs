//! Catalog introspection from a live SQLite database.
//!
//! The catalog of an existing table does not have to be spelled out by hand:
//! `PRAGMA table_info` already knows the addressable columns.

use sqlx::{Row, SqliteConnection};

use crate::column::quote_identifier;
use crate::{Error, Result, TableCatalog};

impl TableCatalog {
   /// Build a catalog from a live table via `PRAGMA table_info`.
   ///
   /// Columns appear in the catalog in table order. Returns
   /// [`Error::TableNotFound`] when the pragma reports no columns, which is
   /// how SQLite signals a missing table. Columns whose names fall outside
   /// the accepted charset fail the whole catalog — such columns could never
   /// be addressed safely by name.
   pub async fn introspect(conn: &mut SqliteConnection, table: &str) -> Result<Self> {
      // PRAGMA table_info returns: cid, name, type, notnull, dflt_value, pk
      let pragma = format!("PRAGMA table_info({})", quote_identifier(table));

      let rows = sqlx::query(&pragma).fetch_all(&mut *conn).await?;

      if rows.is_empty() {
         return Err(Error::TableNotFound {
            table: table.to_string(),
         });
      }

      // Sort by cid so the catalog lists columns in table declaration order
      let mut columns: Vec<(i32, String)> = rows
         .iter()
         .map(|row| (row.get("cid"), row.get("name")))
         .collect();
      columns.sort_by_key(|(cid, _)| *cid);

      Self::from_names(
         table.to_string(),
         columns.into_iter().map(|(_, name)| name),
      )
   }
}
