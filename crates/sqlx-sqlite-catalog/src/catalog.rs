//! The catalog lookup contract and its in-memory implementation

use indexmap::IndexMap;

use crate::column::ColumnRef;
use crate::{Error, Result};

/// Lookup contract required of any column catalog.
///
/// Implementations must be pure and side-effect free: the same property name
/// always resolves to the same handle (or to nothing) for the lifetime of the
/// catalog. Query layers call this once per requested sort key, so lookup
/// should be O(1) or close to it.
pub trait ColumnCatalog {
   /// Resolve a property name to its column handle.
   ///
   /// Names are case-sensitive. Returns `None` when no such column exists.
   fn lookup(&self, property: &str) -> Option<&ColumnRef>;
}

/// Immutable catalog of the addressable columns of one table.
///
/// Built once — through [`TableCatalog::builder`] or
/// [`TableCatalog::introspect`](TableCatalog::introspect) — and frozen for
/// its lifetime. A frozen catalog is plain shared data: concurrent lookups
/// from any number of threads need no synchronization.
///
/// # Examples
///
/// ```
/// use sqlx_sqlite_catalog::{ColumnCatalog, TableCatalog};
///
/// let catalog = TableCatalog::builder("user")
///    .column("id")
///    .column("name")
///    .column("status")
///    .column("created_on")
///    .build()?;
///
/// assert!(catalog.lookup("status").is_some());
/// assert!(catalog.lookup("Status").is_none()); // case-sensitive
/// # Ok::<(), sqlx_sqlite_catalog::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TableCatalog {
   /// Table the columns belong to
   table: String,

   /// Column handles keyed by name, in declaration order
   columns: IndexMap<String, ColumnRef>,
}

impl TableCatalog {
   /// Start building a catalog for `table`.
   pub fn builder(table: impl Into<String>) -> TableCatalogBuilder {
      TableCatalogBuilder {
         table: table.into(),
         columns: Vec::new(),
      }
   }

   /// The table this catalog describes.
   pub fn table(&self) -> &str {
      &self.table
   }

   /// Iterate the column handles in declaration order.
   pub fn columns(&self) -> impl Iterator<Item = &ColumnRef> {
      self.columns.values()
   }

   /// Number of columns in the catalog.
   pub fn len(&self) -> usize {
      self.columns.len()
   }

   /// Whether the catalog has no columns.
   pub fn is_empty(&self) -> bool {
      self.columns.is_empty()
   }

   pub(crate) fn from_names<I, S>(table: String, names: I) -> Result<Self>
   where
      I: IntoIterator<Item = S>,
      S: Into<String>,
   {
      let mut columns = IndexMap::new();

      for name in names {
         let column = ColumnRef::new(name)?;
         let name = column.name().to_string();
         if columns.insert(name.clone(), column).is_some() {
            return Err(Error::DuplicateColumn {
               name,
               table: table.clone(),
            });
         }
      }

      Ok(Self { table, columns })
   }
}

impl ColumnCatalog for TableCatalog {
   fn lookup(&self, property: &str) -> Option<&ColumnRef> {
      self.columns.get(property)
   }
}

/// Builder for [`TableCatalog`].
///
/// Collects column names and validates them all in [`build`](Self::build) —
/// invalid names and duplicates fail the whole catalog rather than being
/// silently skipped.
#[derive(Debug)]
pub struct TableCatalogBuilder {
   table: String,
   columns: Vec<String>,
}

impl TableCatalogBuilder {
   /// Add a column by name.
   pub fn column(mut self, name: impl Into<String>) -> Self {
      self.columns.push(name.into());
      self
   }

   /// Add several columns at once.
   pub fn columns<I, S>(mut self, names: I) -> Self
   where
      I: IntoIterator<Item = S>,
      S: Into<String>,
   {
      self.columns.extend(names.into_iter().map(Into::into));
      self
   }

   /// Validate every column name and freeze the catalog.
   pub fn build(self) -> Result<TableCatalog> {
      TableCatalog::from_names(self.table, self.columns)
   }
}
