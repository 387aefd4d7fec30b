//! Sort-key translation against a column catalog.

use sqlx_sqlite_catalog::{ColumnCatalog, ColumnRef};

use crate::request::{SortDirection, SortKey};
use crate::{Error, Result};

/// One resolved ordering term: a column handle paired with a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTerm {
   /// Resolved column handle
   pub column: ColumnRef,
   /// Sort direction for this column
   pub direction: SortDirection,
}

impl OrderTerm {
   /// Render this term as an ORDER BY fragment, e.g. `"name" DESC`.
   pub fn sql(&self) -> String {
      format!("{} {}", self.column.quoted(), self.direction.as_sql())
   }
}

/// Resolve sort keys to ordering terms against a catalog.
///
/// Keys are resolved in input order, and the output preserves that order
/// exactly — it is the SQL-level tie-break priority, first term primary.
/// The first property missing from the catalog aborts translation with
/// [`Error::UnknownSortProperty`]; no partial list is ever returned.
/// Duplicate properties are resolved each time they appear and pass through
/// as redundant terms.
///
/// An empty slice translates to an empty list: pagination without ordering
/// is valid.
pub fn translate_order(
   sort: &[SortKey],
   catalog: &impl ColumnCatalog,
) -> Result<Vec<OrderTerm>> {
   let mut terms = Vec::with_capacity(sort.len());

   for key in sort {
      let column = catalog
         .lookup(&key.property)
         .ok_or_else(|| Error::UnknownSortProperty {
            property: key.property.clone(),
         })?;

      terms.push(OrderTerm {
         column: column.clone(),
         direction: key.direction,
      });
   }

   Ok(terms)
}

/// Build the ORDER BY clause from resolved terms.
///
/// Callers must not pass an empty slice — an empty ORDER BY is not valid
/// SQL, and [`enhance_query`](crate::enhance_query) omits the clause
/// entirely in that case.
pub(crate) fn build_order_by(order: &[OrderTerm]) -> String {
   let parts: Vec<String> = order.iter().map(OrderTerm::sql).collect();
   format!("ORDER BY {}", parts.join(", "))
}
