//! Validated column handles

use crate::{Error, Result};

/// A handle to a single column of an addressable table.
///
/// A `ColumnRef` can only be created from a name that passed
/// [validation](ColumnRef::new), so holding one is proof the name is safe to
/// interpolate into SQL. The handle carries no direction — a query layer
/// pairs it with a sort direction when it builds an ORDER BY term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
   name: String,
}

impl ColumnRef {
   /// Create a column handle, validating the name.
   ///
   /// Accepts names matching `[a-zA-Z_][a-zA-Z0-9_]*`. Catalog columns are
   /// per-table and unqualified, so dotted names are rejected.
   pub fn new(name: impl Into<String>) -> Result<Self> {
      let name = name.into();
      validate_column_name(&name)?;
      Ok(Self { name })
   }

   /// The column name as it appears in the table.
   pub fn name(&self) -> &str {
      &self.name
   }

   /// The column name quoted as a double-quoted SQL identifier.
   ///
   /// Validation already rejects embedded quotes, but quoting also keeps
   /// reserved words (e.g. a column named `order`) usable.
   pub fn quoted(&self) -> String {
      quote_identifier(&self.name)
   }
}

/// Validate that a column name is safe for SQL interpolation.
fn validate_column_name(name: &str) -> Result<()> {
   let mut chars = name.chars();

   let valid_first = chars
      .next()
      .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_');
   let valid_rest = chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_');

   if valid_first && valid_rest {
      Ok(())
   } else {
      Err(Error::InvalidColumnName {
         name: name.to_string(),
      })
   }
}

/// Quote an identifier with double-quote delimiters.
///
/// Any embedded double quotes are doubled per SQL standard (`"` → `""`).
pub(crate) fn quote_identifier(name: &str) -> String {
   format!("\"{}\"", name.replace('"', "\"\""))
}
