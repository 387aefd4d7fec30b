//! Error types for sqlx-sqlite-catalog

/// A type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that may occur when building or introspecting a column catalog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// Error from the sqlx library. Standard sqlx errors are converted to
   /// this variant during introspection.
   #[error(transparent)]
   Sqlx(#[from] sqlx::Error),

   /// Column name contains characters that are not safe to interpolate
   /// into SQL.
   ///
   /// Catalog columns are per-table and unqualified, so the accepted
   /// charset is `[a-zA-Z_][a-zA-Z0-9_]*` (no dots).
   #[error("invalid column name '{name}': must match [a-zA-Z_][a-zA-Z0-9_]*")]
   InvalidColumnName { name: String },

   /// The same column name was added to a catalog twice.
   #[error("duplicate column '{name}' in catalog for table '{table}'")]
   DuplicateColumn { name: String, table: String },

   /// The table does not exist in the database being introspected.
   #[error("table '{table}' does not exist")]
   TableNotFound { table: String },
}

impl Error {
   /// Extract a structured error code from the error type.
   ///
   /// This provides machine-readable error codes for error handling.
   pub fn error_code(&self) -> String {
      match self {
         Error::Sqlx(e) => {
            if let Some(code) = e.as_database_error().and_then(|db_err| db_err.code()) {
               return format!("SQLITE_{}", code);
            }
            "SQLX_ERROR".to_string()
         }
         Error::InvalidColumnName { .. } => "INVALID_COLUMN_NAME".to_string(),
         Error::DuplicateColumn { .. } => "DUPLICATE_COLUMN".to_string(),
         Error::TableNotFound { .. } => "TABLE_NOT_FOUND".to_string(),
      }
   }
}
