/// Result type alias for pagination operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pagination translation.
///
/// Every variant carries the offending input. Translation either fully
/// succeeds or fails with one of these — there is no partial output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// Error from the column catalog.
   #[error(transparent)]
   Catalog(#[from] sqlx_sqlite_catalog::Error),

   /// A requested sort property does not exist in the catalog.
   ///
   /// Reported for the first unknown property in request order; later sort
   /// keys are not inspected.
   #[error("unknown sort property '{property}'")]
   UnknownSortProperty { property: String },

   /// Page size must be at least 1.
   #[error("invalid page parameters: page index {page_index}, page size {page_size} (page size must be at least 1)")]
   InvalidPageParameters { page_index: u64, page_size: u64 },

   /// `page_index * page_size` does not fit in the offset type.
   #[error("page window overflow: page index {page_index} times page size {page_size} exceeds the representable offset range")]
   WindowOverflow { page_index: u64, page_size: u64 },

   /// Base query already contains a clause this layer appends.
   ///
   /// ORDER BY, LIMIT, and OFFSET are generated from the page request;
   /// a base query carrying its own top-level copy would conflict.
   /// Subquery usage is fine.
   #[error("base query must not contain a top-level {clause} clause (pagination appends its own ordering and window; subquery usage is fine)")]
   ConflictingClause { clause: &'static str },
}

impl Error {
   /// Extract a structured error code from the error type.
   ///
   /// This provides machine-readable error codes for error handling —
   /// callers can map "bad user input" codes like `UNKNOWN_SORT_PROPERTY`
   /// to a client error without string matching.
   pub fn error_code(&self) -> String {
      match self {
         Error::Catalog(e) => e.error_code(),
         Error::UnknownSortProperty { .. } => "UNKNOWN_SORT_PROPERTY".to_string(),
         Error::InvalidPageParameters { .. } => "INVALID_PAGE_PARAMETERS".to_string(),
         Error::WindowOverflow { .. } => "WINDOW_OVERFLOW".to_string(),
         Error::ConflictingClause { .. } => "CONFLICTING_CLAUSE".to_string(),
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_error_code_unknown_sort_property() {
      let err = Error::UnknownSortProperty {
         property: "scoer".into(),
      };
      assert_eq!(err.error_code(), "UNKNOWN_SORT_PROPERTY");
      assert!(err.to_string().contains("scoer"));
   }

   #[test]
   fn test_error_code_invalid_page_parameters() {
      let err = Error::InvalidPageParameters {
         page_index: 3,
         page_size: 0,
      };
      assert_eq!(err.error_code(), "INVALID_PAGE_PARAMETERS");
      assert!(err.to_string().contains("page size 0"));
   }

   #[test]
   fn test_error_code_window_overflow() {
      let err = Error::WindowOverflow {
         page_index: u64::MAX,
         page_size: 2,
      };
      assert_eq!(err.error_code(), "WINDOW_OVERFLOW");
   }

   #[test]
   fn test_error_code_conflicting_clause() {
      let err = Error::ConflictingClause { clause: "LIMIT" };
      assert_eq!(err.error_code(), "CONFLICTING_CLAUSE");
      assert!(err.to_string().contains("LIMIT"));
   }

   #[test]
   fn test_error_code_catalog_delegates_to_inner() {
      let inner = sqlx_sqlite_catalog::Error::InvalidColumnName { name: "x y".into() };
      let err = Error::Catalog(inner);
      assert_eq!(err.error_code(), "INVALID_COLUMN_NAME");
   }
}
