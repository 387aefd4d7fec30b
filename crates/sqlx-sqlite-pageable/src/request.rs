//! Page request value objects.
//!
//! These are the already-parsed, backend-agnostic form of what an upstream
//! HTTP or CLI layer extracts from `page`, `size`, and `sort=property,dir`
//! style parameters. Parsing itself is out of scope here.

use serde::{Deserialize, Serialize};

/// Sort direction for a single sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
   /// Ascending order (smallest first)
   Asc,
   /// Descending order (largest first)
   Desc,
}

impl SortDirection {
   /// The SQL keyword for this direction.
   pub fn as_sql(self) -> &'static str {
      match self {
         SortDirection::Asc => "ASC",
         SortDirection::Desc => "DESC",
      }
   }
}

/// One caller-supplied ordering criterion: a property name and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortKey {
   /// Property name to be resolved against a column catalog
   pub property: String,
   /// Sort direction for this property
   pub direction: SortDirection,
}

impl SortKey {
   /// Create an ascending sort key.
   pub fn asc(property: impl Into<String>) -> Self {
      Self {
         property: property.into(),
         direction: SortDirection::Asc,
      }
   }

   /// Create a descending sort key.
   pub fn desc(property: impl Into<String>) -> Self {
      Self {
         property: property.into(),
         direction: SortDirection::Desc,
      }
   }
}

/// An abstract pagination request: which page, how large, ordered how.
///
/// Sort keys are significant in order — the first key is the primary sort,
/// later keys break ties. An empty sort list is valid (the window still
/// applies). Duplicate property names are permitted and pass through as
/// redundant ORDER BY terms.
///
/// `page_index` is zero-based. Unsigned fields make negative inputs
/// unrepresentable; `page_size == 0` is rejected at translation time, not
/// here.
///
/// # Examples
///
/// ```
/// use sqlx_sqlite_pageable::PageRequest;
///
/// let request = PageRequest::new(2, 10)
///    .sort_asc("created_on")
///    .sort_asc("status")
///    .sort_desc("name");
///
/// assert_eq!(request.sort.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
   /// Zero-based page index
   pub page_index: u64,
   /// Rows per page (must be at least 1 to translate)
   pub page_size: u64,
   /// Ordering criteria, first entry highest priority
   #[serde(default)]
   pub sort: Vec<SortKey>,
}

impl PageRequest {
   /// Create a request with no ordering.
   pub fn new(page_index: u64, page_size: u64) -> Self {
      Self {
         page_index,
         page_size,
         sort: Vec::new(),
      }
   }

   /// Append an ascending sort key.
   pub fn sort_asc(mut self, property: impl Into<String>) -> Self {
      self.sort.push(SortKey::asc(property));
      self
   }

   /// Append a descending sort key.
   pub fn sort_desc(mut self, property: impl Into<String>) -> Self {
      self.sort.push(SortKey::desc(property));
      self
   }
}
