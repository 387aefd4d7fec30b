//! Base-query validation and final SQL composition.
//!
//! The translator appends its own ORDER BY and LIMIT/OFFSET, so a base query
//! that already carries any of those at the top level is rejected before
//! anything is interpolated. Clauses inside parenthesized subexpressions,
//! comments, and string literals are allowed.

use sqlx_sqlite_catalog::ColumnCatalog;
use tracing::debug;

use crate::order::{OrderTerm, build_order_by, translate_order};
use crate::request::PageRequest;
use crate::window::{PageWindow, compute_window};
use crate::{Error, Result};

/// Clauses this layer appends and therefore rejects in a base query.
const APPENDED_CLAUSES: [&str; 3] = ["ORDER BY", "LIMIT", "OFFSET"];

/// Everything a page request translates to: resolved ordering plus window.
///
/// Both halves are plain data — hand them to a query-execution layer, or use
/// [`apply_to`](Self::apply_to) to render the final SQL directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
   /// Resolved ordering terms, in tie-break priority order
   pub order: Vec<OrderTerm>,
   /// Offset/limit pair for the requested page
   pub window: PageWindow,
}

impl Translation {
   /// Render the final SQL for a base query.
   pub fn apply_to(&self, base_query: &str) -> Result<String> {
      enhance_query(base_query, &self.order, self.window)
   }
}

/// Translate a page request against a catalog.
///
/// Pure and deterministic: the same `(request, catalog)` pair always yields
/// the same translation or the same error. Sort keys are resolved first, in
/// request order; the window is computed after. Either failure aborts the
/// whole translation.
pub fn translate(
   request: &PageRequest,
   catalog: &impl ColumnCatalog,
) -> Result<Translation> {
   let order = translate_order(&request.sort, catalog)?;
   let window = compute_window(request.page_index, request.page_size)?;

   Ok(Translation { order, window })
}

/// Append ordering and window clauses to a validated base query.
///
/// The order terms are rendered first, exactly in the given order — the
/// sequence is the tie-break priority and reordering it would change result
/// semantics — followed by `LIMIT {limit} OFFSET {offset}`. When `order` is
/// empty the ORDER BY clause is omitted and only the window is appended.
///
/// Trailing whitespace and a trailing semicolon on the base query are
/// trimmed before appending.
pub fn enhance_query(
   base_query: &str,
   order: &[OrderTerm],
   window: PageWindow,
) -> Result<String> {
   validate_base_query(base_query)?;

   let mut sql = base_query
      .trim_end()
      .trim_end_matches(';')
      .trim_end()
      .to_string();

   if !order.is_empty() {
      sql = format!("{} {}", sql, build_order_by(order));
   }
   sql = format!("{} LIMIT {} OFFSET {}", sql, window.limit, window.offset);

   debug!(sql = %sql, "enhanced base query with ordering and window");

   Ok(sql)
}

/// One-call composition: translate `request` against `catalog` and render
/// the final SQL for `base_query`.
pub fn paginate(
   base_query: &str,
   request: &PageRequest,
   catalog: &impl ColumnCatalog,
) -> Result<String> {
   translate(request, catalog)?.apply_to(base_query)
}

/// Validate that a base query carries none of the appended clauses at the
/// top level.
pub(crate) fn validate_base_query(query: &str) -> Result<()> {
   match find_conflicting_clause(query) {
      Some(clause) => Err(Error::ConflictingClause { clause }),
      None => Ok(()),
   }
}

/// Scan for the first top-level occurrence of an appended clause.
///
/// Works on the uppercased query. Tracks paren depth so subqueries are
/// exempt, and skips quoted literals/identifiers (with SQL-standard doubled
/// quote escapes), `--` line comments, and `/* … */` block comments.
fn find_conflicting_clause(query: &str) -> Option<&'static str> {
   let upper = query.to_uppercase();
   let bytes = upper.as_bytes();
   let len = bytes.len();
   let mut depth: i32 = 0;
   let mut i = 0;

   while i < len {
      match bytes[i] {
         b'(' => depth += 1,
         b')' => depth -= 1,
         quote @ (b'\'' | b'"') => {
            i = skip_quoted(bytes, i, quote);
         }
         b'-' if bytes.get(i + 1) == Some(&b'-') => {
            while i < len && bytes[i] != b'\n' {
               i += 1;
            }
         }
         b'/' if bytes.get(i + 1) == Some(&b'*') => {
            i += 2;
            while i + 1 < len && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
               i += 1;
            }
            i += 1; // land on the closing `/`, or run past an unterminated comment
         }
         _ if depth == 0 => {
            for clause in APPENDED_CLAUSES {
               if clause_at(bytes, i, clause.as_bytes()) {
                  return Some(clause);
               }
            }
         }
         _ => {}
      }
      i += 1;
   }

   None
}

/// Whether `clause` appears at position `i` as a standalone keyword, i.e.
/// not embedded in a longer identifier on either side.
fn clause_at(bytes: &[u8], i: usize, clause: &[u8]) -> bool {
   fn is_ident(b: u8) -> bool {
      b.is_ascii_alphanumeric() || b == b'_'
   }

   if !bytes[i..].starts_with(clause) {
      return false;
   }

   let standalone_before = i == 0 || !is_ident(bytes[i - 1]);
   let standalone_after = bytes.get(i + clause.len()).is_none_or(|b| !is_ident(*b));

   standalone_before && standalone_after
}

/// Advance past a quoted literal or identifier opened at `start`, returning
/// the index of the closing quote (or the end for unterminated input).
/// Doubled quotes are escapes, not terminators.
fn skip_quoted(bytes: &[u8], start: usize, quote: u8) -> usize {
   let mut i = start + 1;

   while i < bytes.len() {
      if bytes[i] == quote {
         if bytes.get(i + 1) == Some(&quote) {
            i += 2;
            continue;
         }
         return i;
      }
      i += 1;
   }

   i
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::request::SortKey;
   use sqlx_sqlite_catalog::TableCatalog;

   fn user_catalog() -> TableCatalog {
      TableCatalog::builder("user")
         .columns(["id", "name", "status", "created_on"])
         .build()
         .unwrap()
   }

   // ─── validate_base_query ───

   #[test]
   fn validate_rejects_top_level_order_by() {
      let result = validate_base_query("SELECT * FROM user ORDER BY id");
      assert!(matches!(
         result,
         Err(Error::ConflictingClause { clause: "ORDER BY" })
      ));
   }

   #[test]
   fn validate_rejects_top_level_limit() {
      let result = validate_base_query("SELECT * FROM user LIMIT 10");
      assert!(matches!(
         result,
         Err(Error::ConflictingClause { clause: "LIMIT" })
      ));
   }

   #[test]
   fn validate_rejects_top_level_offset() {
      let result = validate_base_query("SELECT * FROM user LIMIT 10 OFFSET 5");
      assert!(result.is_err());
   }

   #[test]
   fn validate_accepts_clean_query() {
      assert!(validate_base_query("SELECT * FROM user WHERE status = ?").is_ok());
   }

   #[test]
   fn validate_allows_clauses_inside_subquery() {
      assert!(
         validate_base_query("SELECT * FROM (SELECT * FROM user ORDER BY id LIMIT 5)").is_ok()
      );
   }

   #[test]
   fn validate_rejects_order_by_after_subquery() {
      let result =
         validate_base_query("SELECT * FROM (SELECT * FROM user LIMIT 5) ORDER BY id");
      assert!(result.is_err());
   }

   #[test]
   fn validate_is_case_insensitive() {
      assert!(validate_base_query("select * from user order by id").is_err());
      assert!(validate_base_query("select * from user limit 3").is_err());
   }

   #[test]
   fn validate_ignores_clauses_in_comments() {
      assert!(validate_base_query("SELECT * FROM user -- ORDER BY id").is_ok());
      assert!(validate_base_query("SELECT * FROM user /* LIMIT 10 */").is_ok());
   }

   #[test]
   fn validate_detects_clauses_after_comments() {
      assert!(validate_base_query("SELECT * FROM user /* comment */ ORDER BY id").is_err());
      assert!(validate_base_query("SELECT * FROM user -- comment\nLIMIT 10").is_err());
   }

   #[test]
   fn validate_ignores_clauses_in_string_literals() {
      assert!(validate_base_query("SELECT * FROM user WHERE name = 'ORDER BY clause'").is_ok());
      // SQLite escapes single quotes by doubling
      assert!(
         validate_base_query("SELECT * FROM t WHERE name = 'order''s ORDER BY clause'").is_ok()
      );
   }

   #[test]
   fn validate_ignores_clauses_in_quoted_identifiers() {
      assert!(validate_base_query(r#"SELECT "ORDER BY" FROM user"#).is_ok());
      assert!(validate_base_query(r#"SELECT "LIMIT" FROM user"#).is_ok());
   }

   #[test]
   fn validate_ignores_embedded_words() {
      // LIMIT inside a longer identifier is not a clause
      assert!(validate_base_query("SELECT rate_limit FROM user").is_ok());
      assert!(validate_base_query("SELECT limits FROM user").is_ok());
   }

   // ─── enhance_query ───

   fn window(offset: u64, limit: u64) -> PageWindow {
      PageWindow { offset, limit }
   }

   #[test]
   fn enhance_appends_order_then_window() {
      let terms = translate_order(
         &[SortKey::asc("created_on"), SortKey::desc("name")],
         &user_catalog(),
      )
      .unwrap();

      let sql = enhance_query("SELECT * FROM user", &terms, window(20, 10)).unwrap();

      assert_eq!(
         sql,
         r#"SELECT * FROM user ORDER BY "created_on" ASC, "name" DESC LIMIT 10 OFFSET 20"#
      );
   }

   #[test]
   fn enhance_without_order_appends_window_only() {
      let sql = enhance_query("SELECT * FROM user", &[], window(0, 10)).unwrap();
      assert_eq!(sql, "SELECT * FROM user LIMIT 10 OFFSET 0");
   }

   #[test]
   fn enhance_strips_trailing_semicolon() {
      let sql = enhance_query("SELECT * FROM user; ", &[], window(0, 5)).unwrap();
      assert_eq!(sql, "SELECT * FROM user LIMIT 5 OFFSET 0");
   }

   #[test]
   fn enhance_rejects_conflicting_base_query() {
      let result = enhance_query("SELECT * FROM user LIMIT 3", &[], window(0, 5));
      assert!(matches!(result, Err(Error::ConflictingClause { .. })));
   }

   // ─── translate / paginate ───

   #[test]
   fn translate_resolves_order_and_window() {
      let request = PageRequest::new(2, 10)
         .sort_asc("created_on")
         .sort_asc("status")
         .sort_desc("name");

      let translation = translate(&request, &user_catalog()).unwrap();

      assert_eq!(translation.order.len(), 3);
      assert_eq!(translation.window, window(20, 10));
   }

   #[test]
   fn paginate_renders_the_demo_request() {
      let request = PageRequest::new(2, 10)
         .sort_asc("created_on")
         .sort_asc("status")
         .sort_desc("name");

      let sql = paginate("SELECT * FROM user", &request, &user_catalog()).unwrap();

      assert_eq!(
         sql,
         r#"SELECT * FROM user ORDER BY "created_on" ASC, "status" ASC, "name" DESC LIMIT 10 OFFSET 20"#
      );
   }

   #[test]
   fn paginate_without_sort_is_window_only() {
      let request = PageRequest::new(0, 10);

      let sql = paginate("SELECT * FROM user", &request, &user_catalog()).unwrap();

      assert_eq!(sql, "SELECT * FROM user LIMIT 10 OFFSET 0");
   }

   #[test]
   fn unknown_property_fails_before_window_validation() {
      // Sort keys resolve first, so the unknown property wins even though
      // the page size is also invalid
      let request = PageRequest::new(0, 0).sort_asc("unknown_field");

      let result = translate(&request, &user_catalog());

      assert!(matches!(
         result,
         Err(Error::UnknownSortProperty { property }) if property == "unknown_field"
      ));
   }

   #[test]
   fn invalid_page_size_fails_translation() {
      let request = PageRequest::new(1, 0).sort_asc("id");
      let result = translate(&request, &user_catalog());
      assert!(matches!(result, Err(Error::InvalidPageParameters { .. })));
   }
}
