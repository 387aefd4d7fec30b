//! Offset/limit window computation.

use serde::Serialize;

use crate::{Error, Result};

/// The slice of an ordered result set a page request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
   /// Number of rows to skip: `page_index * page_size`
   pub offset: u64,
   /// Maximum number of rows to return: `page_size`
   pub limit: u64,
}

/// Compute the offset/limit window for a page.
///
/// `offset = page_index * page_size`, `limit = page_size`. No clamping and
/// no upper bound — very large products are the caller's responsibility, but
/// they fail loudly: multiplication is checked and overflow reports
/// [`Error::WindowOverflow`] rather than wrapping.
///
/// A `page_size` of zero is rejected with [`Error::InvalidPageParameters`].
/// This is the single validation point for page parameters; upstream request
/// builders are not trusted to have checked.
pub fn compute_window(page_index: u64, page_size: u64) -> Result<PageWindow> {
   if page_size == 0 {
      return Err(Error::InvalidPageParameters {
         page_index,
         page_size,
      });
   }

   let offset = page_index
      .checked_mul(page_size)
      .ok_or(Error::WindowOverflow {
         page_index,
         page_size,
      })?;

   Ok(PageWindow {
      offset,
      limit: page_size,
   })
}

#[cfg(test)]
mod tests {
   use super::*;

   // ─── compute_window ───

   #[test]
   fn window_is_index_times_size() {
      let window = compute_window(2, 10).unwrap();
      assert_eq!(window.offset, 20);
      assert_eq!(window.limit, 10);
   }

   #[test]
   fn first_page_starts_at_zero() {
      let window = compute_window(0, 10).unwrap();
      assert_eq!(window.offset, 0);
      assert_eq!(window.limit, 10);
   }

   #[test]
   fn page_size_one_is_valid() {
      let window = compute_window(7, 1).unwrap();
      assert_eq!(window.offset, 7);
      assert_eq!(window.limit, 1);
   }

   #[test]
   fn zero_page_size_is_rejected() {
      let result = compute_window(3, 0);
      assert!(matches!(
         result,
         Err(Error::InvalidPageParameters {
            page_index: 3,
            page_size: 0,
         })
      ));
   }

   #[test]
   fn overflow_is_reported_not_wrapped() {
      let result = compute_window(u64::MAX, 2);
      assert!(matches!(result, Err(Error::WindowOverflow { .. })));
   }

   #[test]
   fn largest_exact_product_still_fits() {
      let window = compute_window(u64::MAX, 1).unwrap();
      assert_eq!(window.offset, u64::MAX);
   }
}
