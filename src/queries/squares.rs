//! Filtered Square Query
//!
//! Descending squares divisible by 7, guarded against 32-bit overflow.

use crate::error::QueryError;

/// Collect the squares of integers in `[1, exclusive_upper_limit)` that are
/// evenly divisible by 7, in descending numeric order.
///
/// A limit below 1 yields an empty result rather than an error. A limit at
/// or past `sqrt(i32::MAX)` fails with [`QueryError::Overflow`] before any
/// square is computed; the check is conservative and covers the largest
/// candidate, so per-element checks are unnecessary.
pub fn squares_divisible_by_seven(exclusive_upper_limit: i32) -> Result<Vec<i32>, QueryError> {
    if exclusive_upper_limit < 1 {
        return Ok(Vec::new());
    }

    if (i32::MAX as f64).sqrt() <= f64::from(exclusive_upper_limit) {
        return Err(QueryError::Overflow(exclusive_upper_limit));
    }

    // Candidates ascend, so walking the range backwards yields the squares
    // already in descending order.
    Ok((1..exclusive_upper_limit)
        .rev()
        .map(|n| n * n)
        .filter(|square| square % 7 == 0)
        .collect())
}
