//! Even Number Query
//!
//! Ascending even integers strictly between 0 and an exclusive upper limit.

use crate::error::QueryError;

/// Collect the even integers in `[1, exclusive_upper_limit)`, ascending.
///
/// A limit of 1 is the smallest valid input and yields an empty result;
/// anything lower fails with [`QueryError::InvalidArgument`].
pub fn even_numbers(exclusive_upper_limit: i32) -> Result<Vec<i32>, QueryError> {
    if exclusive_upper_limit < 1 {
        return Err(QueryError::InvalidArgument(exclusive_upper_limit));
    }

    Ok((2..exclusive_upper_limit).step_by(2).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_limit_below_one() {
        assert_eq!(even_numbers(0), Err(QueryError::InvalidArgument(0)));
        assert_eq!(even_numbers(-5), Err(QueryError::InvalidArgument(-5)));
    }

    #[test]
    fn test_limit_one_yields_empty() {
        assert_eq!(even_numbers(1).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_evens_below_ten() {
        assert_eq!(even_numbers(10).unwrap(), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_limit_itself_is_excluded() {
        // 8 is even, so it must not appear for limit 8
        assert_eq!(even_numbers(8).unwrap(), vec![2, 4, 6]);
        assert_eq!(even_numbers(9).unwrap(), vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_repeat_calls_match() {
        assert_eq!(even_numbers(100), even_numbers(100));
    }
}
