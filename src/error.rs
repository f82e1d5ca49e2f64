//! Query failure taxonomy

use thiserror::Error;

/// Precondition violations surfaced directly to the caller.
///
/// No query produces partial output: each returns a complete result or
/// fails before building anything.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("exclusive upper limit must be at least 1, got {0}")]
    InvalidArgument(i32),

    #[error("squaring candidates below {0} would exceed the 32-bit integer range")]
    Overflow(i32),

    #[error("families collection is required")]
    NullInput,
}
