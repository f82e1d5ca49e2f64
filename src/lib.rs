//! Tally Query Toolkit
//!
//! Stateless queries over numeric ranges, family records, and free text.
//! Every operation is a pure function: inputs in, freshly built result out.

pub mod error;
pub mod queries;
pub mod records;

pub use error::QueryError;
pub use queries::{even_numbers, family_statistics, letter_frequency, squares_divisible_by_seven};
pub use records::*;
