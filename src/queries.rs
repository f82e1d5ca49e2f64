//! Query operations - one module per query
//!
//! Each query is independent of the others; none share state.

pub mod even_numbers;
pub mod family_stats;
pub mod letter_frequency;
pub mod squares;

pub use even_numbers::even_numbers;
pub use family_stats::family_statistics;
pub use letter_frequency::letter_frequency;
pub use squares::squares_divisible_by_seven;
