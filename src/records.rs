//! Record shapes consumed and produced by the queries
//!
//! Input records mirror data the caller owns; result records are snapshots
//! built once per call, with no lifecycle beyond normal scope exit.

use serde::{Deserialize, Serialize};

// ============================================================================
// Identity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyId(pub i64);

// ============================================================================
// Input Records
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Person {
    pub age: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
    pub id: FamilyId,
    /// An absent list and an empty list summarize identically.
    pub persons: Option<Vec<Person>>,
}

// ============================================================================
// Query Results
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FamilySummary {
    pub family_id: FamilyId,
    pub member_count: u32,
    pub average_age: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterStatistic {
    pub letter: char,
    pub occurrences: u32,
}
