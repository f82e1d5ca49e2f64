//! Family Statistics Query
//!
//! Groups family records by identifier and derives per-family headcounts
//! and average ages.

use std::collections::HashSet;

use tracing::debug;

use crate::error::QueryError;
use crate::records::{Family, FamilySummary};

/// Summarize one family per distinct identifier, in first-encounter order.
///
/// Grouping is first-wins: when two records share an identifier, the later
/// record's person list is dropped wholesale, never merged. Existing callers
/// rely on this, so duplicates must not be summed (see the duplicate-id
/// test below).
///
/// Fails with [`QueryError::NullInput`] when the collection itself is
/// absent; a family whose person list is absent is treated as empty.
pub fn family_statistics(families: Option<&[Family]>) -> Result<Vec<FamilySummary>, QueryError> {
    let families = families.ok_or(QueryError::NullInput)?;

    let mut seen = HashSet::new();
    let mut summaries = Vec::with_capacity(families.len());

    for family in families {
        if !seen.insert(family.id) {
            debug!("duplicate family id {} dropped", family.id.0);
            continue;
        }

        let persons = family.persons.as_deref().unwrap_or(&[]);
        let average_age = if persons.is_empty() {
            0.0
        } else {
            let total: i64 = persons.iter().map(|p| i64::from(p.age)).sum();
            total as f64 / persons.len() as f64
        };

        summaries.push(FamilySummary {
            family_id: family.id,
            member_count: persons.len() as u32,
            average_age,
        });
    }

    Ok(summaries)
}
