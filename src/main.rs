//! Tally Query Demo
//!
//! Standalone walkthrough exercising each query once.

use tally::queries::{even_numbers, family_statistics, letter_frequency, squares_divisible_by_seven};
use tally::records::{Family, FamilyId, Person};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Tally query toolkit demo starting...");

    let evens = even_numbers(20)?;
    info!("Even numbers below 20: {:?}", evens);

    let squares = squares_divisible_by_seven(100)?;
    info!("Squares of 1..100 divisible by 7: {:?}", squares);

    let families = vec![
        Family {
            id: FamilyId(1),
            persons: Some(vec![Person { age: 10 }, Person { age: 20 }]),
        },
        Family {
            id: FamilyId(2),
            persons: None,
        },
    ];
    let summaries = family_statistics(Some(&families))?;
    info!("Family summaries: {}", serde_json::to_string(&summaries)?);

    let letters = letter_frequency("The quick brown fox jumps over the lazy dog");
    info!("Letter frequencies: {}", serde_json::to_string(&letters)?);

    info!("Demo complete");
    Ok(())
}
