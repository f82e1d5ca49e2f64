//! Letter Frequency Query
//!
//! Case-insensitive occurrence counts for characters inside a fixed
//! code-point window.

use std::collections::HashMap;

use crate::records::LetterStatistic;

/// Inclusive code-point window a character must fall in to be counted.
/// Spans 'A' through 'z', which also admits the six symbols between 'Z'
/// and 'a' (`[`, `\`, `]`, `^`, `_`, `` ` ``). Existing callers depend on
/// the window as-is; narrowing it to letters only would change results.
const WINDOW_START: u32 = 65;
const WINDOW_END: u32 = 122;

/// Count occurrences per distinct admitted character, folded to uppercase,
/// in the order each character is first seen scanning left to right.
///
/// Characters outside the window (digits, whitespace, anything non-ASCII)
/// are skipped. Any string is acceptable; an empty string yields an empty
/// result.
pub fn letter_frequency(text: &str) -> Vec<LetterStatistic> {
    let mut slots: HashMap<char, usize> = HashMap::new();
    let mut stats: Vec<LetterStatistic> = Vec::new();

    for ch in text.chars() {
        if !(WINDOW_START..=WINDOW_END).contains(&(ch as u32)) {
            continue;
        }

        // Symbols have no case mapping and fold to themselves
        let letter = ch.to_ascii_uppercase();
        match slots.get(&letter) {
            Some(&slot) => stats[slot].occurrences += 1,
            None => {
                slots.insert(letter, stats.len());
                stats.push(LetterStatistic {
                    letter,
                    occurrences: 1,
                });
            }
        }
    }

    stats
}
