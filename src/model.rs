//! Output Data Model
//!
//! Serde types for the transformed wordbook document plus the level → book-id
//! derivation rule. Field declaration order fixes the JSON key order.

use serde::{Deserialize, Serialize};

/// One normalized vocabulary word. Every field is present and string-valued
/// in the output; absent input fields were defaulted during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub pos: String,
    pub meaning: String,
    pub phonetic: String,
    pub audio: String,
    pub example: String,
    #[serde(rename = "exampleAudio")]
    pub example_audio: String,
    pub level: String,
    pub initial: String,
}

/// One output book: all words sharing a level, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub words: Vec<WordEntry>,
}

/// Fixed level → id overrides for the three KET tiers.
///
/// Kept as a data table rather than branching so a new tier is a one-line
/// addition.
pub const BOOK_ID_OVERRIDES: &[(&str, &str)] = &[
    ("KET一级", "ket_level_1"),
    ("KET二级", "ket_level_2"),
    ("KET三级", "ket_level_3"),
];

/// Derive a book id from its level name.
///
/// An exact (case-sensitive) match against [`BOOK_ID_OVERRIDES`] wins;
/// any other level is lowercased with every space replaced by an underscore.
/// No other character class is rewritten.
pub fn derive_book_id(level: &str) -> String {
    BOOK_ID_OVERRIDES
        .iter()
        .find(|(name, _)| *name == level)
        .map(|(_, id)| (*id).to_string())
        .unwrap_or_else(|| level.to_lowercase().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels_map_to_fixed_ids() {
        assert_eq!(derive_book_id("KET一级"), "ket_level_1");
        assert_eq!(derive_book_id("KET二级"), "ket_level_2");
        assert_eq!(derive_book_id("KET三级"), "ket_level_3");
    }

    #[test]
    fn test_unknown_levels_get_slug_ids() {
        assert_eq!(derive_book_id("Basic Words"), "basic_words");
        assert_eq!(derive_book_id("Uncategorized"), "uncategorized");
        // Multiple spaces are all replaced
        assert_eq!(derive_book_id("My Word List"), "my_word_list");
    }

    #[test]
    fn test_override_match_is_case_sensitive() {
        // "ket一级" misses the table and falls through to the slug rule
        assert_eq!(derive_book_id("ket一级"), "ket一级");
    }

    #[test]
    fn test_only_spaces_are_rewritten() {
        // Tabs and punctuation pass through untouched
        assert_eq!(derive_book_id("A-B\tC"), "a-b\tc");
        assert_eq!(derive_book_id("Unit 1: Food"), "unit_1:_food");
    }
}
