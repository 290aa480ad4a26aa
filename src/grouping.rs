//! Insertion-Ordered Grouping
//!
//! Groups word entries by level while preserving the order in which each
//! level was first seen. That order later fixes the order of books in the
//! output document, so it is behavior, not an implementation detail.

use rustc_hash::FxHashMap;

use crate::model::WordEntry;

/// Group entries by their `level` field.
///
/// Group order equals first-seen order of each level; within a group, entries
/// keep their relative input order. Hash maps do not guarantee key order, so
/// the map only indexes into the ordered group list.
pub fn group_by_level(entries: Vec<WordEntry>) -> Vec<(String, Vec<WordEntry>)> {
    let mut groups: Vec<(String, Vec<WordEntry>)> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for entry in entries {
        let slot = match index.get(&entry.level) {
            Some(&slot) => slot,
            None => {
                index.insert(entry.level.clone(), groups.len());
                groups.push((entry.level.clone(), Vec::new()));
                groups.len() - 1
            }
        };
        groups[slot].1.push(entry);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, level: &str) -> WordEntry {
        WordEntry {
            word: word.to_string(),
            pos: String::new(),
            meaning: String::new(),
            phonetic: String::new(),
            audio: String::new(),
            example: String::new(),
            example_audio: String::new(),
            level: level.to_string(),
            initial: String::new(),
        }
    }

    #[test]
    fn test_groups_follow_first_seen_order() {
        let entries = vec![
            entry("w1", "B"),
            entry("w2", "A"),
            entry("w3", "B"),
            entry("w4", "A"),
        ];
        let groups = group_by_level(entries);

        // B was seen first, so it comes first
        let levels: Vec<&str> = groups.iter().map(|(level, _)| level.as_str()).collect();
        assert_eq!(levels, ["B", "A"]);

        // Relative order of same-level entries is preserved
        let b_words: Vec<&str> = groups[0].1.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(b_words, ["w1", "w3"]);
        let a_words: Vec<&str> = groups[1].1.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(a_words, ["w2", "w4"]);
    }

    #[test]
    fn test_every_entry_lands_in_exactly_one_group() {
        let entries = vec![
            entry("w1", "A"),
            entry("w2", "B"),
            entry("w3", "C"),
            entry("w4", "A"),
            entry("w5", "B"),
        ];
        let total: usize = group_by_level(entries)
            .iter()
            .map(|(_, words)| words.len())
            .sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_group_key_matches_member_levels() {
        let entries = vec![entry("w1", "A"), entry("w2", "B"), entry("w3", "A")];
        for (level, words) in group_by_level(entries) {
            for word in words {
                assert_eq!(word.level, level);
            }
        }
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_by_level(Vec::new()).is_empty());
    }
}
