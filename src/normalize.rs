//! Record Normalization
//!
//! Turns one untyped input record into a fully-populated [`WordEntry`].
//! Input records carry no guarantees: any field may be missing, and a
//! non-string value is treated the same as a missing one.

use serde_json::Value;

use crate::model::WordEntry;

/// Level assigned to records carrying no `level` field.
pub const UNCATEGORIZED_LEVEL: &str = "Uncategorized";

/// Normalize one input record.
///
/// The seven copy fields default to the empty string and `level` defaults to
/// [`UNCATEGORIZED_LEVEL`]. The resulting `level` is both the entry field and
/// the key the entry is later grouped under. A missing `initial` is derived
/// as the uppercased first character of the already-defaulted `word`; an
/// empty `word` yields an empty `initial`.
pub fn normalize(record: &Value) -> WordEntry {
    let word = field(record, "word").to_string();
    let level = record
        .get("level")
        .and_then(Value::as_str)
        .unwrap_or(UNCATEGORIZED_LEVEL)
        .to_string();
    let initial = match record.get("initial").and_then(Value::as_str) {
        Some(initial) => initial.to_string(),
        None => derive_initial(&word),
    };

    WordEntry {
        pos: field(record, "pos").to_string(),
        meaning: field(record, "meaning").to_string(),
        phonetic: field(record, "phonetic").to_string(),
        audio: field(record, "audio").to_string(),
        example: field(record, "example").to_string(),
        example_audio: field(record, "exampleAudio").to_string(),
        word,
        level,
        initial,
    }
}

fn field<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or("")
}

/// First character of `word`, uppercased. Uppercasing a single char may
/// expand to several (ß → SS); uncased scripts pass through unchanged.
fn derive_initial(word: &str) -> String {
    word.chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_default()
}
