//! Transform Pipeline
//!
//! load → normalize → group → build → save, one synchronous pass. The output
//! document is rendered fully in memory before the output file is touched, so
//! a failing run never leaves a partial or truncated file behind.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::BuildError;
use crate::grouping::group_by_level;
use crate::model::{derive_book_id, Book, WordEntry};
use crate::normalize::normalize;

/// Counts reported to the operator after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub words: usize,
    pub books: usize,
}

/// Read the input file and parse it as a JSON array of records.
pub fn load(path: &Path) -> Result<Vec<Value>, BuildError> {
    let text = fs::read_to_string(path).map_err(|source| BuildError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value =
        serde_json::from_str(&text).map_err(|source| BuildError::InputParse {
            path: path.to_path_buf(),
            source,
        })?;
    match document {
        Value::Array(records) => Ok(records),
        _ => Err(BuildError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Normalize every record, rejecting any array element that is not an object.
pub fn normalize_all(path: &Path, records: &[Value]) -> Result<Vec<WordEntry>, BuildError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if record.is_object() {
                Ok(normalize(record))
            } else {
                Err(BuildError::NotAnObject {
                    path: path.to_path_buf(),
                    index,
                })
            }
        })
        .collect()
}

/// Turn the ordered level groups into output books.
pub fn build_books(groups: Vec<(String, Vec<WordEntry>)>) -> Vec<Book> {
    groups
        .into_iter()
        .map(|(level, words)| Book {
            id: derive_book_id(&level),
            title: level,
            words,
        })
        .collect()
}

/// Serialize the books (2-space indent, non-ASCII emitted literally) and
/// write the output file in one shot.
pub fn save(books: &[Book], path: &Path) -> Result<(), BuildError> {
    let mut json = serde_json::to_string_pretty(books).map_err(BuildError::Serialize)?;
    json.push('\n');
    fs::write(path, json).map_err(|source| BuildError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the whole transform from input path to output path.
///
/// The output file is written only if every prior stage succeeded; on
/// failure a pre-existing file at `output` is left untouched.
pub fn run(input: &Path, output: &Path) -> Result<RunSummary, BuildError> {
    let records = load(input)?;
    let entries = normalize_all(input, &records)?;
    let words = entries.len();
    let books = build_books(group_by_level(entries));
    let book_count = books.len();
    save(&books, output)?;
    Ok(RunSummary {
        words,
        books: book_count,
    })
}
