//! Vocabulary Book Builder
//!
//! One-shot migration tool that regroups a flat list of vocabulary word
//! records into per-level books:
//! - `model`: output serde types and the level → book-id derivation
//! - `normalize`: default substitution for incoming records
//! - `grouping`: insertion-ordered grouping by level
//! - `pipeline`: load → transform → save orchestration

pub mod error;
pub mod grouping;
pub mod model;
pub mod normalize;
pub mod pipeline;

// Re-export commonly used types
pub use error::{BuildError, ErrorKind};
pub use model::{derive_book_id, Book, WordEntry};
pub use pipeline::{run, RunSummary};
