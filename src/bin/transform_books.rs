//! Regroup a flat vocabulary word list into per-level books.
//!
//! Reads a JSON array of word records, groups them by their level tag and
//! writes one book per level, in the order the levels first appear.
//!
//! Usage:
//!   cargo run --bin transform_books [-- INPUT OUTPUT]

use std::path::PathBuf;

use book_builder::grouping::group_by_level;
use book_builder::pipeline;

const DEFAULT_INPUT_PATH: &str = "upload/builtin_books.json";
const DEFAULT_OUTPUT_PATH: &str = "assets/builtin_books.json";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string()));
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()));

    println!("\n{}", "=".repeat(60));
    println!("VOCABULARY BOOK TRANSFORM");
    println!("{}", "=".repeat(60));
    println!("  Input:  {}", input.display());
    println!("  Output: {}", output.display());
    println!();

    let records = pipeline::load(&input)?;
    let entries = pipeline::normalize_all(&input, &records)?;
    let word_count = entries.len();

    let books = pipeline::build_books(group_by_level(entries));
    for book in &books {
        println!("  {} [{}]: {} words", book.title, book.id, book.words.len());
    }

    pipeline::save(&books, &output)?;
    println!("\n✓ Saved: {}", output.display());
    println!(
        "Successfully transformed {} words into {} books.",
        word_count,
        books.len()
    );
    Ok(())
}
