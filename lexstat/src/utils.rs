// src/utils.rs
use anyhow::{Context as _, Result, bail};
use log::warn;
use std::fs;
use std::path::Path;

use crate::core::analysis::TextAnalysis;

/// Loads the input file into a single string.
///
/// # Errors
///
/// This function may return an error if:
/// * The file does not exist or cannot be read as UTF-8 text
/// * The file is empty
pub fn load_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    if content.is_empty() {
        bail!("Input file is empty: {}", path.display());
    }
    Ok(content)
}

/// Renders the ranked words and summary statistics as a report.
///
/// If `top` exceeds the number of distinct words available, the entry list
/// is clamped to what is available and a warning is logged.
pub fn render_report(analysis: &mut TextAnalysis, top: usize) -> String {
    let vocabulary = analysis.vocabulary_stats();
    let tally = analysis.letter_tally();
    let ranked = analysis.ranked_words();

    let available = ranked.len();
    if top > available {
        warn!(
            "requested {top} words to print but only {available} are available, showing {available}"
        );
    }

    let mut report = String::new();
    for (rank, entry) in ranked.iter().take(top).enumerate() {
        report.push_str(&format!("{}. {} ({})\n", rank + 1, entry.word, entry.count));
    }

    report.push('\n');
    report.push_str(&format!(
        "Number of unique words: {}\n",
        vocabulary.unique_words
    ));
    report.push_str(&format!(
        "Total number of words: {}\n",
        vocabulary.total_words
    ));
    report.push_str(&format!(
        "Unique-to-total word ratio: {:.2}%\n",
        vocabulary.calculate_percentage()
    ));
    report.push('\n');
    report.push_str(&format!("Number of vowels: {}\n", tally.vowels));
    report.push_str(&format!("Number of consonants: {}\n", tally.consonants));
    report.push_str(&format!(
        "Vowel-to-consonant ratio: {:.2}%\n",
        tally.calculate_percentage()
    ));

    report
}

/// Prints the report to stdout.
pub fn print_report(analysis: &mut TextAnalysis, top: usize) {
    print!("{}", render_report(analysis, top));
}
