// src/cli.rs
use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::core::analysis::TextAnalysis;
use crate::utils::{load_text, print_report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File to analyze
    #[arg(short, long, default_value = "file.txt")]
    pub file: PathBuf,

    /// Analyze this string instead of reading a file
    #[arg(short, long)]
    pub string: Option<String>,

    /// Number of ranked words to show
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Resolves the input text from the arguments and prints the report.
///
/// String mode wins over file mode when `--string` is given; an empty
/// string value is rejected rather than falling back to the file.
///
/// # Errors
///
/// This function may return an error if:
/// * An empty string was passed to `--string`
/// * The input file is missing, unreadable or empty
pub fn run(args: Args) -> Result<()> {
    let text = match args.string {
        Some(string) => {
            if string.is_empty() {
                bail!("Please provide a non-empty string");
            }
            string
        }
        None => load_text(&args.file)?,
    };

    let mut analysis = TextAnalysis::new(text);
    print_report(&mut analysis, args.top);

    Ok(())
}
