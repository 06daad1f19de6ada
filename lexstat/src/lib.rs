// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use crate::core::analysis::TextAnalysis;
pub use crate::core::normalizer::normalize;
pub use models::{LetterTally, VocabularyStats, WordCount};
pub use utils::{load_text, print_report, render_report};
