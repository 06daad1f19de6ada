// src/models/word_count.rs

/// A distinct word and the number of times it occurs in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}
