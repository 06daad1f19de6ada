// src/core/analysis.rs
use std::collections::HashMap;

use crate::core::normalizer::normalize;
use crate::models::{LetterTally, VocabularyStats, WordCount};

/// One analysis session over a single immutable input text.
///
/// A fresh session holds only the raw text. The first statistics accessor
/// runs the full pipeline (normalize, tokenize, count, rank) and memoizes
/// the ranking; every later call serves the cached result without
/// recomputation.
#[derive(Debug)]
pub struct TextAnalysis {
    text: String,
    tally: LetterTally,
    word_count: u64,
    frequency: Option<Vec<WordCount>>,
}

impl TextAnalysis {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tally: LetterTally::new(),
            word_count: 0,
            frequency: None,
        }
    }

    /// Returns the frequency ranking, sorted by count descending.
    ///
    /// Words sharing a count keep the order in which they first appeared in
    /// the text: the ranking is built from an insertion-ordered list of
    /// pairs and sorted with a stable sort, so ties never depend on hash
    /// map iteration order.
    ///
    /// Computed on the first call and cached for the lifetime of the
    /// session.
    pub fn ranked_words(&mut self) -> &[WordCount] {
        if self.frequency.is_none() {
            let ranked = self.rank_words();
            self.frequency = Some(ranked);
        }
        self.frequency.as_deref().unwrap_or_default()
    }

    /// Vowel and consonant counts of the cleaned text.
    pub fn letter_tally(&mut self) -> LetterTally {
        self.ranked_words();
        self.tally
    }

    /// Total number of words in the text, repeats included.
    pub fn word_count(&mut self) -> u64 {
        self.ranked_words();
        self.word_count
    }

    /// Unique and total word counts.
    pub fn vocabulary_stats(&mut self) -> VocabularyStats {
        let unique_words = u64::try_from(self.ranked_words().len()).unwrap_or(u64::MAX);
        VocabularyStats {
            unique_words,
            total_words: self.word_count,
        }
    }

    fn rank_words(&mut self) -> Vec<WordCount> {
        let words = self.split_into_words();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<WordCount> = Vec::new();

        for word in words {
            if let Some(&slot) = index.get(&word) {
                if let Some(entry) = counts.get_mut(slot) {
                    entry.count = entry.count.saturating_add(1);
                }
            } else {
                index.insert(word.clone(), counts.len());
                counts.push(WordCount { word, count: 1 });
            }
        }

        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    fn split_into_words(&mut self) -> Vec<String> {
        let (cleaned, tally) = normalize(&self.text);
        self.tally = tally;

        let words: Vec<String> = cleaned.split_whitespace().map(ToOwned::to_owned).collect();
        self.word_count = u64::try_from(words.len()).unwrap_or(u64::MAX); // Fallback to max value if conversion fails
        words
    }
}
