// src/models.rs
pub mod letter_tally;
pub mod vocabulary_stats;
pub mod word_count;

pub use letter_tally::LetterTally;
pub use vocabulary_stats::VocabularyStats;
pub use word_count::WordCount;
