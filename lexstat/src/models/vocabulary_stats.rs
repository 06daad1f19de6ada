// src/models/vocabulary_stats.rs

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyStats {
    pub unique_words: u64,
    pub total_words: u64,
}

impl VocabularyStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unique_words: 0,
            total_words: 0,
        }
    }

    /// Unique-to-total word ratio as a percentage, rounded to two decimal
    /// places. Returns 0.0 when the text holds no words.
    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn calculate_percentage(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        let ratio = (self.unique_words as f64 / self.total_words as f64) * 100.0;
        (ratio * 100.0).round() / 100.0
    }
}
