// tests/integration_tests/analysis_test.rs
use lexstat::{TextAnalysis, normalize};

#[test]
fn test_analysis_pipeline() {
    let mut analysis = TextAnalysis::new("The cat sat. The cat ran!");

    let ranked = analysis.ranked_words().to_vec();
    assert_eq!(ranked.len(), 4);
    assert_eq!(ranked[0].word, "the");
    assert_eq!(ranked[1].word, "cat");

    assert_eq!(analysis.word_count(), 6);

    let tally = analysis.letter_tally();
    assert_eq!(tally.vowels, 6);
    assert_eq!(tally.consonants, 12);
}

#[test]
fn test_normalize_public_surface() {
    let (cleaned, tally) = normalize("Don't panic!");
    assert_eq!(cleaned, "dont panic");
    assert_eq!(tally.vowels, 3);
    assert_eq!(tally.consonants, 6);
}

#[test]
fn test_repeated_ranking_requests_are_identical() {
    let mut analysis = TextAnalysis::new("red green blue red green red");
    let first = analysis.ranked_words().to_vec();
    let second = analysis.ranked_words().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_only_whitespace_input() {
    let mut analysis = TextAnalysis::new(" \t \n ");
    assert!(analysis.ranked_words().is_empty());
    assert_eq!(analysis.word_count(), 0);
}
