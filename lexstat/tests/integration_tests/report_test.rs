// tests/integration_tests/report_test.rs
use lexstat::{TextAnalysis, render_report};

fn entry_lines(report: &str) -> usize {
    report.lines().take_while(|line| !line.is_empty()).count()
}

#[test]
fn test_report_clamps_when_too_few_words() {
    let mut analysis = TextAnalysis::new("alpha beta beta gamma");
    let report = render_report(&mut analysis, 10);

    assert_eq!(entry_lines(&report), 3);
    assert!(report.starts_with("1. beta (2)\n2. alpha (1)\n3. gamma (1)\n"));
}

#[test]
fn test_report_shows_requested_count() {
    let mut analysis = TextAnalysis::new("alpha beta beta gamma");
    let report = render_report(&mut analysis, 2);

    assert_eq!(entry_lines(&report), 2);
}

#[test]
fn test_report_summary_sections() {
    let mut analysis = TextAnalysis::new("The cat sat. The cat ran!");
    let report = render_report(&mut analysis, 10);

    assert!(report.contains("Number of unique words: 4"));
    assert!(report.contains("Total number of words: 6"));
    assert!(report.contains("Unique-to-total word ratio: 66.67%"));
    assert!(report.contains("Number of vowels: 6"));
    assert!(report.contains("Number of consonants: 12"));
    assert!(report.contains("Vowel-to-consonant ratio: 50.00%"));
}

#[test]
fn test_report_empty_input_is_all_zeros() {
    let mut analysis = TextAnalysis::new("");
    let report = render_report(&mut analysis, 10);

    assert_eq!(entry_lines(&report), 0);
    assert!(report.contains("Number of unique words: 0"));
    assert!(report.contains("Total number of words: 0"));
    assert!(report.contains("Unique-to-total word ratio: 0.00%"));
    assert!(report.contains("Number of vowels: 0"));
    assert!(report.contains("Number of consonants: 0"));
    assert!(report.contains("Vowel-to-consonant ratio: 0.00%"));
}
