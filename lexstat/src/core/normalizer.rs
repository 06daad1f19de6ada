// src/core/normalizer.rs
use crate::models::LetterTally;

const fn is_vowel(letter: char) -> bool {
    matches!(letter, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Lowercases the raw text and strips every ASCII punctuation character,
/// tallying vowels and consonants along the way.
///
/// # Arguments
///
/// * `text` - The raw input text
///
/// # Returns
///
/// The cleaned lowercase string, paired with the vowel/consonant tally of
/// the retained characters. An empty input yields an empty string and a
/// zero tally.
#[must_use]
pub fn normalize(text: &str) -> (String, LetterTally) {
    let mut cleaned = String::with_capacity(text.len());
    let mut tally = LetterTally::new();

    for letter in text.chars() {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_punctuation() {
            continue;
        }
        cleaned.push(letter);
        classify(letter, &mut tally);
    }

    (cleaned, tally)
}

/// Tallies a retained character as vowel or consonant. Digits, whitespace
/// and anything else outside the ASCII alphabet are skipped.
fn classify(letter: char, tally: &mut LetterTally) {
    if !letter.is_ascii_alphabetic() {
        return;
    }
    if is_vowel(letter) {
        tally.vowels = tally.vowels.saturating_add(1);
    } else {
        tally.consonants = tally.consonants.saturating_add(1);
    }
}
