//! Flesch Reading Ease scoring.
//!
//! The score is `206.835 - 1.015 * (words / sentences) - 84.6 *
//! (syllables / words)`, computed only when the document has at least one
//! sentence and one word; otherwise the defined result is `0.0`.
//!
//! Syllables are estimated per word with a vowel-group heuristic (see
//! [`count_syllables`]); the estimate is deliberately cheap and matches the
//! behavior readability tools conventionally use.
//!
//! # Examples
//!
//! ```
//! use sagitta::analysis::readability::count_syllables;
//!
//! assert_eq!(count_syllables("cake"), 1);
//! assert_eq!(count_syllables("banana"), 3);
//! assert_eq!(count_syllables(""), 0);
//! ```

use crate::document::Document;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Estimate the syllable count of a single word.
///
/// The word is lowercased, then vowel-group starts are counted (a vowel
/// whose predecessor is not a vowel), one is subtracted for a trailing `e`,
/// and the result is floored at 1. The empty string is defined to have 0
/// syllables and never reaches the first-character check.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    if chars.is_empty() {
        return 0;
    }

    let mut count: i64 = 0;
    if VOWELS.contains(&chars[0]) {
        count += 1;
    }
    for index in 1..chars.len() {
        if VOWELS.contains(&chars[index]) && !VOWELS.contains(&chars[index - 1]) {
            count += 1;
        }
    }
    if chars[chars.len() - 1] == 'e' {
        count -= 1;
    }

    count.max(1) as usize
}

/// Compute the Flesch Reading Ease score for a document.
///
/// Words are the non-punctuation, non-whitespace tokens; syllables are
/// summed over their surface text. Returns `0.0` for a document with no
/// sentences or no words.
pub fn flesch_reading_ease(doc: &Document) -> f64 {
    let total_sentences = doc.sentences().len();
    let total_words = doc.words().count();
    if total_sentences == 0 || total_words == 0 {
        return 0.0;
    }

    let total_syllables: usize = doc.words().map(|t| count_syllables(&t.text)).sum();

    206.835
        - 1.015 * (total_words as f64 / total_sentences as f64)
        - 84.6 * (total_syllables as f64 / total_words as f64)
}
