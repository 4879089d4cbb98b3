//! Flesch Reading Ease readability formula.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher scores are easier to read. 60-70 is plain English; scores above
//! 100 and below 0 are possible for degenerate text and are not clamped.
//!
//! Syllables are estimated heuristically from vowel groups with a silent-`e`
//! correction, which is accurate enough for scoring bands of 10 points.

use crate::error::{Error, Result};
use crate::patterns::{SENTENCE_TERMINATORS, SILENT_E_SUFFIX, VOWEL_GROUP};

/// A formula that maps plain text to a readability score.
///
/// Implementations may fail on input they cannot handle; callers in this
/// crate treat any failure as a `0.0` score.
pub trait ReadabilityFormula: Send + Sync {
    /// Compute the readability score of `text`.
    fn score(&self, text: &str) -> Result<f64>;
}

/// The Flesch Reading Ease formula, rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleschReadingEase;

impl ReadabilityFormula for FleschReadingEase {
    fn score(&self, text: &str) -> Result<f64> {
        flesch_reading_ease(text)
    }
}

/// Compute the Flesch Reading Ease score of `text`.
///
/// Unterminated text is treated as a single sentence. Text without any
/// alphanumeric word is an error.
///
/// # Examples
///
/// ```
/// use rs_content_quality::readability::flesch_reading_ease;
///
/// let score = flesch_reading_ease("The cat sat on the mat. The dog ran fast.")?;
/// assert!(score > 100.0);
/// # Ok::<(), rs_content_quality::Error>(())
/// ```
pub fn flesch_reading_ease(text: &str) -> Result<f64> {
    let words: Vec<&str> = lexicon(text).collect();
    if words.is_empty() {
        return Err(Error::Readability("text contains no words".to_string()));
    }

    let sentences = formula_sentence_count(text).max(1);
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;
    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;

    if !score.is_finite() {
        return Err(Error::Readability(format!("non-finite score {score}")));
    }

    Ok((score * 100.0).round() / 100.0)
}

/// Estimate the syllable count of a single word.
///
/// Non-alphabetic characters are ignored. Every word with at least one
/// letter has at least one syllable.
#[must_use]
pub fn count_syllables(word: &str) -> usize {
    let cleaned: String = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect::<String>()
        .to_ascii_lowercase();

    if cleaned.is_empty() {
        // Non-latin or numeric tokens still count as one spoken unit.
        return usize::from(word.chars().any(char::is_alphanumeric));
    }
    if cleaned.len() <= 3 {
        return 1;
    }

    let mut count = VOWEL_GROUP.find_iter(&cleaned).count();
    if SILENT_E_SUFFIX.is_match(&cleaned) {
        count = count.saturating_sub(1);
    }
    count.max(1)
}

/// Words as seen by the formula: whitespace tokens carrying at least one
/// alphanumeric character (bare punctuation is dropped).
fn lexicon(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
}

fn formula_sentence_count(text: &str) -> usize {
    SENTENCE_TERMINATORS
        .split(text)
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
}
