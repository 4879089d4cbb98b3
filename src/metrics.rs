//! Content metrics extraction.
//!
//! Turns cleaned body text into the three numbers every other stage works
//! from: word count, sentence count and readability score.

use serde::Serialize;

use crate::patterns::SENTENCE_TERMINATORS;
use crate::readability::{FleschReadingEase, ReadabilityFormula};

/// Texts shorter than this many characters get a readability score of `0.0`.
pub const MIN_READABILITY_CHARS: usize = 100;

/// Names accepted by [`Metrics::feature`], in field order.
pub const FEATURE_NAMES: &[&str] = &[
    "word_count",
    "sentence_count",
    "flesch_reading_ease",
    "readability_score",
    "avg_words_per_sentence",
];

/// Metrics derived from a single snapshot of body text.
///
/// Normally built by [`extract`], so every field describes the same input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    /// Number of whitespace-delimited tokens.
    pub word_count: usize,

    /// Number of non-empty segments between runs of `.`, `!` or `?`.
    ///
    /// Text without any terminal punctuation counts as zero sentences, not
    /// one. The scorer and recommendation generator both rely on this.
    pub sentence_count: usize,

    /// Flesch Reading Ease score, or `0.0` for short or unscorable text.
    pub readability_score: f64,
}

impl Metrics {
    /// Average words per sentence, or `None` when no sentence was detected.
    #[must_use]
    pub fn avg_words_per_sentence(&self) -> Option<f64> {
        (self.sentence_count > 0).then(|| self.word_count as f64 / self.sentence_count as f64)
    }

    /// Look up a metric by its feature name.
    ///
    /// Recognised names are `word_count`, `sentence_count`,
    /// `flesch_reading_ease` (alias `readability_score`) and
    /// `avg_words_per_sentence` (`0.0` without sentences).
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<f64> {
        match name {
            "word_count" => Some(self.word_count as f64),
            "sentence_count" => Some(self.sentence_count as f64),
            "flesch_reading_ease" | "readability_score" => Some(self.readability_score),
            "avg_words_per_sentence" => Some(self.avg_words_per_sentence().unwrap_or(0.0)),
            _ => None,
        }
    }
}

/// Extract metrics from `text` with the default readability formula and
/// the default 100 character readability floor.
///
/// # Example
///
/// ```rust
/// use rs_content_quality::metrics::extract;
///
/// let metrics = extract("Hello. World.");
/// assert_eq!(metrics.word_count, 2);
/// assert_eq!(metrics.sentence_count, 2);
/// assert_eq!(metrics.readability_score, 0.0);
/// ```
#[must_use]
pub fn extract(text: &str) -> Metrics {
    extract_with(text, MIN_READABILITY_CHARS, &FleschReadingEase)
}

/// Extract metrics from `text` with a custom readability floor and formula.
///
/// Never fails: a formula error degrades the readability score to `0.0`.
#[must_use]
pub fn extract_with<F>(text: &str, min_readability_chars: usize, formula: &F) -> Metrics
where
    F: ReadabilityFormula + ?Sized,
{
    Metrics {
        word_count: count_words(text),
        sentence_count: count_sentences(text),
        readability_score: readability(text, min_readability_chars, formula),
    }
}

/// Count whitespace-delimited tokens.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count segments between runs of `.`, `!`, `?` that contain non-whitespace.
///
/// An unterminated text is never split, so it yields zero sentences unless
/// the trailing fragment follows an earlier terminator.
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    if !SENTENCE_TERMINATORS.is_match(text) {
        return 0;
    }
    SENTENCE_TERMINATORS
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

fn readability<F>(text: &str, min_chars: usize, formula: &F) -> f64
where
    F: ReadabilityFormula + ?Sized,
{
    if text.chars().count() < min_chars {
        return 0.0;
    }
    match formula.score(text) {
        Ok(score) => score,
        Err(err) => {
            tracing::debug!("readability degraded to 0.0: {err}");
            0.0
        }
    }
}
