//! Compiled regex patterns for text metrics.
//!
//! All patterns are compiled once on first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches a run of sentence-terminating punctuation.
pub static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("SENTENCE_TERMINATORS regex"));

/// Matches a group of consecutive vowels (including `y`) for syllable estimation.
pub static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[aeiouy]+").expect("VOWEL_GROUP regex"));

/// Matches word endings where a trailing `e` is silent ("make", "lines").
///
/// `le` after a consonant ("table") is excluded because it is voiced.
pub static SILENT_E_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[^aeiouyl]e|[^aeiouy]es|[^aeiouytd]ed)$").expect("SILENT_E_SUFFIX regex")
});
