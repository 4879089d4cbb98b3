//! Advisory recommendations derived from content metrics.
//!
//! Three independent checks run in a fixed order (length, readability,
//! structure) and each contributes exactly one recommendation. The structure
//! check is skipped entirely for documents without detected sentences,
//! matching the scorer, which gives such documents no structure credit.

use std::fmt;

use serde::Serialize;

use crate::metrics::Metrics;

/// The metric a recommendation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Word count.
    Length,
    /// Flesch Reading Ease.
    Readability,
    /// Average words per sentence.
    Structure,
}

/// Whether a recommendation praises or warns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// The metric is in its target range.
    Positive,
    /// The metric needs attention.
    Warning,
}

/// A single piece of advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// The metric this advice is about.
    pub category: Category,
    /// Praise or warning.
    pub kind: Kind,
    /// Short headline, e.g. "Thin content".
    pub title: &'static str,
    /// What to do about it.
    pub detail: &'static str,
}

impl Recommendation {
    const fn new(category: Category, kind: Kind, title: &'static str, detail: &'static str) -> Self {
        Self {
            category,
            kind,
            title,
            detail,
        }
    }

    /// Whether this recommendation is a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.kind == Kind::Warning
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.detail)
    }
}

const THIN_CONTENT: Recommendation = Recommendation::new(
    Category::Length,
    Kind::Warning,
    "Thin content",
    "Consider expanding to at least 500-1500 words for better SEO.",
);
const GOOD_LENGTH: Recommendation = Recommendation::new(
    Category::Length,
    Kind::Positive,
    "Good length",
    "Consider adding more depth to reach 1500+ words for comprehensive coverage.",
);
const EXCELLENT_LENGTH: Recommendation = Recommendation::new(
    Category::Length,
    Kind::Positive,
    "Excellent length",
    "Your content has substantial depth.",
);
const TOO_DIFFICULT: Recommendation = Recommendation::new(
    Category::Readability,
    Kind::Warning,
    "Difficult to read",
    "Simplify sentences and use clearer language (target 50-70).",
);
const TOO_SIMPLE: Recommendation = Recommendation::new(
    Category::Readability,
    Kind::Warning,
    "Too simple",
    "Consider adding more sophisticated content for authority.",
);
const GOOD_READABILITY: Recommendation = Recommendation::new(
    Category::Readability,
    Kind::Positive,
    "Good readability",
    "Your content is accessible to most readers.",
);
const LONG_SENTENCES: Recommendation = Recommendation::new(
    Category::Structure,
    Kind::Warning,
    "Long sentences",
    "Break up complex sentences (target 15-25 words/sentence).",
);
const SHORT_SENTENCES: Recommendation = Recommendation::new(
    Category::Structure,
    Kind::Warning,
    "Very short sentences",
    "Vary sentence length for better flow.",
);
const GOOD_STRUCTURE: Recommendation = Recommendation::new(
    Category::Structure,
    Kind::Positive,
    "Good sentence structure",
    "Well-balanced sentence length.",
);

/// Build the ordered recommendation list for `metrics`.
///
/// Returns three entries, or two when no sentence was detected.
///
/// # Example
///
/// ```rust
/// use rs_content_quality::metrics::Metrics;
/// use rs_content_quality::recommend::recommend;
///
/// let metrics = Metrics { word_count: 200, sentence_count: 0, readability_score: 0.0 };
/// let titles: Vec<_> = recommend(&metrics).iter().map(|r| r.title).collect();
/// assert_eq!(titles, ["Thin content", "Difficult to read"]);
/// ```
#[must_use]
pub fn recommend(metrics: &Metrics) -> Vec<Recommendation> {
    let mut recommendations = Vec::with_capacity(3);
    recommendations.push(length(metrics.word_count));
    recommendations.push(readability(metrics.readability_score));
    if let Some(avg) = metrics.avg_words_per_sentence() {
        recommendations.push(structure(avg));
    }
    recommendations
}

fn length(word_count: usize) -> Recommendation {
    if word_count < 500 {
        THIN_CONTENT
    } else if word_count < 1000 {
        GOOD_LENGTH
    } else {
        EXCELLENT_LENGTH
    }
}

fn readability(score: f64) -> Recommendation {
    if score < 40.0 {
        TOO_DIFFICULT
    } else if score > 80.0 {
        TOO_SIMPLE
    } else {
        GOOD_READABILITY
    }
}

fn structure(avg_words_per_sentence: f64) -> Recommendation {
    if avg_words_per_sentence > 30.0 {
        LONG_SENTENCES
    } else if avg_words_per_sentence < 10.0 {
        SHORT_SENTENCES
    } else {
        GOOD_STRUCTURE
    }
}
