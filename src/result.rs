//! Result types for analysis output.
//!
//! This module defines the payload handed to whatever presents the
//! analysis: metrics, score, label and recommendations for one document.

use serde::{Serialize, Serializer};

use crate::classifier::QualityLabel;
use crate::metrics::Metrics;
use crate::recommend::Recommendation;
use crate::scorer::{QualityScore, ScoreBreakdown};

/// Result of analysing one document.
///
/// Always complete: only `quality_label` degrades (to "Unknown") when the
/// classifier is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Number of whitespace-delimited words.
    pub word_count: usize,

    /// Number of detected sentences (zero for unterminated text).
    pub sentence_count: usize,

    /// Flesch Reading Ease score, `0.0` for short or unscorable text.
    pub readability_score: f64,

    /// Bounded 0-100 quality score.
    pub quality_score: QualityScore,

    /// Points behind `quality_score`, per component.
    pub score_breakdown: ScoreBreakdown,

    /// Predicted quality label, or "Unknown".
    pub quality_label: QualityLabel,

    /// Advice ordered by category: length, readability, structure.
    ///
    /// Serialised as `"<title>: <detail>"` strings.
    #[serde(serialize_with = "serialize_texts")]
    pub recommendations: Vec<Recommendation>,

    /// Leading characters of the analysed text.
    pub content_preview: String,

    /// Non-fatal issues encountered during analysis.
    ///
    /// For example:
    /// - No content to analyse
    /// - Classifier unavailable (label is "Unknown")
    /// - Prediction failed for this document
    pub warnings: Vec<String>,
}

impl AnalysisReport {
    /// The metrics this report was built from.
    #[must_use]
    pub fn metrics(&self) -> Metrics {
        Metrics {
            word_count: self.word_count,
            sentence_count: self.sentence_count,
            readability_score: self.readability_score,
        }
    }

    /// Recommendations rendered as `"<title>: <detail>"` strings.
    #[must_use]
    pub fn recommendation_texts(&self) -> Vec<String> {
        self.recommendations.iter().map(ToString::to_string).collect()
    }
}

fn serialize_texts<S: Serializer>(
    recommendations: &[Recommendation],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(recommendations.iter().map(ToString::to_string))
}

/// The first `max_chars` characters of `text`, with "..." appended when
/// anything was cut.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_text() {
        assert_eq!(preview("short", 500), "short");
        assert_eq!(preview("", 500), "");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("ééééé", 2), "éé...");
        assert_eq!(preview("abc", 3), "abc");
    }
}
