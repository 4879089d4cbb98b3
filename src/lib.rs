//! # rs-content-quality
//!
//! Content quality analysis for the body text of web pages.
//!
//! Given plain text already extracted from a page, this library derives
//! content metrics, turns them into an explainable 0-100 quality score,
//! asks a trained classifier for a quality label, and produces
//! recommendations for improving the content.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_content_quality::{analyze_with_options, Options};
//!
//! let text = "Search engines reward pages that answer questions well. \
//!             Clear structure helps readers and crawlers alike.";
//! let options = Options { enable_classifier: false, ..Options::default() };
//!
//! let report = analyze_with_options(text, &options);
//! println!("Score: {}", report.quality_score);
//! for rec in &report.recommendations {
//!     println!("{rec}");
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Metrics**: word count, sentence count, Flesch Reading Ease
//! - **Score**: length (40) + readability (40) + structure (20) points
//! - **Label**: a [`classifier::Predictor`] fed features in schema order
//! - **Recommendations**: one per length, readability and structure
//!
//! The classifier is optional. When its artifact is missing or corrupt the
//! label degrades to "Unknown" and everything else is still reported.

mod analyze;
mod error;
mod options;
mod patterns;
mod result;

/// Flesch Reading Ease formula and syllable estimation.
pub mod readability;

/// Word, sentence and readability metrics.
pub mod metrics;

/// Banded 0-100 quality scoring.
pub mod scorer;

/// Quality classification through a pluggable trained predictor.
pub mod classifier;

/// Process-wide classifier holder.
pub mod registry;

/// Recommendations derived from metrics.
pub mod recommend;

// Public API - re-exports
pub use analyze::Analyzer;
pub use classifier::{QualityClassifier, QualityLabel};
pub use error::{Error, Result};
pub use metrics::Metrics;
pub use options::{Options, DEFAULT_MODEL_PATH, MODEL_PATH_ENV};
pub use recommend::Recommendation;
pub use result::AnalysisReport;
pub use scorer::QualityScore;

/// Analyses body text using default options.
///
/// The classifier is loaded on first use from `models/quality_model.json`;
/// if that fails the label is "Unknown" for the rest of the process.
///
/// # Example
///
/// ```rust
/// use rs_content_quality::analyze;
///
/// let report = analyze("Hello. World.");
/// assert_eq!(report.sentence_count, 2);
/// assert_eq!(report.recommendations.len(), 3);
/// ```
#[must_use]
pub fn analyze(text: &str) -> AnalysisReport {
    analyze_with_options(text, &Options::default())
}

/// Analyses body text with custom options.
///
/// When the classifier is enabled it comes from the process-wide
/// [`registry::shared`] slot, so the model path of the first call wins.
///
/// # Example
///
/// ```rust
/// use rs_content_quality::{analyze_with_options, Options};
///
/// let options = Options {
///     enable_classifier: false,
///     ..Options::default()
/// };
/// let report = analyze_with_options("Just a few words", &options);
/// assert_eq!(report.word_count, 4);
/// assert_eq!(report.sentence_count, 0);
/// assert_eq!(report.quality_score.value(), 20);
/// ```
#[must_use]
pub fn analyze_with_options(text: &str, options: &Options) -> AnalysisReport {
    analyze::analyze_content(text, options)
}
