//! The analysis pipeline: metrics, then score and label, then advice.
//!
//! Each call works on its own local values; the only shared state is the
//! read-only classifier an [`Analyzer`] holds.

use std::fmt;
use std::sync::Arc;

use crate::classifier::{QualityClassifier, QualityLabel};
use crate::metrics;
use crate::options::Options;
use crate::readability::{FleschReadingEase, ReadabilityFormula};
use crate::recommend::recommend;
use crate::registry::{self, ClassifierStatus};
use crate::result::{preview, AnalysisReport};
use crate::scorer::ScoreBreakdown;

/// Runs the analysis pipeline with a fixed configuration and classifier.
///
/// # Example
///
/// ```rust
/// use rs_content_quality::{Analyzer, Options};
///
/// let analyzer = Analyzer::new(Options::default());
/// let report = analyzer.analyze("Hello world.");
/// assert_eq!(report.word_count, 2);
/// assert!(report.quality_label.is_unknown());
/// ```
pub struct Analyzer {
    options: Options,
    formula: Box<dyn ReadabilityFormula>,
    classifier: Option<Arc<QualityClassifier>>,
    unavailable_reason: Option<String>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("options", &self.options)
            .field("classifier", &self.classifier)
            .field("unavailable_reason", &self.unavailable_reason)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// An analyzer without a classifier; labels are always "Unknown".
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            formula: Box::new(FleschReadingEase),
            classifier: None,
            unavailable_reason: None,
        }
    }

    /// An analyzer using the process-wide classifier, loading it on first
    /// use from the configured model path.
    ///
    /// A load failure is logged once and leaves the analyzer in degraded
    /// mode; it is not an error.
    #[must_use]
    pub fn from_shared(options: Options) -> Self {
        if !options.enable_classifier {
            return Self::new(options);
        }
        let status = registry::shared().get_or_load(options.resolved_model_path());
        Self::new(options).with_status(&status)
    }

    /// Use `classifier` for labels.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<QualityClassifier>) -> Self {
        self.classifier = Some(classifier);
        self.unavailable_reason = None;
        self
    }

    /// Use the outcome of a classifier load: the classifier when it loaded,
    /// degraded mode otherwise.
    #[must_use]
    pub fn with_status(mut self, status: &ClassifierStatus) -> Self {
        match status {
            ClassifierStatus::Ready(classifier) => self.with_classifier(Arc::clone(classifier)),
            ClassifierStatus::Unavailable(err) => {
                self.classifier = None;
                self.unavailable_reason = Some(err.to_string());
                self
            }
        }
    }

    /// Replace the readability formula.
    #[must_use]
    pub fn with_formula(mut self, formula: impl ReadabilityFormula + 'static) -> Self {
        self.formula = Box::new(formula);
        self
    }

    /// Whether labels come from a classifier.
    #[must_use]
    pub fn has_classifier(&self) -> bool {
        self.options.enable_classifier && self.classifier.is_some()
    }

    /// Analyse one document of plain body text.
    ///
    /// Never fails. Problems that cost information (no content, no
    /// classifier, a failed prediction) are reported in `warnings`.
    #[must_use]
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let mut warnings = Vec::new();

        let metrics = metrics::extract_with(
            text,
            self.options.min_readability_chars,
            self.formula.as_ref(),
        );
        if metrics.word_count == 0 {
            warnings.push(
                "No content to analyse - the page might be JavaScript-heavy or empty".to_string(),
            );
        }

        let score_breakdown = ScoreBreakdown::from_metrics(&metrics);
        let quality_score = score_breakdown.total();
        let quality_label = self.label(&metrics, &mut warnings);
        let recommendations = recommend(&metrics);

        tracing::debug!(
            word_count = metrics.word_count,
            sentence_count = metrics.sentence_count,
            readability = metrics.readability_score,
            score = quality_score.value(),
            label = %quality_label,
            "content analysed"
        );

        AnalysisReport {
            word_count: metrics.word_count,
            sentence_count: metrics.sentence_count,
            readability_score: metrics.readability_score,
            quality_score,
            score_breakdown,
            quality_label,
            recommendations,
            content_preview: preview(text, self.options.preview_chars),
            warnings,
        }
    }

    fn label(&self, metrics: &metrics::Metrics, warnings: &mut Vec<String>) -> QualityLabel {
        if !self.options.enable_classifier {
            return QualityLabel::unknown();
        }
        let Some(classifier) = &self.classifier else {
            let reason = self
                .unavailable_reason
                .as_deref()
                .unwrap_or("no model configured");
            warnings.push(format!("Quality classifier unavailable: {reason}"));
            return QualityLabel::unknown();
        };
        match classifier.classify(metrics) {
            Ok(label) => label,
            Err(err) => {
                tracing::warn!(error = %err, "quality prediction failed");
                warnings.push(format!("Quality prediction failed: {err}"));
                QualityLabel::unknown()
            }
        }
    }
}

/// Analyse `text` with the process-wide classifier.
pub(crate) fn analyze_content(text: &str, options: &Options) -> AnalysisReport {
    Analyzer::from_shared(options.clone()).analyze(text)
}
