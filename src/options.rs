//! Configuration options for content analysis.
//!
//! The `Options` struct controls where the quality classifier is loaded
//! from and how the metrics and report are produced.

use std::path::{Path, PathBuf};

use crate::metrics::MIN_READABILITY_CHARS;

/// Environment variable overriding the classifier artifact path.
pub const MODEL_PATH_ENV: &str = "CONTENT_QUALITY_MODEL";

/// Classifier artifact path used when none is configured.
pub const DEFAULT_MODEL_PATH: &str = "models/quality_model.json";

/// Configuration options for content analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_content_quality::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     enable_classifier: false,
///     preview_chars: 200,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Minimum text length (characters) before readability is computed.
    ///
    /// Shorter texts get a readability score of `0.0`.
    ///
    /// Default: `100`
    pub min_readability_chars: usize,

    /// Path of the classifier artifact (JSON).
    ///
    /// Default: `None` (resolves to `models/quality_model.json`)
    pub model_path: Option<PathBuf>,

    /// Classify content with the trained model.
    ///
    /// When disabled no model is loaded and the label is always "Unknown".
    ///
    /// Default: `true`
    pub enable_classifier: bool,

    /// Number of characters kept in the report's content preview.
    ///
    /// Default: `500`
    pub preview_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_readability_chars: MIN_READABILITY_CHARS,
            model_path: None,
            enable_classifier: true,
            preview_chars: 500,
        }
    }
}

impl Options {
    /// Default options with the model path taken from `CONTENT_QUALITY_MODEL`
    /// when it is set and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        let model_path = std::env::var_os(MODEL_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self {
            model_path,
            ..Self::default()
        }
    }

    /// The classifier artifact path, falling back to the default location.
    #[must_use]
    pub fn resolved_model_path(&self) -> &Path {
        self.model_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_MODEL_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.min_readability_chars, 100);
        assert!(options.model_path.is_none());
        assert!(options.enable_classifier);
        assert_eq!(options.preview_chars, 500);
    }

    #[test]
    fn resolved_model_path_falls_back_to_default() {
        let options = Options::default();
        assert_eq!(options.resolved_model_path(), Path::new(DEFAULT_MODEL_PATH));

        let options = Options {
            model_path: Some(PathBuf::from("/srv/models/q.json")),
            ..Options::default()
        };
        assert_eq!(options.resolved_model_path(), Path::new("/srv/models/q.json"));
    }
}
