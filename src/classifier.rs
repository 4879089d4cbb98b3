//! Quality classification through an externally trained predictor.
//!
//! A trained model is only ever seen through the [`Predictor`] trait: it
//! receives one [`FeatureVector`] and returns a label. The adapter's job is
//! building that vector in exactly the column order the model was trained
//! with, which is carried alongside the model as a [`FeatureSchema`].
//!
//! Model and schema are persisted together as one JSON artifact:
//!
//! ```json
//! {
//!   "feature_columns": ["word_count", "sentence_count", "flesch_reading_ease"],
//!   "model": {
//!     "kind": "decision_tree",
//!     "nodes": [
//!       { "feature": 0, "threshold": 800.0, "left": 1, "right": 2 },
//!       { "label": "Low" },
//!       { "label": "High" }
//!     ]
//!   }
//! }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::metrics::{Metrics, FEATURE_NAMES};

/// Label reported when no classifier is available.
pub const UNKNOWN_LABEL: &str = "Unknown";

// =============================================================================
// Labels
// =============================================================================

/// Categorical quality label produced by a predictor.
///
/// The label is kept exactly as the predictor returned it; [`tier`] only
/// interprets it for display.
///
/// [`tier`]: QualityLabel::tier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityLabel(String);

impl QualityLabel {
    /// Wrap a predictor label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The "Unknown" label used in degraded mode.
    #[must_use]
    pub fn unknown() -> Self {
        Self(UNKNOWN_LABEL.to_string())
    }

    /// Whether this is the degraded-mode label.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_LABEL
    }

    /// The label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map the label onto the Low/Medium/High tiers, case-insensitively.
    #[must_use]
    pub fn tier(&self) -> Option<QualityTier> {
        match self.0.to_ascii_lowercase().as_str() {
            "low" => Some(QualityTier::Low),
            "medium" => Some(QualityTier::Medium),
            "high" => Some(QualityTier::High),
            _ => None,
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of quality tiers used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum QualityTier {
    /// Thin or hard-to-read content.
    Low,
    /// Acceptable content with room to improve.
    Medium,
    /// Substantial, readable content.
    High,
}

// =============================================================================
// Feature schema and vectors
// =============================================================================

/// Ordered feature names a predictor was trained on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    /// Build a schema, rejecting empty schemas and unknown feature names.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err(Error::SchemaMismatch("feature schema is empty".to_string()));
        }
        if let Some(unknown) = columns
            .iter()
            .find(|name| !FEATURE_NAMES.contains(&name.as_str()))
        {
            return Err(Error::SchemaMismatch(format!(
                "unknown feature '{unknown}' (expected one of: {})",
                FEATURE_NAMES.join(", ")
            )));
        }
        Ok(Self { columns })
    }

    /// Column names in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always `false`; empty schemas are rejected on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Build the feature vector for `metrics` in schema order.
    pub fn vector<'s>(&'s self, metrics: &Metrics) -> Result<FeatureVector<'s>> {
        let values = self
            .columns
            .iter()
            .map(|name| {
                metrics.feature(name).ok_or_else(|| {
                    Error::SchemaMismatch(format!("metrics have no feature '{name}'"))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(FeatureVector {
            names: &self.columns,
            values,
        })
    }
}

/// A single row of named features, ordered by its schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector<'s> {
    names: &'s [String],
    values: Vec<f64>,
}

impl FeatureVector<'_> {
    /// Feature values in schema order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Feature names in schema order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        self.names
    }

    /// Value of the named feature.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.values.get(i).copied())
    }
}

// =============================================================================
// Predictor capability
// =============================================================================

/// A trained model seen as a black box from features to a label.
pub trait Predictor: Send + Sync {
    /// Predict the top label for one feature row.
    fn predict(&self, features: &FeatureVector<'_>) -> Result<String>;

    /// Check the model can consume rows of `width` features.
    fn check_width(&self, _width: usize) -> Result<()> {
        Ok(())
    }
}

/// A schema paired with the predictor trained on it.
pub struct QualityClassifier {
    schema: FeatureSchema,
    predictor: Box<dyn Predictor>,
}

impl fmt::Debug for QualityClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QualityClassifier")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl QualityClassifier {
    /// Pair a schema with a predictor, checking the predictor accepts it.
    pub fn new(schema: FeatureSchema, predictor: impl Predictor + 'static) -> Result<Self> {
        predictor.check_width(schema.len())?;
        Ok(Self {
            schema,
            predictor: Box::new(predictor),
        })
    }

    /// Load a classifier artifact from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ModelNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::ModelLoad(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Decode a classifier artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_str(json).map_err(|e| Error::ModelLoad(e.to_string()))?;
        artifact.into_classifier()
    }

    /// The schema this classifier was trained on.
    #[must_use]
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Predict the quality label for `metrics`.
    pub fn classify(&self, metrics: &Metrics) -> Result<QualityLabel> {
        let features = self.schema.vector(metrics)?;
        self.predictor.predict(&features).map(QualityLabel::new)
    }
}

// =============================================================================
// Persisted artifact
// =============================================================================

/// On-disk pairing of feature columns and model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Feature names in training order.
    pub feature_columns: Vec<String>,
    /// The trained model.
    pub model: ModelSpec,
}

impl ModelArtifact {
    /// Validate the pairing and build a classifier from it.
    pub fn into_classifier(self) -> Result<QualityClassifier> {
        let schema = FeatureSchema::new(self.feature_columns)?;
        match self.model {
            ModelSpec::DecisionTree(tree) => QualityClassifier::new(schema, tree),
            ModelSpec::Linear(linear) => QualityClassifier::new(schema, linear),
        }
    }
}

/// Built-in model kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    /// `"kind": "decision_tree"`.
    DecisionTree(DecisionTree),
    /// `"kind": "linear"`.
    Linear(LinearModel),
}

/// A node of a [`DecisionTree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Go to `left` when `features[feature] <= threshold`, else `right`.
    Split {
        /// Column index into the feature vector.
        feature: usize,
        /// Values at or below this go left.
        threshold: f64,
        /// Node index taken when the value is at or below `threshold`.
        left: usize,
        /// Node index taken otherwise.
        right: usize,
    },
    /// Terminal node carrying the predicted label.
    Leaf {
        /// The predicted label.
        label: String,
    },
}

/// A binary decision tree stored as a flat node list rooted at index 0.
///
/// Loaded artifacts must point children forward (checked by
/// [`Predictor::check_width`]). A walk that visits more nodes than the tree
/// holds is reported as a prediction error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Nodes in index order; `nodes[0]` is the root.
    pub nodes: Vec<TreeNode>,
}

impl Predictor for DecisionTree {
    fn predict(&self, features: &FeatureVector<'_>) -> Result<String> {
        let values = features.values();
        let mut index = 0;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { label }) => return Ok(label.clone()),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = values.get(*feature).copied().ok_or_else(|| {
                        Error::Prediction(format!("feature index {feature} out of range"))
                    })?;
                    index = if value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(Error::Prediction(format!("tree node {index} missing")));
                }
            }
        }
        Err(Error::Prediction(format!(
            "tree walk did not reach a leaf within {} nodes",
            self.nodes.len()
        )))
    }

    fn check_width(&self, width: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::SchemaMismatch("decision tree has no nodes".to_string()));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            else {
                continue;
            };
            if *feature >= width {
                return Err(Error::SchemaMismatch(format!(
                    "node {index} splits on feature {feature} but the schema has {width} columns"
                )));
            }
            for child in [*left, *right] {
                if child <= index || child >= self.nodes.len() {
                    return Err(Error::ModelLoad(format!(
                        "node {index} has invalid child {child}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// One-vs-rest linear model; the label is the class with the highest score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Class labels, in weight-row order.
    pub classes: Vec<String>,
    /// One weight row per class, one weight per feature.
    pub weights: Vec<Vec<f64>>,
    /// One intercept per class.
    pub intercepts: Vec<f64>,
}

impl Predictor for LinearModel {
    fn predict(&self, features: &FeatureVector<'_>) -> Result<String> {
        let values = features.values();
        let mut best: Option<(usize, f64)> = None;
        for (class, (row, intercept)) in self.weights.iter().zip(&self.intercepts).enumerate() {
            if row.len() != values.len() {
                return Err(Error::Prediction(format!(
                    "expected {} features, got {}",
                    row.len(),
                    values.len()
                )));
            }
            let score = row
                .iter()
                .zip(values)
                .fold(*intercept, |acc, (w, x)| w.mul_add(*x, acc));
            // Strictly greater keeps the first class on ties.
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((class, score));
            }
        }
        best.and_then(|(class, _)| self.classes.get(class).cloned())
            .ok_or_else(|| Error::Prediction("linear model has no classes".to_string()))
    }

    fn check_width(&self, width: usize) -> Result<()> {
        if self.classes.is_empty() {
            return Err(Error::ModelLoad("linear model has no classes".to_string()));
        }
        if self.weights.len() != self.classes.len() || self.intercepts.len() != self.classes.len()
        {
            return Err(Error::ModelLoad(format!(
                "linear model has {} classes, {} weight rows and {} intercepts",
                self.classes.len(),
                self.weights.len(),
                self.intercepts.len()
            )));
        }
        if let Some(row) = self.weights.iter().find(|row| row.len() != width) {
            return Err(Error::SchemaMismatch(format!(
                "linear model expects {} features but the schema has {width} columns",
                row.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> Metrics {
        Metrics {
            word_count: 1200,
            sentence_count: 60,
            readability_score: 62.5,
        }
    }

    fn schema(columns: &[&str]) -> FeatureSchema {
        match FeatureSchema::new(columns.iter().copied()) {
            Ok(schema) => schema,
            Err(err) => panic!("schema rejected: {err}"),
        }
    }

    #[test]
    fn vector_follows_schema_order_not_field_order() {
        let schema = schema(&["flesch_reading_ease", "word_count", "sentence_count"]);
        let metrics = metrics();
        let vector = schema.vector(&metrics).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(vector.values(), &[62.5, 1200.0, 60.0]);
        assert_eq!(vector.get("word_count"), Some(1200.0));
        assert_eq!(
            vector.names(),
            ["flesch_reading_ease", "word_count", "sentence_count"]
        );
    }

    #[test]
    fn unknown_feature_is_a_schema_error() {
        let err = FeatureSchema::new(["word_count", "keyword_density"]);
        assert!(matches!(err, Err(Error::SchemaMismatch(msg)) if msg.contains("keyword_density")));
    }

    #[test]
    fn empty_schema_is_rejected() {
        assert!(matches!(
            FeatureSchema::new(Vec::<String>::new()),
            Err(Error::SchemaMismatch(_))
        ));
    }

    struct WordCountThreshold(f64);

    impl Predictor for WordCountThreshold {
        fn predict(&self, features: &FeatureVector<'_>) -> Result<String> {
            let words = features
                .get("word_count")
                .ok_or_else(|| Error::Prediction("word_count missing".to_string()))?;
            Ok(if words > self.0 { "High" } else { "Low" }.to_string())
        }
    }

    #[test]
    fn custom_predictors_receive_named_features() {
        let classifier = QualityClassifier::new(
            schema(&["sentence_count", "word_count"]),
            WordCountThreshold(1000.0),
        )
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            classifier.classify(&metrics()).map(|l| l.to_string()),
            Ok("High".to_string())
        );
    }

    #[test]
    fn decision_tree_walks_to_leaf() {
        let tree = DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 500.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf {
                    label: "Low".to_string(),
                },
                TreeNode::Split {
                    feature: 1,
                    threshold: 50.0,
                    left: 3,
                    right: 4,
                },
                TreeNode::Leaf {
                    label: "Medium".to_string(),
                },
                TreeNode::Leaf {
                    label: "High".to_string(),
                },
            ],
        };
        let classifier =
            QualityClassifier::new(schema(&["word_count", "flesch_reading_ease"]), tree)
                .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            classifier.classify(&metrics()),
            Ok(QualityLabel::new("High"))
        );

        let thin = Metrics {
            word_count: 500,
            ..metrics()
        };
        assert_eq!(classifier.classify(&thin), Ok(QualityLabel::new("Low")));
    }

    #[test]
    fn decision_tree_rejects_out_of_schema_feature() {
        let tree = DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 3,
                    threshold: 1.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf {
                    label: "Low".to_string(),
                },
                TreeNode::Leaf {
                    label: "High".to_string(),
                },
            ],
        };
        let result = QualityClassifier::new(schema(&["word_count"]), tree);
        assert!(matches!(result, Err(Error::SchemaMismatch(_))));
    }

    #[test]
    fn decision_tree_rejects_backward_children() {
        let tree = DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 0,
                    right: 1,
                },
                TreeNode::Leaf {
                    label: "Low".to_string(),
                },
            ],
        };
        let result = QualityClassifier::new(schema(&["word_count"]), tree);
        assert!(matches!(result, Err(Error::ModelLoad(_))));
    }

    #[test]
    fn cyclic_tree_walk_is_an_error() {
        let tree = DecisionTree {
            nodes: vec![TreeNode::Split {
                feature: 0,
                threshold: 1.0,
                left: 0,
                right: 0,
            }],
        };
        let schema = schema(&["word_count"]);
        let metrics = metrics();
        let vector = schema.vector(&metrics).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(
            tree.predict(&vector),
            Err(Error::Prediction(msg)) if msg.contains("did not reach a leaf")
        ));
    }

    #[test]
    fn empty_tree_predicts_an_error() {
        let tree = DecisionTree { nodes: Vec::new() };
        let schema = schema(&["word_count"]);
        let metrics = metrics();
        let vector = schema.vector(&metrics).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(tree.predict(&vector), Err(Error::Prediction(_))));
    }

    #[test]
    fn linear_model_picks_highest_scoring_class() {
        let model = LinearModel {
            classes: vec!["Low".into(), "Medium".into(), "High".into()],
            weights: vec![vec![-0.01], vec![0.0], vec![0.01]],
            intercepts: vec![10.0, 0.0, -10.0],
        };
        let classifier = QualityClassifier::new(schema(&["word_count"]), model)
            .unwrap_or_else(|e| panic!("{e}"));
        // Low: -2, Medium: 0, High: 2
        assert_eq!(
            classifier.classify(&metrics()),
            Ok(QualityLabel::new("High"))
        );
    }

    #[test]
    fn linear_model_ties_go_to_first_class() {
        let model = LinearModel {
            classes: vec!["Medium".into(), "High".into()],
            weights: vec![vec![0.0], vec![0.0]],
            intercepts: vec![1.0, 1.0],
        };
        let classifier = QualityClassifier::new(schema(&["sentence_count"]), model)
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            classifier.classify(&metrics()),
            Ok(QualityLabel::new("Medium"))
        );
    }

    #[test]
    fn linear_model_width_mismatch() {
        let model = LinearModel {
            classes: vec!["Low".into()],
            weights: vec![vec![1.0, 2.0]],
            intercepts: vec![0.0],
        };
        let result = QualityClassifier::new(schema(&["word_count"]), model);
        assert!(matches!(result, Err(Error::SchemaMismatch(_))));
    }

    #[test]
    fn artifact_from_json() {
        let json = r#"{
            "feature_columns": ["word_count", "sentence_count", "flesch_reading_ease"],
            "model": {
                "kind": "decision_tree",
                "nodes": [
                    { "feature": 2, "threshold": 40.0, "left": 1, "right": 2 },
                    { "label": "Low" },
                    { "label": "High" }
                ]
            }
        }"#;
        let classifier = QualityClassifier::from_json(json).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(classifier.schema().len(), 3);
        assert_eq!(
            classifier.classify(&metrics()),
            Ok(QualityLabel::new("High"))
        );
    }

    #[test]
    fn corrupt_json_is_a_load_error() {
        assert!(matches!(
            QualityClassifier::from_json("not json"),
            Err(Error::ModelLoad(_))
        ));
        assert!(matches!(
            QualityClassifier::from_json(r#"{"feature_columns": ["word_count"]}"#),
            Err(Error::ModelLoad(_))
        ));
    }

    #[test]
    fn label_tiers() {
        assert_eq!(QualityLabel::new("High").tier(), Some(QualityTier::High));
        assert_eq!(QualityLabel::new("medium").tier(), Some(QualityTier::Medium));
        assert_eq!(QualityLabel::new("LOW").tier(), Some(QualityTier::Low));
        assert_eq!(QualityLabel::unknown().tier(), None);
        assert!(QualityLabel::unknown().is_unknown());
        assert_eq!(QualityLabel::new("Spam").tier(), None);
    }
}
