use rs_content_quality::classifier::{FeatureSchema, ModelArtifact, ModelSpec, QualityTier};
use rs_content_quality::metrics::Metrics;
use rs_content_quality::registry::{ClassifierSlot, ClassifierStatus};
use rs_content_quality::{Analyzer, Error, Options, QualityClassifier, QualityLabel};
use std::io::Write;
use std::path::Path;

const TREE_MODEL: &str = r#"{
    "feature_columns": ["word_count", "sentence_count", "flesch_reading_ease"],
    "model": {
        "kind": "decision_tree",
        "nodes": [
            { "feature": 0, "threshold": 800, "left": 1, "right": 2 },
            { "label": "Low" },
            { "feature": 2, "threshold": 40.0, "left": 3, "right": 4 },
            { "label": "Medium" },
            { "label": "High" }
        ]
    }
}"#;

const LINEAR_MODEL: &str = r#"{
    "feature_columns": ["avg_words_per_sentence", "word_count"],
    "model": {
        "kind": "linear",
        "classes": ["Low", "Medium", "High"],
        "weights": [[0.0, -0.01], [0.0, 0.0], [0.0, 0.01]],
        "intercepts": [5.0, 0.0, -5.0]
    }
}"#;

fn write_model(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp model file");
    file.write_all(json.as_bytes()).expect("write temp model file");
    file
}

fn metrics(word_count: usize, sentence_count: usize, readability_score: f64) -> Metrics {
    Metrics {
        word_count,
        sentence_count,
        readability_score,
    }
}

#[test]
fn tree_model_loads_from_disk_and_classifies() {
    let file = write_model(TREE_MODEL);
    let classifier = QualityClassifier::load(file.path()).expect("model should load");

    assert_eq!(
        classifier.schema().columns(),
        ["word_count", "sentence_count", "flesch_reading_ease"]
    );
    assert_eq!(
        classifier.classify(&metrics(300, 15, 60.0)),
        Ok(QualityLabel::new("Low"))
    );
    assert_eq!(
        classifier.classify(&metrics(1200, 60, 30.0)),
        Ok(QualityLabel::new("Medium"))
    );
    assert_eq!(
        classifier.classify(&metrics(1200, 60, 65.0)),
        Ok(QualityLabel::new("High"))
    );
}

#[test]
fn linear_model_uses_precomputed_features() {
    let classifier = QualityClassifier::from_json(LINEAR_MODEL).expect("model should load");
    // Low: 5 - 20 = -15, Medium: 0, High: -5 + 20 = 15
    let label = classifier.classify(&metrics(2000, 100, 60.0)).expect("prediction");
    assert_eq!(label.as_str(), "High");
    assert_eq!(label.tier(), Some(QualityTier::High));
}

#[test]
fn missing_artifact_is_reported() {
    let result = QualityClassifier::load(Path::new("/nonexistent/dir/quality_model.json"));
    assert!(matches!(result, Err(Error::ModelNotFound(_))));
}

#[test]
fn corrupt_artifact_is_a_load_error() {
    let file = write_model("{ this is not json");
    let result = QualityClassifier::load(file.path());
    assert!(matches!(result, Err(Error::ModelLoad(_))));
}

#[test]
fn unknown_feature_column_is_a_schema_mismatch() {
    let json = TREE_MODEL.replace("\"sentence_count\"", "\"keyword_density\"");
    let result = QualityClassifier::from_json(&json);
    assert!(matches!(result, Err(Error::SchemaMismatch(_))));
}

#[test]
fn model_wider_than_schema_is_a_schema_mismatch() {
    let artifact: ModelArtifact = serde_json::from_str(TREE_MODEL).expect("parse artifact");
    let narrowed = ModelArtifact {
        feature_columns: vec!["word_count".to_string()],
        ..artifact
    };
    assert!(matches!(
        narrowed.into_classifier(),
        Err(Error::SchemaMismatch(_))
    ));
}

#[test]
fn artifact_kind_is_tagged() {
    let artifact: ModelArtifact = serde_json::from_str(LINEAR_MODEL).expect("parse artifact");
    assert!(matches!(artifact.model, ModelSpec::Linear(_)));
    let schema = FeatureSchema::new(artifact.feature_columns).expect("valid schema");
    assert_eq!(schema.len(), 2);
}

#[test]
fn slot_loads_once_and_feeds_the_analyzer() {
    let file = write_model(TREE_MODEL);
    let slot = ClassifierSlot::new();
    let status = slot.get_or_load(file.path());
    assert!(matches!(status, ClassifierStatus::Ready(_)));

    let analyzer = Analyzer::new(Options::default()).with_status(&status);
    assert!(analyzer.has_classifier());

    let text = "Short piece of text. Not much here.";
    let report = analyzer.analyze(text);
    assert_eq!(report.quality_label.as_str(), "Low");
    assert!(report.warnings.is_empty());
}

#[test]
fn unavailable_model_degrades_without_retry() {
    let slot = ClassifierSlot::new();
    let missing = Path::new("/nonexistent/dir/quality_model.json");
    assert!(slot.get_or_load(missing).error().is_some());

    // Even a valid path is not tried again until the slot is reset.
    let file = write_model(TREE_MODEL);
    assert!(slot.get_or_load(file.path()).classifier().is_none());

    let analyzer = Analyzer::new(Options::default()).with_status(&slot.get_or_load(missing));
    let report = analyzer.analyze("Some words. More words here.");
    assert!(report.quality_label.is_unknown());
    assert_eq!(report.word_count, 5);
    assert_eq!(report.quality_score.value(), 30);
    assert!(report.warnings.iter().any(|w| w.contains("Model file not found")));

    slot.reset();
    assert!(slot.get_or_load(file.path()).classifier().is_some());
}
