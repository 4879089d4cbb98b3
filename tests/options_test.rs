use rs_content_quality::{analyze_with_options, Options, DEFAULT_MODEL_PATH, MODEL_PATH_ENV};
use std::path::{Path, PathBuf};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert_eq!(options.min_readability_chars, 100);
    assert!(options.model_path.is_none());
    assert!(options.enable_classifier);
    assert_eq!(options.preview_chars, 500);
    assert_eq!(options.resolved_model_path(), Path::new(DEFAULT_MODEL_PATH));
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        model_path: Some(PathBuf::from("/opt/models/quality.json")),
        ..Options::default()
    };

    assert_eq!(
        options.resolved_model_path(),
        Path::new("/opt/models/quality.json")
    );
    assert!(options.enable_classifier);
    assert_eq!(options.min_readability_chars, 100);
}

#[test]
fn from_env_reads_model_path() {
    // Only this test touches the variable.
    std::env::set_var(MODEL_PATH_ENV, "/tmp/from-env-model.json");
    let options = Options::from_env();
    std::env::remove_var(MODEL_PATH_ENV);

    assert_eq!(
        options.resolved_model_path(),
        Path::new("/tmp/from-env-model.json")
    );
    assert!(options.enable_classifier);
}

#[test]
fn min_readability_chars_changes_the_floor() {
    let text = "The cat sat on the mat. The dog ran fast.";
    let strict = Options {
        enable_classifier: false,
        ..Options::default()
    };
    let lenient = Options {
        min_readability_chars: 10,
        ..strict.clone()
    };

    assert_eq!(analyze_with_options(text, &strict).readability_score, 0.0);
    assert!(analyze_with_options(text, &lenient).readability_score > 0.0);
}

#[test]
fn preview_chars_limits_the_preview() {
    let text = "abcdefghij".repeat(10);
    let options = Options {
        enable_classifier: false,
        preview_chars: 20,
        ..Options::default()
    };
    let report = analyze_with_options(&text, &options);
    assert_eq!(report.content_preview, format!("{}...", &text[..20]));
}
