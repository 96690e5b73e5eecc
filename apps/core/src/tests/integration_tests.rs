//! Integration Tests
//!
//! End-to-end flows: configuration, custom lexicon files, classification and
//! rendering.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::brain::{Category, ComplaintClassifier, Emotion, Lexicons, Urgency};
use crate::config::{Config, LEXICON_PATH_VAR, OUTPUT_FORMAT_VAR};
use crate::error::AppError;
use crate::formatter::{
    handle_input, outcome, render_error, ExitStatus, OutputFormat, EMPTY_INPUT_MESSAGE,
};
use crate::samples;

const CUSTOM_LEXICON: &str = r#"{
    "categories": [
        {"label": "Technical", "keywords": ["crash", "freeze"]},
        {"label": "Billing", "keywords": ["refund"]}
    ],
    "urgency": {"high": ["now"], "medium": ["later"], "high_weight": 5},
    "emotions": [
        {"label": "Worried", "keywords": ["uneasy"]},
        {"label": "Angry", "keywords": ["furious"]}
    ]
}"#;

fn write_lexicon(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write lexicon");
    file
}

#[cfg(test)]
mod lexicon_file_tests {
    use super::*;

    #[test]
    fn test_custom_lexicon_changes_outcome() {
        let file = write_lexicon(CUSTOM_LEXICON);
        let lexicons = Lexicons::from_json_file(file.path()).expect("Lexicon should load");
        let classifier = ComplaintClassifier::with_lexicons(lexicons);

        // File order decides ties: Technical before Billing, Worried before Angry
        let result = classifier
            .classify("Crash then refund, I feel uneasy and furious, fix it now")
            .unwrap();
        assert_eq!(result.category, Category::Technical);
        assert_eq!(result.emotion, Emotion::Worried);
        assert_eq!(result.urgency, Urgency::High);
        assert_eq!(result.confidence, 95);
    }

    #[test]
    fn test_custom_lexicon_ignores_builtin_keywords() {
        let file = write_lexicon(CUSTOM_LEXICON);
        let classifier =
            ComplaintClassifier::with_lexicons(Lexicons::from_json_file(file.path()).unwrap());

        let result = classifier.classify("my invoice and password").unwrap();
        assert_eq!(result.category, Category::General);
        assert_eq!(result.confidence, 85);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            Lexicons::from_json_file(&missing),
            Err(AppError::Io(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_validation_error() {
        let file = write_lexicon("{\"categories\": ");
        let err = Lexicons::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(render_error(&err).starts_with("Error processing complaint: Validation error:"));

        let (message, status) = outcome(Err(err));
        assert!(message.starts_with("Error processing complaint:"));
        assert_eq!(status, ExitStatus::Failure);
    }
}

#[cfg(test)]
mod workflow_tests {
    use super::*;

    #[test]
    fn test_config_driven_workflow() {
        let file = write_lexicon(CUSTOM_LEXICON);
        let path = file.path().to_string_lossy().to_string();

        temp_env::with_vars(
            [
                (OUTPUT_FORMAT_VAR, Some("json")),
                (LEXICON_PATH_VAR, Some(path.as_str())),
            ],
            || {
                let config = Config::from_env().expect("config should load");
                let lexicon_path = config.lexicon_path.expect("lexicon path set");
                let classifier =
                    ComplaintClassifier::with_lexicons(Lexicons::from_json_file(lexicon_path).unwrap());

                let (output, _) =
                    handle_input(&classifier, "it froze, then a crash", config.output_format);
                let value: serde_json::Value = serde_json::from_str(&output).unwrap();
                assert_eq!(value["category"], "Technical");
                assert_eq!(value["urgency"], "Low");
            },
        );
    }

    #[test]
    fn test_text_rendering_of_sample() {
        let classifier = ComplaintClassifier::new();
        let (output, status) =
            handle_input(&classifier, samples::get(10).unwrap(), OutputFormat::Text);
        assert_eq!(status, ExitStatus::Success);

        assert!(output.contains("**Category:** Technical"));
        assert!(output.contains("**Urgency Level:** Low"));
        assert!(output.contains("**Emotion Detected:** Neutral"));
        assert!(output.contains("**Confidence:** 95%"));
        assert!(output.contains("**Analysis Summary:** Regarding technical issues."));
    }

    #[test]
    fn test_empty_input_prompt() {
        let classifier = ComplaintClassifier::new();
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let (message, status) = handle_input(&classifier, "\n  \t", format);
            assert_eq!(message, EMPTY_INPUT_MESSAGE);
            assert_eq!(status.code(), 2);
        }
    }

    #[test]
    fn test_every_sample_renders() {
        let classifier = ComplaintClassifier::new();
        for sample in samples::all() {
            let (output, status) = handle_input(&classifier, sample, OutputFormat::Text);
            assert_eq!(status, ExitStatus::Success);
            assert!(output.contains("📋 **Classification Results:**"));
            assert!(!output.starts_with("Error processing complaint"));
        }
    }
}
