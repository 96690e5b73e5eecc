//! Result formatting for display.
//!
//! Renders classification results as fixed-template text or JSON, and maps
//! errors to the messages shown to the user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{error, info};

use crate::brain::{ClassificationReport, ClassificationResult, ComplaintClassifier};
use crate::error::AppError;

/// Message shown when no complaint text was entered
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a complaint to analyze.";

/// How results are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Validation(format!(
                "Unknown output format '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a classification result as display text
pub fn render(result: &ClassificationResult) -> String {
    format!(
        "\n📋 **Classification Results:**\n\n\
         **Category:** {}\n\
         **Urgency Level:** {}\n\
         **Emotion Detected:** {}\n\
         **Confidence:** {}%\n\n\
         ---\n\
         **Analysis Summary:** {}\n",
        result.category, result.urgency, result.emotion, result.confidence, result.summary
    )
}

/// Render a full report as pretty-printed JSON
pub fn render_json(report: &ClassificationReport) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Map an error to the message shown to the user
pub fn render_error(err: &AppError) -> String {
    match err {
        AppError::EmptyInput => EMPTY_INPUT_MESSAGE.to_string(),
        other => format!("Error processing complaint: {}", other),
    }
}

/// How a handled complaint ended, as reported to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    EmptyInput,
    Failure,
}

impl ExitStatus {
    /// Process exit code: 0 on success, 2 for empty input, 1 otherwise
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::EmptyInput => 2,
            ExitStatus::Failure => 1,
        }
    }
}

/// Classify `text` and render the report in `format`
pub fn classify_and_render(
    classifier: &ComplaintClassifier,
    text: &str,
    format: OutputFormat,
) -> Result<String, AppError> {
    let report = classifier.analyze(text)?;
    info!("{}", report.log_line());
    match format {
        OutputFormat::Text => Ok(render(&report.result)),
        OutputFormat::Json => render_json(&report),
    }
}

/// Turn a rendering outcome into the message to print and the exit status
pub fn outcome(rendered: Result<String, AppError>) -> (String, ExitStatus) {
    match rendered {
        Ok(output) => (output, ExitStatus::Success),
        Err(e) if e.is_empty_input() => (render_error(&e), ExitStatus::EmptyInput),
        Err(e) => {
            error!("Failed to process complaint: {}", e);
            (render_error(&e), ExitStatus::Failure)
        }
    }
}

/// Classify `text` and render the outcome in `format`.
///
/// Never fails: errors are turned into their user-facing message.
pub fn handle_input(
    classifier: &ComplaintClassifier,
    text: &str,
    format: OutputFormat,
) -> (String, ExitStatus) {
    outcome(classify_and_render(classifier, text, format))
}
