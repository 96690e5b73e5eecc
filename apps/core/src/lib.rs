//! Complaint Core
//!
//! Classifies free-text customer complaints into a category, urgency level
//! and emotional tone with keyword heuristics, and renders the result.

pub mod brain;
pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod samples;

#[cfg(test)]
mod tests;

pub use brain::{classify, normalize, ClassificationResult, ComplaintClassifier, Lexicons};
pub use error::AppError;
