//! # Brain Module
//!
//! Rule-based analysis of customer complaints. No ML model, no I/O:
//! every call is a pure function of the text and the lexicons.
//!
//! ## Components
//! - `normalizer`: Text cleanup (case, whitespace, URLs, emails, phone numbers)
//! - `lexicon`: Category, urgency and emotion keyword tables
//! - `classifier`: Keyword scoring and label resolution
//! - `summary`: Templated summary generation
//! - `result`: Output data structures

pub mod classifier;
pub mod lexicon;
pub mod normalizer;
pub mod result;
pub mod summary;

pub use classifier::{classify, ComplaintClassifier, ScoreTable, Scores};
pub use lexicon::{CategoryEntry, EmotionEntry, Lexicons, UrgencyLexicon};
pub use normalizer::normalize;
pub use result::{Category, ClassificationReport, ClassificationResult, Emotion, Urgency};
pub use summary::generate_summary;
