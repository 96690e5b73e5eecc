//! Complaint Classifier - rule-based multi-label classification.
//!
//! Scores normalized text against the category, urgency and emotion lexicons
//! using plain substring containment, resolves each dimension to one label,
//! derives a confidence percentage and builds the summary.
//!
//! Containment is not word-bounded: "app" also matches inside "happy".

use chrono::Utc;
use std::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

use super::lexicon::Lexicons;
use super::normalizer::normalize;
use super::result::{Category, ClassificationReport, ClassificationResult, Emotion, Urgency};
use super::summary::{generate_summary, word_count};
use crate::error::AppError;

/// Confidence reported when no keyword matched anywhere
pub const BASE_CONFIDENCE: u32 = 85;
/// Upper bound on reported confidence
pub const MAX_CONFIDENCE: u32 = 95;
/// Confidence gained per keyword hit
pub const CONFIDENCE_PER_HIT: u32 = 2;

/// Per-label keyword hit counts, kept in lexicon order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable<L> {
    pub scores: Vec<(L, u32)>,
}

impl<L: Copy> ScoreTable<L> {
    /// Total hits across all labels
    pub fn total(&self) -> u32 {
        self.scores
            .iter()
            .fold(0, |total, &(_, score)| total.saturating_add(score))
    }

    /// Label with the highest score, the earliest one winning ties.
    /// Returns `None` when every score is zero.
    pub fn winner(&self) -> Option<L> {
        let mut best: Option<(L, u32)> = None;
        for &(label, score) in &self.scores {
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((label, score));
            }
        }
        best.map(|(label, _)| label)
    }
}

/// Every dimension scored for one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scores {
    pub categories: ScoreTable<Category>,
    pub urgency: u32,
    pub emotions: ScoreTable<Emotion>,
}

impl Scores {
    /// Keyword hits feeding the confidence score
    pub fn total_hits(&self) -> u32 {
        self.categories
            .total()
            .saturating_add(self.urgency)
            .saturating_add(self.emotions.total())
    }

    pub fn category(&self) -> Category {
        self.categories.winner().unwrap_or(Category::General)
    }

    pub fn urgency_level(&self) -> Urgency {
        Urgency::from_score(self.urgency)
    }

    pub fn emotion(&self) -> Emotion {
        self.emotions.winner().unwrap_or(Emotion::Neutral)
    }

    pub fn confidence(&self) -> u8 {
        let raw = BASE_CONFIDENCE.saturating_add(self.total_hits().saturating_mul(CONFIDENCE_PER_HIT));
        // MAX_CONFIDENCE fits in u8
        raw.min(MAX_CONFIDENCE) as u8
    }
}

/// Number of distinct keywords contained in `text`
fn count_matches(keywords: &[String], text: &str) -> u32 {
    keywords.iter().filter(|k| text.contains(k.as_str())).count() as u32
}

/// Rule-based complaint classifier
#[derive(Debug, Clone)]
pub struct ComplaintClassifier {
    lexicons: Lexicons,
}

impl Default for ComplaintClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplaintClassifier {
    /// Create a classifier backed by the built-in lexicons
    pub fn new() -> Self {
        Self::with_lexicons(Lexicons::builtin().clone())
    }

    /// Create a classifier backed by a custom lexicon set
    pub fn with_lexicons(lexicons: Lexicons) -> Self {
        Self { lexicons }
    }

    /// Score already-normalized text against every lexicon
    pub fn score(&self, normalized: &str) -> Scores {
        let categories = ScoreTable {
            scores: self
                .lexicons
                .categories
                .iter()
                .map(|entry| (entry.label, count_matches(&entry.keywords, normalized)))
                .collect(),
        };

        let urgency_lexicon = &self.lexicons.urgency;
        // Weights come from lexicon files and are only bounded below
        let urgency = count_matches(&urgency_lexicon.high, normalized)
            .saturating_mul(urgency_lexicon.high_weight)
            .saturating_add(
                count_matches(&urgency_lexicon.medium, normalized)
                    .saturating_mul(urgency_lexicon.medium_weight),
            );

        let emotions = ScoreTable {
            scores: self
                .lexicons
                .emotions
                .iter()
                .map(|entry| (entry.label, count_matches(&entry.keywords, normalized)))
                .collect(),
        };

        Scores {
            categories,
            urgency,
            emotions,
        }
    }

    /// Classify a raw complaint.
    ///
    /// Fails with [`AppError::EmptyInput`] when the text is empty or only whitespace.
    pub fn classify(&self, text: &str) -> Result<ClassificationResult, AppError> {
        self.analyze(text).map(|report| report.result)
    }

    /// Classify a raw complaint and keep the intermediate details.
    pub fn analyze(&self, text: &str) -> Result<ClassificationReport, AppError> {
        if text.trim().is_empty() {
            warn!("Rejected empty complaint text");
            return Err(AppError::EmptyInput);
        }

        let start = Instant::now();
        let normalized = normalize(text);
        let scores = self.score(&normalized);

        let category = scores.category();
        let urgency = scores.urgency_level();
        let emotion = scores.emotion();
        let confidence = scores.confidence();

        debug!(
            category_scores = ?scores.categories.scores,
            urgency_score = scores.urgency,
            emotion_scores = ?scores.emotions.scores,
            "Scored complaint"
        );

        let summary = generate_summary(text, category, urgency, emotion);

        Ok(ClassificationReport {
            id: Uuid::new_v4(),
            result: ClassificationResult {
                category,
                urgency,
                emotion,
                confidence,
                summary,
            },
            normalized_text: normalized,
            word_count: word_count(text),
            matched_keywords: scores.total_hits(),
            processing_time_ms: start.elapsed().as_millis() as u64,
            analyzed_at: Utc::now(),
        })
    }
}

/// Classify a raw complaint with the built-in lexicons
pub fn classify(text: &str) -> Result<ClassificationResult, AppError> {
    ComplaintClassifier::new().classify(text)
}
