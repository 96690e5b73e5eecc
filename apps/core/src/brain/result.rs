//! Classification Result - Output structures for complaint analysis.
//!
//! Contains the labels resolved by the classifier and the report wrapper
//! used for JSON output and logging.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Complaint category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Billing,
    Delivery,
    #[serde(rename = "Product Quality")]
    ProductQuality,
    #[serde(rename = "Customer Service")]
    CustomerService,
    Account,
    Technical,
    /// Fallback when no category keyword matched
    General,
}

impl Category {
    /// Every category that owns a lexicon entry, in tie-break order
    pub const SCORED: [Category; 6] = [
        Category::Billing,
        Category::Delivery,
        Category::ProductQuality,
        Category::CustomerService,
        Category::Account,
        Category::Technical,
    ];

    /// Returns the display label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Billing => "Billing",
            Category::Delivery => "Delivery",
            Category::ProductQuality => "Product Quality",
            Category::CustomerService => "Customer Service",
            Category::Account => "Account",
            Category::Technical => "Technical",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How quickly a complaint needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// Score at or above which a complaint is High urgency
    pub const HIGH_THRESHOLD: u32 = 5;
    /// Score at or above which a complaint is Medium urgency
    pub const MEDIUM_THRESHOLD: u32 = 2;

    /// Resolve an urgency score into a level
    pub fn from_score(score: u32) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Urgency::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Detected emotional tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Angry,
    Frustrated,
    Disappointed,
    Confused,
    Worried,
    /// Fallback when no emotion keyword matched
    Neutral,
}

impl Emotion {
    /// Every emotion that owns a lexicon entry, in tie-break order
    pub const SCORED: [Emotion; 5] = [
        Emotion::Angry,
        Emotion::Frustrated,
        Emotion::Disappointed,
        Emotion::Confused,
        Emotion::Worried,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Angry => "Angry",
            Emotion::Frustrated => "Frustrated",
            Emotion::Disappointed => "Disappointed",
            Emotion::Confused => "Confused",
            Emotion::Worried => "Worried",
            Emotion::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of classifying a single complaint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning category
    pub category: Category,
    /// Urgency level
    pub urgency: Urgency,
    /// Winning emotion
    pub emotion: Emotion,
    /// Confidence percentage, always within 85..=95
    pub confidence: u8,
    /// Templated natural-language summary
    pub summary: String,
}

/// Complete report for one classification call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Unique identifier of this analysis
    pub id: Uuid,

    /// Resolved labels, confidence and summary
    #[serde(flatten)]
    pub result: ClassificationResult,

    /// Text after normalization
    pub normalized_text: String,

    /// Whitespace word count of the raw complaint
    pub word_count: usize,

    /// Total keyword hits across all lexicons (urgency counted by weight)
    pub matched_keywords: u32,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub analyzed_at: DateTime<Utc>,
}

impl ClassificationReport {
    /// Get a summary line for logging
    pub fn log_line(&self) -> String {
        format!(
            "Category: {}, Urgency: {}, Emotion: {}, Confidence: {}%, Words: {}, Hits: {}",
            self.result.category,
            self.result.urgency,
            self.result.emotion,
            self.result.confidence,
            self.word_count,
            self.matched_keywords
        )
    }
}
