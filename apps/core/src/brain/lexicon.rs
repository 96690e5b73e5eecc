//! Keyword lexicons for category, urgency and emotion scoring.
//!
//! The built-in tables are compiled in and initialized once. A replacement
//! set can be loaded from a JSON file; entry order in the file becomes the
//! tie-break order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;
use validator::Validate;

use super::result::{Category, Emotion};
use crate::error::AppError;

const BILLING_KEYWORDS: &[&str] = &[
    "bill", "charge", "payment", "invoice", "fee", "cost", "price", "refund", "money",
];

const DELIVERY_KEYWORDS: &[&str] = &[
    "delivery", "shipping", "ship", "arrive", "package", "order", "tracking", "late", "delay",
];

const PRODUCT_QUALITY_KEYWORDS: &[&str] = &[
    "broken", "defective", "quality", "damaged", "wrong", "faulty", "poor", "bad",
];

const CUSTOMER_SERVICE_KEYWORDS: &[&str] = &[
    "service",
    "staff",
    "rude",
    "help",
    "support",
    "representative",
    "agent",
    "call",
];

const ACCOUNT_KEYWORDS: &[&str] = &[
    "account", "login", "password", "access", "profile", "settings", "username",
];

const TECHNICAL_KEYWORDS: &[&str] = &[
    "website",
    "app",
    "technical",
    "error",
    "bug",
    "crash",
    "loading",
    "system",
];

const HIGH_URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "immediately",
    "asap",
    "emergency",
    "critical",
    "terrible",
    "awful",
    "worst",
];

const MEDIUM_URGENCY_KEYWORDS: &[&str] = &[
    "soon",
    "quickly",
    "disappointed",
    "frustrated",
    "concerned",
    "issue",
    "problem",
];

const ANGRY_KEYWORDS: &[&str] = &[
    "angry", "furious", "mad", "outraged", "livid", "hate", "disgusted",
];

const FRUSTRATED_KEYWORDS: &[&str] = &["frustrated", "annoyed", "irritated", "bothered", "upset"];

const DISAPPOINTED_KEYWORDS: &[&str] = &["disappointed", "let down", "expected", "hoping", "sad"];

const CONFUSED_KEYWORDS: &[&str] = &[
    "confused",
    "understand",
    "unclear",
    "explain",
    "what",
    "how",
    "why",
];

const WORRIED_KEYWORDS: &[&str] = &["worried", "concerned", "anxious", "nervous", "scared"];

pub const DEFAULT_HIGH_WEIGHT: u32 = 3;
pub const DEFAULT_MEDIUM_WEIGHT: u32 = 1;

fn default_high_weight() -> u32 {
    DEFAULT_HIGH_WEIGHT
}

fn default_medium_weight() -> u32 {
    DEFAULT_MEDIUM_WEIGHT
}

fn to_owned_keywords(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}

/// Keywords that vote for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CategoryEntry {
    pub label: Category,
    #[validate(length(min = 1))]
    pub keywords: Vec<String>,
}

/// Keywords that vote for one emotion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmotionEntry {
    pub label: Emotion,
    #[validate(length(min = 1))]
    pub keywords: Vec<String>,
}

/// Weighted keyword sets feeding the urgency score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UrgencyLexicon {
    #[validate(length(min = 1))]
    pub high: Vec<String>,
    #[validate(length(min = 1))]
    pub medium: Vec<String>,
    #[serde(default = "default_high_weight")]
    #[validate(range(min = 1))]
    pub high_weight: u32,
    #[serde(default = "default_medium_weight")]
    #[validate(range(min = 1))]
    pub medium_weight: u32,
}

/// The full set of lexicons used by a classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Lexicons {
    #[validate(length(min = 1))]
    pub categories: Vec<CategoryEntry>,
    pub urgency: UrgencyLexicon,
    #[validate(length(min = 1))]
    pub emotions: Vec<EmotionEntry>,
}

static BUILTIN: LazyLock<Lexicons> = LazyLock::new(|| {
    let categories = [
        (Category::Billing, BILLING_KEYWORDS),
        (Category::Delivery, DELIVERY_KEYWORDS),
        (Category::ProductQuality, PRODUCT_QUALITY_KEYWORDS),
        (Category::CustomerService, CUSTOMER_SERVICE_KEYWORDS),
        (Category::Account, ACCOUNT_KEYWORDS),
        (Category::Technical, TECHNICAL_KEYWORDS),
    ]
    .into_iter()
    .map(|(label, keywords)| CategoryEntry {
        label,
        keywords: to_owned_keywords(keywords),
    })
    .collect();

    let emotions = [
        (Emotion::Angry, ANGRY_KEYWORDS),
        (Emotion::Frustrated, FRUSTRATED_KEYWORDS),
        (Emotion::Disappointed, DISAPPOINTED_KEYWORDS),
        (Emotion::Confused, CONFUSED_KEYWORDS),
        (Emotion::Worried, WORRIED_KEYWORDS),
    ]
    .into_iter()
    .map(|(label, keywords)| EmotionEntry {
        label,
        keywords: to_owned_keywords(keywords),
    })
    .collect();

    Lexicons {
        categories,
        urgency: UrgencyLexicon {
            high: to_owned_keywords(HIGH_URGENCY_KEYWORDS),
            medium: to_owned_keywords(MEDIUM_URGENCY_KEYWORDS),
            high_weight: DEFAULT_HIGH_WEIGHT,
            medium_weight: DEFAULT_MEDIUM_WEIGHT,
        },
        emotions,
    }
});

impl Default for Lexicons {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl Lexicons {
    /// The compiled-in lexicons
    pub fn builtin() -> &'static Lexicons {
        &BUILTIN
    }

    /// Parse a lexicon set from JSON and validate it
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let lexicons: Lexicons = serde_json::from_str(json)?;
        lexicons.into_checked()
    }

    /// Load a lexicon set from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let lexicons = Self::from_json_str(&json)?;
        info!(
            "Loaded lexicons from {} ({} categories, {} emotions, {} keywords)",
            path.display(),
            lexicons.categories.len(),
            lexicons.emotions.len(),
            lexicons.keyword_count()
        );
        Ok(lexicons)
    }

    /// Validate the structure and lower-case every keyword
    fn into_checked(mut self) -> Result<Self, AppError> {
        self.validate()?;
        self.urgency.validate()?;
        for entry in &self.categories {
            entry.validate()?;
        }
        for entry in &self.emotions {
            entry.validate()?;
        }

        let mut seen = HashSet::new();
        for entry in &self.categories {
            if entry.label == Category::General {
                return Err(AppError::Validation(
                    "General is the fallback category and cannot own keywords".to_string(),
                ));
            }
            if !seen.insert(entry.label) {
                return Err(AppError::Validation(format!(
                    "Duplicate category in lexicon: {}",
                    entry.label
                )));
            }
        }

        let mut seen = HashSet::new();
        for entry in &self.emotions {
            if entry.label == Emotion::Neutral {
                return Err(AppError::Validation(
                    "Neutral is the fallback emotion and cannot own keywords".to_string(),
                ));
            }
            if !seen.insert(entry.label) {
                return Err(AppError::Validation(format!(
                    "Duplicate emotion in lexicon: {}",
                    entry.label
                )));
            }
        }

        let keyword_lists = self
            .categories
            .iter_mut()
            .map(|e| &mut e.keywords)
            .chain(self.emotions.iter_mut().map(|e| &mut e.keywords))
            .chain([&mut self.urgency.high, &mut self.urgency.medium]);
        for keywords in keyword_lists {
            for keyword in keywords.iter_mut() {
                if keyword.trim().is_empty() {
                    return Err(AppError::Validation(
                        "Lexicon keywords must not be blank".to_string(),
                    ));
                }
                *keyword = keyword.to_lowercase();
            }
        }

        Ok(self)
    }

    /// Total number of keywords across all tables
    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|e| e.keywords.len()).sum::<usize>()
            + self.emotions.iter().map(|e| e.keywords.len()).sum::<usize>()
            + self.urgency.high.len()
            + self.urgency.medium.len()
    }
}
