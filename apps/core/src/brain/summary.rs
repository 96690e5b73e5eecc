//! Templated natural-language summary of a classification.

use super::result::{Category, Emotion, Urgency};

/// Raw complaints longer than this many words are flagged as detailed
pub const DETAILED_WORD_COUNT: usize = 100;
/// Raw complaints shorter than this many words are flagged as brief
pub const BRIEF_WORD_COUNT: usize = 20;

/// Count whitespace-separated words in the raw complaint
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn emotion_clause(emotion: Emotion) -> Option<String> {
    match emotion {
        Emotion::Angry | Emotion::Frustrated => Some(format!(
            "Customer expresses strong {} feelings",
            emotion.label().to_lowercase()
        )),
        Emotion::Disappointed => Some("Customer shows disappointment with the experience".to_string()),
        Emotion::Confused => Some("Customer needs clarification and guidance".to_string()),
        Emotion::Worried | Emotion::Neutral => None,
    }
}

fn urgency_clause(urgency: Urgency) -> Option<&'static str> {
    match urgency {
        Urgency::High => Some("requires immediate attention"),
        Urgency::Medium => Some("should be addressed promptly"),
        Urgency::Low => None,
    }
}

fn length_clause(words: usize) -> Option<&'static str> {
    if words > DETAILED_WORD_COUNT {
        Some("(detailed complaint)")
    } else if words < BRIEF_WORD_COUNT {
        Some("(brief complaint)")
    } else {
        None
    }
}

/// Upper-case the first character and lower-case the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Build the summary for a classified complaint.
///
/// `raw_text` is the complaint as typed, before normalization.
pub fn generate_summary(
    raw_text: &str,
    category: Category,
    urgency: Urgency,
    emotion: Emotion,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);

    if let Some(clause) = emotion_clause(emotion) {
        parts.push(clause);
    }
    if let Some(clause) = urgency_clause(urgency) {
        parts.push(clause.to_string());
    }
    parts.push(format!("regarding {} issues", category.label().to_lowercase()));
    if let Some(clause) = length_clause(word_count(raw_text)) {
        parts.push(clause.to_string());
    }

    format!("{}.", capitalize(&parts.join(". ")))
}
