//! Text normalization for complaint input.
//!
//! Lowercases, collapses whitespace, strips URLs, emails and phone-number-like
//! digit runs, then drops everything except alphanumerics and basic punctuation.
//! The output is a fixed point: normalizing it again changes nothing.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here, the patterns are compile-time constants
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace run"));

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z0-9$-_@.&+!*\\(),]|%[0-9a-fA-F]{2})+")
        .expect("Invalid regex: url pattern")
});

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+").expect("Invalid regex: email pattern"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[1-9]?[0-9]{7,15}").expect("Invalid regex: phone pattern"));

static REPEATED_EXCLAMATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!{2,}").expect("Invalid regex: repeated exclamation"));

static REPEATED_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?{2,}").expect("Invalid regex: repeated question"));

static REPEATED_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("Invalid regex: repeated period"));

/// Punctuation kept alongside alphanumerics
const KEPT_PUNCTUATION: &[char] = &[' ', '.', ',', '!', '?', '-'];

fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || KEPT_PUNCTUATION.contains(&c)
}

/// Normalize raw complaint text.
///
/// Empty input yields an empty string. Character filtering can join digit runs
/// or leave double spaces behind, so the phone and whitespace passes run again
/// after it. As a result a multi-word keyword can match across a removed URL:
/// "let http://x.y down" normalizes to "let down".
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.to_lowercase();
    let text = WHITESPACE.replace_all(&text, " ");
    let text = URL.replace_all(&text, "");
    let text = EMAIL.replace_all(&text, "");
    let text = PHONE.replace_all(&text, "");

    let filtered: String = text.chars().filter(|&c| is_kept(c)).collect();
    let text = PHONE.replace_all(&filtered, "");

    let text = REPEATED_EXCLAMATION.replace_all(&text, "!");
    let text = REPEATED_QUESTION.replace_all(&text, "?");
    let text = REPEATED_PERIOD.replace_all(&text, ".");
    let text = WHITESPACE.replace_all(&text, " ");

    text.trim().to_string()
}
