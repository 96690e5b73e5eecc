//! Test Module
//!
//! Cross-module test suite for the complaint classifier.
//!
//! ## Test Categories
//! - `brain_tests`: Normalization, scoring, tie-breaks, summaries and result invariants
//! - `integration_tests`: Lexicon files, configuration, rendering workflows

pub mod integration_tests;
