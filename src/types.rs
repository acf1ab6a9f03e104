//! Core types and data structures for the classification system

use serde::{Deserialize, Serialize};

/// Sentinel subject code assigned when no rule matches the input text
pub const UNCLASSIFIED: &str = "UNCLASSIFIED";

/// Outcome of classifying a single transaction memo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Subject code assigned to the text, or [`UNCLASSIFIED`]
    pub subject_code: String,
    /// Confidence in the decision, within `[0.0, 1.0]`
    pub confidence: f64,
    /// Keywords (or the exact-lookup key) that produced the decision
    pub matched_keywords: Vec<String>,
}

impl ClassificationResult {
    /// Create a result for a matched subject code
    pub fn new(subject_code: String, confidence: f64, matched_keywords: Vec<String>) -> Self {
        Self {
            subject_code,
            confidence,
            matched_keywords,
        }
    }

    /// Create the fallback result for text that matched nothing
    pub fn unclassified() -> Self {
        Self {
            subject_code: UNCLASSIFIED.to_string(),
            confidence: 0.0,
            matched_keywords: Vec::new(),
        }
    }

    /// Whether a real subject code was assigned
    pub fn is_classified(&self) -> bool {
        self.subject_code != UNCLASSIFIED
    }
}

/// Errors that can occur in the classification system
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for classifier operations
pub type ClassifierResult<T> = Result<T, ClassifierError>;
