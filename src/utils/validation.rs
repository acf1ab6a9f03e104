//! Validation and normalization utilities

use crate::engine::rules::KeywordRules;
use crate::types::*;

/// Normalize memo text for matching: lowercase and trim surrounding whitespace
///
/// Fails with [`ClassifierError::InvalidInput`] when the normalized text is
/// empty, including input that is entirely whitespace.
pub fn normalize_text(text: &str) -> ClassifierResult<String> {
    let normalized = text.to_lowercase().trim().to_string();

    if normalized.is_empty() {
        return Err(ClassifierError::InvalidInput(
            "Memo text cannot be empty".to_string(),
        ));
    }

    Ok(normalized)
}

/// Normalize an exact-lookup key: lowercase and trim surrounding whitespace
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase().trim().to_string()
}

/// Validate that at least one keyword rule is configured
pub fn validate_keyword_rules(rules: &KeywordRules) -> ClassifierResult<()> {
    if rules.is_empty() {
        return Err(ClassifierError::InvalidConfiguration(
            "At least one keyword rule is required".to_string(),
        ));
    }

    Ok(())
}
