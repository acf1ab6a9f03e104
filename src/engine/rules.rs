//! Keyword rule and exact-lookup configuration structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::validation::normalize_key;

/// A single subject code with its associated keywords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Subject code this rule assigns
    pub code: String,
    /// Keywords whose presence in a memo contributes to the code's score,
    /// stored lowercase
    pub keywords: Vec<String>,
}

/// Ordered keyword rules for subject code scoring
///
/// Rules keep their construction order, and the scoring loop iterates them in
/// that order. The first rule to reach the highest score wins ties, so rule
/// order is part of the configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeywordRules {
    rules: Vec<KeywordRule>,
}

impl KeywordRules {
    /// Build keyword rules from `(code, keywords)` pairs
    ///
    /// Keywords are lowercased; subject codes are preserved as given.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut rules = Self::default();
        for (code, keywords) in entries {
            rules.push(code, keywords);
        }
        rules
    }

    /// Append a rule for a subject code, lowercasing its keywords
    pub fn push(&mut self, code: String, keywords: Vec<String>) {
        self.rules.push(KeywordRule {
            code,
            keywords: keywords.into_iter().map(|kw| kw.to_lowercase()).collect(),
        });
    }

    /// Iterate the rules in construction order
    pub fn iter(&self) -> impl Iterator<Item = &KeywordRule> {
        self.rules.iter()
    }

    /// Number of configured rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are configured
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Exact-match lookup table from full memo text to subject code
///
/// Keys are normalized (lowercased and trimmed) at insertion; subject codes
/// are preserved as given. An exact hit bypasses keyword scoring entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExactLookup {
    entries: HashMap<String, String>,
}

impl ExactLookup {
    /// Build a lookup table from `(text, code)` pairs
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut lookup = Self::default();
        for (text, code) in entries {
            lookup.insert(text, code);
        }
        lookup
    }

    /// Add an entry, normalizing its key
    pub fn insert(&mut self, text: String, code: String) {
        self.entries.insert(normalize_key(&text), code);
    }

    /// Look up a subject code for already-normalized text
    pub fn get(&self, normalized_text: &str) -> Option<&str> {
        self.entries.get(normalized_text).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
