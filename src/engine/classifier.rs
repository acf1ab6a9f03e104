//! Classification engine that scores subject codes against memo text

use crate::engine::rules::{ExactLookup, KeywordRules};
use crate::traits::Classifier;
use crate::types::*;
use crate::utils::validation::{normalize_text, validate_keyword_rules};

/// Weight of the raw keyword match count in a rule's score
const MATCH_COUNT_WEIGHT: f64 = 0.6;
/// Weight of the matched-character density in a rule's score
const DENSITY_WEIGHT: f64 = 0.4;

/// Rule-based classification engine for transaction memos
///
/// The engine holds immutable keyword rules and an exact lookup table.
/// Classification is a pure function of the input text, so a single engine
/// can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct ClassifierEngine {
    rules: KeywordRules,
    lookup: ExactLookup,
}

impl ClassifierEngine {
    /// Create an engine from keyword rules and an exact lookup table
    pub fn new(rules: KeywordRules, lookup: ExactLookup) -> ClassifierResult<Self> {
        validate_keyword_rules(&rules)?;
        Ok(Self { rules, lookup })
    }

    /// Create an engine with keyword rules only
    pub fn with_rules(rules: KeywordRules) -> ClassifierResult<Self> {
        Self::new(rules, ExactLookup::default())
    }

    // Infallible path for configurations known to be non-empty.
    pub(crate) fn from_parts(rules: KeywordRules, lookup: ExactLookup) -> Self {
        Self { rules, lookup }
    }

    /// The configured keyword rules
    pub fn keyword_rules(&self) -> &KeywordRules {
        &self.rules
    }

    /// The configured exact lookup table
    pub fn exact_lookup(&self) -> &ExactLookup {
        &self.lookup
    }

    /// Classify a transaction memo into a subject code
    ///
    /// The memo is lowercased and trimmed, then checked against the exact
    /// lookup table. If no exact entry matches, every rule is scored by the
    /// keywords it contributes as substrings of the memo, and the first rule
    /// reaching the highest score wins. Text matching no rule at all yields
    /// the [`UNCLASSIFIED`] result rather than an error.
    pub fn classify(&self, text: &str) -> ClassifierResult<ClassificationResult> {
        let normalized = normalize_text(text)?;

        // An exact entry decides immediately, before any keyword scoring.
        if let Some(code) = self.lookup.get(&normalized) {
            return Ok(ClassificationResult::new(
                code.to_string(),
                1.0,
                vec![normalized],
            ));
        }

        // Character counts, not byte lengths: multi-byte memos must score
        // the same as single-byte ones of equal length.
        let text_chars = normalized.chars().count().max(1);

        let mut best_code: Option<&str> = None;
        let mut best_score = 0.0;
        let mut best_keywords: Vec<String> = Vec::new();

        for rule in self.rules.iter() {
            let matches: Vec<String> = rule
                .keywords
                .iter()
                .filter(|kw| normalized.contains(kw.as_str()))
                .cloned()
                .collect();

            if matches.is_empty() {
                continue;
            }

            let raw_score = matches.len() as f64;
            let matched_chars: usize = matches.iter().map(|kw| kw.chars().count()).sum();
            let density = matched_chars as f64 / text_chars as f64;
            let score = MATCH_COUNT_WEIGHT * raw_score + DENSITY_WEIGHT * density;

            // Strict comparison: the first rule to reach a score keeps it.
            if score > best_score {
                best_score = score;
                best_code = Some(rule.code.as_str());
                best_keywords = matches;
            }
        }

        match best_code {
            Some(code) => {
                // Monotonic in the score and asymptotically below 1.0; the
                // clamp covers non-finite scores only.
                let confidence = (best_score / (best_score + 1.0)).min(1.0);
                Ok(ClassificationResult::new(
                    code.to_string(),
                    confidence,
                    best_keywords,
                ))
            }
            None => Ok(ClassificationResult::unclassified()),
        }
    }
}

impl Classifier for ClassifierEngine {
    fn classify(&self, text: &str) -> ClassifierResult<ClassificationResult> {
        ClassifierEngine::classify(self, text)
    }
}

/// Builder for assembling a classifier engine rule by rule
#[derive(Debug, Default)]
pub struct ClassifierBuilder {
    rules: KeywordRules,
    lookup: ExactLookup,
}

impl ClassifierBuilder {
    /// Create a new classifier builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a keyword rule; append order is scoring order
    pub fn keywords(mut self, code: String, keywords: Vec<String>) -> Self {
        self.rules.push(code, keywords);
        self
    }

    /// Add an exact-lookup entry
    pub fn exact(mut self, text: String, code: String) -> Self {
        self.lookup.insert(text, code);
        self
    }

    /// Build the engine
    pub fn build(self) -> ClassifierResult<ClassifierEngine> {
        ClassifierEngine::new(self.rules, self.lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_rule_engine() -> ClassifierEngine {
        ClassifierBuilder::new()
            .keywords("100".to_string(), vec!["coffee".to_string()])
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_rules_rejected() {
        let result = ClassifierEngine::new(KeywordRules::default(), ExactLookup::default());
        assert!(matches!(
            result,
            Err(ClassifierError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_empty_text_rejected() {
        let engine = single_rule_engine();
        assert!(matches!(
            engine.classify(""),
            Err(ClassifierError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.classify("   \t\n"),
            Err(ClassifierError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_exact_match_short_circuits_scoring() {
        let engine = ClassifierBuilder::new()
            .keywords("100".to_string(), vec!["coffee".to_string()])
            .exact("coffee".to_string(), "200".to_string())
            .build()
            .unwrap();

        let result = engine.classify("Coffee").unwrap();
        assert_eq!(result.subject_code, "200");
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.matched_keywords, vec!["coffee"]);
    }

    #[test]
    fn test_single_keyword_score() {
        // raw_score = 1, density = 6/6, so score = 1.0 and confidence = 0.5
        let engine = single_rule_engine();
        let result = engine.classify("coffee").unwrap();

        assert_eq!(result.subject_code, "100");
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.matched_keywords, vec!["coffee"]);
    }

    #[test]
    fn test_unmatched_text_is_unclassified() {
        let engine = single_rule_engine();
        let result = engine.classify("green tea").unwrap();

        assert_eq!(result.subject_code, UNCLASSIFIED);
        assert_eq!(result.confidence, 0.0);
        assert!(result.matched_keywords.is_empty());
        assert!(!result.is_classified());
    }

    #[test]
    fn test_first_rule_wins_ties() {
        let engine = ClassifierBuilder::new()
            .keywords("100".to_string(), vec!["coffee".to_string()])
            .keywords("200".to_string(), vec!["coffee".to_string()])
            .build()
            .unwrap();

        let result = engine.classify("coffee break").unwrap();
        assert_eq!(result.subject_code, "100");
    }

    #[test]
    fn test_more_matches_outscore_fewer() {
        let engine = ClassifierBuilder::new()
            .keywords("100".to_string(), vec!["coffee".to_string()])
            .keywords(
                "200".to_string(),
                vec!["coffee".to_string(), "beans".to_string()],
            )
            .build()
            .unwrap();

        let result = engine.classify("coffee beans").unwrap();
        assert_eq!(result.subject_code, "200");
        assert_eq!(result.matched_keywords, vec!["coffee", "beans"]);
    }

    #[test]
    fn test_keywords_normalized_at_construction() {
        let engine = ClassifierBuilder::new()
            .keywords("100".to_string(), vec!["Coffee".to_string()])
            .build()
            .unwrap();

        let result = engine.classify("COFFEE").unwrap();
        assert_eq!(result.subject_code, "100");
        assert_eq!(result.matched_keywords, vec!["coffee"]);
    }

    #[test]
    fn test_exact_keys_normalized_at_construction() {
        let engine = ClassifierBuilder::new()
            .keywords("100".to_string(), vec!["coffee".to_string()])
            .exact("  ACME Corp  ".to_string(), "300".to_string())
            .build()
            .unwrap();

        let result = engine.classify("acme corp").unwrap();
        assert_eq!(result.subject_code, "300");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_keyword_recorded_once_per_rule() {
        let engine = single_rule_engine();
        let result = engine.classify("coffee and more coffee").unwrap();

        assert_eq!(result.matched_keywords, vec!["coffee"]);
    }

    #[test]
    fn test_builder_matches_direct_construction() {
        let built = ClassifierBuilder::new()
            .keywords("100".to_string(), vec!["coffee".to_string()])
            .exact("acme".to_string(), "300".to_string())
            .build()
            .unwrap();

        let direct = ClassifierEngine::new(
            KeywordRules::new([("100".to_string(), vec!["coffee".to_string()])]),
            ExactLookup::new([("acme".to_string(), "300".to_string())]),
        )
        .unwrap();

        assert_eq!(
            built.classify("coffee to go").unwrap(),
            direct.classify("coffee to go").unwrap()
        );
        assert_eq!(
            built.classify("acme").unwrap(),
            direct.classify("acme").unwrap()
        );
    }
}
