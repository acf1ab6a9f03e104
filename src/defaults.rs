//! Built-in keyword and exact-lookup tables for common bookkeeping categories

use crate::engine::classifier::ClassifierEngine;
use crate::engine::rules::{ExactLookup, KeywordRules};

/// Default keyword table covering common bookkeeping categories
///
/// Subject codes follow the Yayoi chart of accounts: 411 sales, 521
/// purchasing, 611 travel, 622 communications, 631 meetings, 701 payroll.
pub fn default_keyword_rules() -> KeywordRules {
    KeywordRules::new([
        (
            "411".to_string(),
            vec![
                "売上".to_string(),
                "販売".to_string(),
                "入金".to_string(),
                "売掛".to_string(),
            ],
        ),
        (
            "521".to_string(),
            vec![
                "仕入".to_string(),
                "購入".to_string(),
                "買掛".to_string(),
                "発注".to_string(),
            ],
        ),
        (
            "611".to_string(),
            vec![
                "旅費".to_string(),
                "交通".to_string(),
                "電車".to_string(),
                "タクシー".to_string(),
                "出張".to_string(),
            ],
        ),
        (
            "622".to_string(),
            vec![
                "通信".to_string(),
                "電話".to_string(),
                "インターネット".to_string(),
                "wifi".to_string(),
            ],
        ),
        (
            "631".to_string(),
            vec![
                "会議".to_string(),
                "打合せ".to_string(),
                "懇親会".to_string(),
                "会食".to_string(),
            ],
        ),
        (
            "701".to_string(),
            vec![
                "給与".to_string(),
                "給料".to_string(),
                "賃金".to_string(),
            ],
        ),
    ])
}

/// Default exact lookup mapping known vendor names to subject codes
pub fn default_exact_lookup() -> ExactLookup {
    ExactLookup::new([
        ("jr東日本".to_string(), "611".to_string()),
        ("ntt".to_string(), "622".to_string()),
    ])
}

/// Create a classifier with sensible defaults for quick start
pub fn create_default_classifier() -> ClassifierEngine {
    // The built-in table is non-empty, so construction cannot fail.
    ClassifierEngine::from_parts(default_keyword_rules(), default_exact_lookup())
}
