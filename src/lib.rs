//! # Subject Classifier
//!
//! A rule-based classification library that assigns accounting subject codes
//! to free-text transaction memos.
//!
//! ## Features
//!
//! - **Keyword scoring**: per-code keyword lists scored by match count and
//!   character density within the memo
//! - **Exact-match overrides**: fixed strings (vendor names, organizations)
//!   mapped directly to a subject code, bypassing keyword scoring
//! - **Deterministic tie-breaking**: rules are scored in construction order
//!   and the first rule reaching the highest score wins
//! - **Built-in defaults**: a ready-made keyword table for common bookkeeping
//!   categories plus a small vendor lookup
//! - **Serializable results**: classification decisions derive serde traits
//!   so embedders can log or persist them
//!
//! ## Quick Start
//!
//! ```rust
//! use subject_classifier::create_default_classifier;
//!
//! let classifier = create_default_classifier();
//! let result = classifier.classify("タクシーで移動").unwrap();
//! assert_eq!(result.subject_code, "611");
//! ```

pub mod defaults;
pub mod engine;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use defaults::*;
pub use engine::*;
pub use traits::*;
pub use types::*;
