//! Traits for classifier abstraction and extensibility

use crate::types::*;

/// Classification abstraction for embedders
///
/// This trait allows CLIs, scripts, and services to hold a classifier behind
/// `Box<dyn Classifier>` or `Arc<dyn Classifier>` and substitute alternative
/// implementations (test doubles, remote classifiers, etc.).
pub trait Classifier: Send + Sync {
    /// Classify a transaction memo into a subject code
    fn classify(&self, text: &str) -> ClassifierResult<ClassificationResult>;
}
