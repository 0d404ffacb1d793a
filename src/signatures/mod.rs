// SPDX-License-Identifier: PMPL-1.0-or-later

//! Injection signature detection
//!
//! The table declares what counts as suspicious; the classifier scans a
//! field pair against it.

pub mod classifier;
pub mod table;

use crate::types::ClassificationResult;

pub use classifier::Classifier;
pub use table::SignatureTable;

/// Classify a field pair against the canonical signature table
pub fn classify(field1: &str, field2: &str) -> ClassificationResult {
    let classifier = Classifier::new();
    classifier.classify(field1, field2)
}
