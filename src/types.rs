// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for sqli-probe
//!
//! The classifier deals in plain value types: an input pair goes in, a
//! `ClassificationResult` comes out. Nothing here carries identity beyond
//! the call that produced it.

use serde::{Deserialize, Serialize};

/// A single fired signature, reported in signature-table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureMatch {
    pub name: String,
    pub description: String,
    pub pattern_source: String,
}

/// Outcome of classifying one input pair.
///
/// Invariant: `is_suspicious` is true exactly when `matches` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub is_suspicious: bool,
    pub matches: Vec<SignatureMatch>,
}

/// One free-text input pair, as submitted to a login form.
///
/// Missing fields deserialize to the empty string; the classifier accepts
/// any string, so there is no rejected form of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationInput {
    #[serde(default)]
    pub field1: String,
    #[serde(default)]
    pub field2: String,
}

/// One classified entry of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub input: ClassificationInput,
    pub result: ClassificationResult,
}

/// Aggregate output of a batch run over many input pairs.
///
/// `results` preserves the order of the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub total: usize,
    pub suspicious: usize,
    pub results: Vec<BatchEntry>,
}
