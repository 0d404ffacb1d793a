// SPDX-License-Identifier: PMPL-1.0-or-later

//! Classification engine
//!
//! A single scan-and-collect pass: concatenate the two fields, walk the
//! signature table in declared order, record every signature that fires.
//! Pure and infallible; every string input produces a well-defined result.

use crate::signatures::table::SignatureTable;
use crate::types::{ClassificationResult, SignatureMatch};

/// Per-field input cap in bytes.
///
/// Purely a resource-exhaustion safeguard. The scan itself is linear in the
/// subject length, so the cap bounds wall-clock time, not correctness.
const MAX_FIELD_BYTES: usize = 64 * 1024;

pub struct Classifier {
    table: SignatureTable,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            table: SignatureTable::default(),
        }
    }

    /// Classify one input pair.
    ///
    /// The fields are joined with a single space into the subject text and
    /// scanned once per signature. Matches are reported in table order
    /// regardless of where in the subject they occur, and `is_suspicious`
    /// is true exactly when at least one signature fired.
    pub fn classify(&self, field1: &str, field2: &str) -> ClassificationResult {
        let subject = format!("{} {}", cap_field(field1), cap_field(field2));

        let mut matches = Vec::new();
        for signature in self.table.signatures() {
            if signature.is_match(&subject) {
                matches.push(SignatureMatch {
                    name: signature.name().to_string(),
                    description: signature.description().to_string(),
                    pattern_source: signature.pattern_source().to_string(),
                });
            }
        }

        ClassificationResult {
            is_suspicious: !matches.is_empty(),
            matches,
        }
    }

    pub fn table(&self) -> &SignatureTable {
        &self.table
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate a field to the byte cap without splitting a UTF-8 sequence.
fn cap_field(field: &str) -> &str {
    if field.len() <= MAX_FIELD_BYTES {
        return field;
    }
    let mut end = MAX_FIELD_BYTES;
    while !field.is_char_boundary(end) {
        end -= 1;
    }
    &field[..end]
}
