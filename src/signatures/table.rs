// SPDX-License-Identifier: PMPL-1.0-or-later

//! Canonical injection signature table
//!
//! This module holds the known injection-indicator signatures as data, not
//! inline code, so the reporting order can be tested independently of the
//! matching engine. The declaration order is a contract: matches are always
//! reported in table order, never in text-position order.

use regex::Regex;

/// A fixed pattern-description pair used to flag suspicious input.
///
/// Matchers are case-insensitive and intentionally unanchored: they fire
/// anywhere in the subject text, including inside other words. This is
/// deliberate over-detection for a teaching tool, not a SQL parser, and
/// the permissiveness is part of the contract ("updated" must fire
/// `destructive-keyword` because it contains "update").
pub struct Signature {
    name: &'static str,
    description: &'static str,
    pattern_source: &'static str,
    matcher: Regex,
}

impl Signature {
    fn new(
        name: &'static str,
        pattern_source: &'static str,
        description: &'static str,
    ) -> Self {
        // Fixed literals without nested quantifiers; compilation cannot fail
        // and matching cannot backtrack catastrophically.
        let matcher = Regex::new(pattern_source).unwrap();
        Self {
            name,
            description,
            pattern_source,
            matcher,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn pattern_source(&self) -> &'static str {
        self.pattern_source
    }

    /// Test whether this signature fires anywhere in the subject text.
    pub fn is_match(&self, subject: &str) -> bool {
        self.matcher.is_match(subject)
    }
}

/// The ordered, immutable set of known injection signatures.
pub struct SignatureTable {
    signatures: Vec<Signature>,
}

impl SignatureTable {
    pub fn new() -> Self {
        Self {
            signatures: Self::build_signatures(),
        }
    }

    /// Build the complete signature table, in contract order.
    fn build_signatures() -> Vec<Signature> {
        vec![
            Signature::new(
                "single-quote",
                r"'",
                "Attempt to break out of a quoted SQL string literal",
            ),
            Signature::new(
                "or-tautology",
                r"(?i)or\s*(1\s*=\s*1|'1'\s*=\s*'1')",
                "A condition that is always true, used to bypass authentication checks",
            ),
            Signature::new(
                "union-select",
                r"(?i)union\s+select",
                "Attempt to append a second query to extract additional data",
            ),
            Signature::new(
                "sql-comment",
                r"--",
                "A line comment used to truncate the remainder of a query",
            ),
            Signature::new(
                "statement-separator",
                r";",
                "Attempt to chain and execute multiple statements",
            ),
            Signature::new(
                "destructive-keyword",
                r"(?i)(drop|delete|insert|update)",
                "Attempt to modify or destroy data",
            ),
        ]
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl Default for SignatureTable {
    fn default() -> Self {
        Self::new()
    }
}
