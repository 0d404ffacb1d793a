// SPDX-License-Identifier: PMPL-1.0-or-later

//! sqli-probe: signature-based SQL-injection classification.
//!
//! This crate inspects a pair of free-text input fields (conceptually the
//! "email" and "password" submitted to a login form) and reports which of a
//! fixed, ordered set of SQL-injection signatures the combined text matches.
//!
//! It is a pedagogical over-detector, not a SQL parser. The signatures for
//! `--` and `;` fire on plenty of benign text (a password containing a
//! semicolon, a date-like `--` separator); that permissiveness is the
//! intended teaching behavior and is preserved, not corrected.
//!
//! The core is pure: [`signatures::classify`] is a deterministic function of
//! its two string inputs with no I/O and no shared mutable state, so it is
//! safe to call concurrently without locks.

pub mod report;
pub mod signatures;
pub mod types;
