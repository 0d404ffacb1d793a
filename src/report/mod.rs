// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report rendering module

pub mod formatter;

use crate::types::*;
use anyhow::Result;
use std::path::Path;

pub use formatter::ReportFormatter;

/// Print a single classification result to the console
pub fn print_result(input: &ClassificationInput, result: &ClassificationResult) {
    let formatter = ReportFormatter::new();
    formatter.print(input, result);
}

/// Print a batch report to the console
pub fn print_batch_report(report: &BatchReport) {
    let formatter = ReportFormatter::new();
    formatter.print_batch(report);
}

/// Save a single classification result to a JSON file
pub fn save_result<P: AsRef<Path>>(result: &ClassificationResult, path: P) -> Result<()> {
    let formatter = ReportFormatter::new();
    formatter.save(result, path)
}

/// Save a batch report to a JSON file
pub fn save_batch_report<P: AsRef<Path>>(report: &BatchReport, path: P) -> Result<()> {
    let formatter = ReportFormatter::new();
    formatter.save_batch(report, path)
}
