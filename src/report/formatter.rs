// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output
//!
//! Presentation only: renders classification results without reordering,
//! adding, or dropping matches. All decision logic lives in the classifier.

use crate::types::*;
use anyhow::Result;
use colored::*;
use std::fs;
use std::path::Path;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, input: &ClassificationInput, result: &ClassificationResult) {
        let verdict = if result.is_suspicious {
            "SUSPICIOUS".red().bold()
        } else {
            "CLEAN".green()
        };

        println!("  field1: {:?}", input.field1);
        println!("  field2: {:?}", input.field2);
        println!("  Verdict: {}", verdict);

        if !result.matches.is_empty() {
            println!("  Signatures matched: {}", result.matches.len());
            for (i, m) in result.matches.iter().enumerate() {
                println!("    {}. {}", i + 1, m.name.bold());
                println!("       {}", m.description.dimmed());
                println!("       pattern: {}", m.pattern_source.dimmed());
            }
        }
    }

    pub fn print_batch(&self, report: &BatchReport) {
        println!("\n{}", "=== BATCH CLASSIFICATION REPORT ===".bold().cyan());
        println!("  Pairs classified: {}", report.total);

        let flagged = if report.suspicious > 0 {
            report.suspicious.to_string().red().bold()
        } else {
            report.suspicious.to_string().green()
        };
        println!("  Flagged suspicious: {}", flagged);
        println!();

        for (i, entry) in report.results.iter().enumerate() {
            println!("{}", format!("Pair {}:", i + 1).bold().yellow());
            self.print(&entry.input, &entry.result);
            println!();
        }
    }

    pub fn save<P: AsRef<Path>>(&self, result: &ClassificationResult, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        fs::write(path.as_ref(), json)?;
        println!("Report saved to: {}", path.as_ref().display());
        Ok(())
    }

    pub fn save_batch<P: AsRef<Path>>(&self, report: &BatchReport, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(path.as_ref(), json)?;
        println!("Report saved to: {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
