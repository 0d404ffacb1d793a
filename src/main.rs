// SPDX-License-Identifier: PMPL-1.0-or-later

//! sqli-probe: signature-based SQL-injection classification
//!
//! A standalone wrapper around the classifier core: classify a single field
//! pair, a JSON batch of pairs, list the signature table, or walk through
//! the built-in demonstration inputs.

mod report;
mod signatures;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use types::*;

#[derive(Parser)]
#[command(name = "sqli-probe")]
#[command(version = "0.2.0")]
#[command(about = "Signature-based SQL-injection classification for login-form inputs")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single field pair
    Classify {
        /// First input field (conceptually the login email)
        #[arg(value_name = "FIELD1")]
        field1: Option<String>,

        /// Second input field (conceptually the password)
        #[arg(value_name = "FIELD2")]
        field2: Option<String>,

        /// First field as a flag; overrides the positional form
        #[arg(long = "field1", value_name = "TEXT")]
        field1_flag: Option<String>,

        /// Second field as a flag; overrides the positional form
        #[arg(long = "field2", value_name = "TEXT")]
        field2_flag: Option<String>,

        /// Emit the result as JSON instead of formatted text
        #[arg(short, long)]
        json: bool,

        /// Write the JSON result to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify a JSON file of field pairs
    Batch {
        /// JSON array of {"field1": ..., "field2": ...} objects
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit the report as JSON instead of formatted text
        #[arg(short, long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the signature table in declared order
    Signatures,

    /// Classify the built-in demonstration inputs
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            field1,
            field2,
            field1_flag,
            field2_flag,
            json,
            output,
        } => {
            // Absent fields coerce to empty: any string is valid input and
            // classification is informational, never an error state.
            let input = ClassificationInput {
                field1: field1_flag.or(field1).unwrap_or_default(),
                field2: field2_flag.or(field2).unwrap_or_default(),
            };

            let result = signatures::classify(&input.field1, &input.field2);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                report::print_result(&input, &result);
            }

            if let Some(output_path) = output {
                report::save_result(&result, output_path)?;
            }
        }

        Commands::Batch { file, json, output } => {
            let content = std::fs::read_to_string(&file)?;
            let inputs: Vec<ClassificationInput> = serde_json::from_str(&content)?;

            let classifier = signatures::Classifier::new();
            let results: Vec<BatchEntry> = inputs
                .into_iter()
                .map(|input| {
                    let result = classifier.classify(&input.field1, &input.field2);
                    BatchEntry { input, result }
                })
                .collect();

            let batch = BatchReport {
                total: results.len(),
                suspicious: results.iter().filter(|e| e.result.is_suspicious).count(),
                results,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&batch)?);
            } else {
                report::print_batch_report(&batch);
            }

            if let Some(output_path) = output {
                report::save_batch_report(&batch, output_path)?;
            }
        }

        Commands::Signatures => {
            let classifier = signatures::Classifier::new();

            println!("{}", "SIGNATURE TABLE".bold().yellow());
            for (i, sig) in classifier.table().signatures().iter().enumerate() {
                println!("  {}. {}", i + 1, sig.name().bold());
                println!("     pattern: {}", sig.pattern_source());
                println!("     {}", sig.description().dimmed());
            }
        }

        Commands::Demo => run_demo(),
    }

    Ok(())
}

/// Walk the canonical teaching inputs through the classifier.
fn run_demo() {
    let cases: &[(&str, &str, &str)] = &[
        (
            "Tautology bypass",
            "admin' OR '1'='1' -- ",
            "anything",
        ),
        (
            "Union-based extraction",
            "admin' UNION SELECT 1,2,3 -- ",
            "test",
        ),
        (
            "Stacked destructive statement",
            "admin'; DROP TABLE users; -- ",
            "test",
        ),
        (
            "Ordinary credentials",
            "normal.user@example.com",
            "Str0ngPassw0rd!",
        ),
    ];

    println!("{}", "=== INJECTION CLASSIFICATION DEMO ===".bold().cyan());
    println!();

    for (label, field1, field2) in cases {
        let input = ClassificationInput {
            field1: (*field1).to_string(),
            field2: (*field2).to_string(),
        };
        let result = signatures::classify(field1, field2);

        println!("{}", label.bold().yellow());
        report::print_result(&input, &result);
        println!();
    }
}
