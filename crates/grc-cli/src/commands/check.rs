//! Check command implementation
//!
//! Compiles a JSON resource document in memory and reports success or
//! failure without writing any GRC output. Useful as a pipeline gate.

use std::collections::HashSet;
use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;

use grc_compiler::{compile, DriverConfig, TranslationInputs};

/// Run the check command.
pub fn run(
    input: &str,
    target_ac_version: u32,
    ignored_resource_types: &[String],
    json: bool,
) -> Result<ExitCode> {
    let document_text =
        fs::read_to_string(input).with_context(|| format!("failed to read input document: {input}"))?;
    let document: Value = serde_json::from_str(&document_text)
        .with_context(|| format!("failed to parse input document as JSON: {input}"))?;

    let config = DriverConfig {
        target_ac_version,
        ignored_resource_types: ignored_resource_types.iter().cloned().collect::<HashSet<_>>(),
    };

    match compile(document, &config, &TranslationInputs::default()) {
        Ok(text) => {
            let lines = text.lines().count();
            if json {
                println!(r#"{{"success":true,"lines":{lines}}}"#);
            } else {
                println!("{} {} ({} lines)", "OK".green().bold(), input, lines);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if json {
                println!(r#"{{"success":false,"error":{:?}}}"#, e.to_string());
            } else {
                eprintln!("{} {}: {}", "FAILED".red().bold(), input, e);
            }
            Ok(ExitCode::from(1))
        }
    }
}
