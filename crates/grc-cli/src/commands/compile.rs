//! Compile command implementation
//!
//! Reads a JSON resource document (and optional XLIFF dictionaries), compiles
//! it to GRC source text, and writes the result to a file or stdout.

use std::collections::HashSet;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;

use grc_compiler::{compile, DriverConfig, TranslationInputs};

/// Run the compile command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    input: &str,
    output: Option<&str>,
    translation: Option<&str>,
    parent_translation: Option<&str>,
    target_ac_version: u32,
    ignored_resource_types: &[String],
    json: bool,
) -> Result<ExitCode> {
    let start = Instant::now();

    if !json {
        println!("{} {}", "Compiling:".cyan().bold(), input);
    }

    let document_text =
        fs::read_to_string(input).with_context(|| format!("failed to read input document: {input}"))?;
    let document: Value = serde_json::from_str(&document_text)
        .with_context(|| format!("failed to parse input document as JSON: {input}"))?;

    let child_xliff = translation
        .map(fs::read_to_string)
        .transpose()
        .with_context(|| "failed to read child XLIFF dictionary".to_string())?;
    let parent_xliff = parent_translation
        .map(fs::read_to_string)
        .transpose()
        .with_context(|| "failed to read parent XLIFF dictionary".to_string())?;

    let config = DriverConfig {
        target_ac_version,
        ignored_resource_types: ignored_resource_types.iter().cloned().collect::<HashSet<_>>(),
    };
    let translation_inputs = TranslationInputs {
        child_xliff: child_xliff.as_deref(),
        parent_xliff: parent_xliff.as_deref(),
    };

    let text = match compile(document, &config, &translation_inputs) {
        Ok(text) => text,
        Err(e) => {
            if json {
                println!(r#"{{"success":false,"error":{:?}}}"#, e.to_string());
            } else {
                eprintln!("{} {}", "error:".red().bold(), e);
            }
            return Ok(ExitCode::from(1));
        }
    };

    match output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("failed to write output: {path}"))?;
        }
        None => print!("{text}"),
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    if json {
        println!(r#"{{"success":true,"durationMs":{duration_ms}}}"#);
    } else if let Some(path) = output {
        println!(
            "\n{} wrote {} ({}ms)",
            "SUCCESS".green().bold(),
            path,
            duration_ms
        );
    }

    Ok(ExitCode::SUCCESS)
}
