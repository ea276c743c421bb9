//! Resource compiler CLI - command-line interface for the GRC resource
//! compiler.
//!
//! This binary compiles Archicad Add-On resource JSON documents into GRC
//! source text consumed by `ResConv`.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::*;
use grc_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            input,
            output,
            translation,
            parent_translation,
            target_ac_version,
            ignored_resource_types,
            json,
        } => commands::compile::run(
            &input,
            output.as_deref(),
            translation.as_deref(),
            parent_translation.as_deref(),
            target_ac_version,
            &ignored_resource_types,
            json,
        ),
        Commands::Check {
            input,
            target_ac_version,
            ignored_resource_types,
            json,
        } => commands::check::run(&input, target_ac_version, &ignored_resource_types, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
