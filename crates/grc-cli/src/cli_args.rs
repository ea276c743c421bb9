//! CLI argument definitions for the resource compiler command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// Compiles Archicad Add-On resource JSON documents into GRC source text.
#[derive(Parser)]
#[command(name = "grc-compile")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Compile a JSON resource document into a .grc file
    Compile {
        /// Path to the input JSON document
        input: String,

        /// Output .grc path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Child XLIFF dictionary to translate localizable strings with
        #[arg(long)]
        translation: Option<String>,

        /// Parent XLIFF dictionary the child dictionary overlays onto
        #[arg(long, requires = "translation")]
        parent_translation: Option<String>,

        /// Archicad version the output targets, gates version-sensitive tokens
        #[arg(long, default_value_t = 28)]
        target_ac_version: u32,

        /// Resource tag to skip entirely (repeatable)
        #[arg(long = "ignore")]
        ignored_resource_types: Vec<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Parse and convert a JSON document without writing any output
    Check {
        /// Path to the input JSON document
        input: String,

        /// Archicad version the output targets, gates version-sensitive tokens
        #[arg(long, default_value_t = 28)]
        target_ac_version: u32,

        /// Resource tag to skip entirely (repeatable)
        #[arg(long = "ignore")]
        ignored_resource_types: Vec<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compile_with_defaults() {
        let cli = Cli::try_parse_from(["grc-compile", "compile", "doc.json"]).unwrap();
        match cli.command {
            Commands::Compile {
                input,
                output,
                translation,
                parent_translation,
                target_ac_version,
                ignored_resource_types,
                json,
            } => {
                assert_eq!(input, "doc.json");
                assert!(output.is_none());
                assert!(translation.is_none());
                assert!(parent_translation.is_none());
                assert_eq!(target_ac_version, 28);
                assert!(ignored_resource_types.is_empty());
                assert!(!json);
            }
            _ => panic!("expected compile command"),
        }
    }

    #[test]
    fn parses_compile_with_translation_and_ignores() {
        let cli = Cli::try_parse_from([
            "grc-compile",
            "compile",
            "doc.json",
            "--output",
            "doc.grc",
            "--translation",
            "child.xlf",
            "--parent-translation",
            "parent.xlf",
            "--target-ac-version",
            "29",
            "--ignore",
            "FILE",
            "--ignore",
            "DATA",
        ])
        .unwrap();
        match cli.command {
            Commands::Compile {
                output,
                translation,
                parent_translation,
                target_ac_version,
                ignored_resource_types,
                ..
            } => {
                assert_eq!(output.as_deref(), Some("doc.grc"));
                assert_eq!(translation.as_deref(), Some("child.xlf"));
                assert_eq!(parent_translation.as_deref(), Some("parent.xlf"));
                assert_eq!(target_ac_version, 29);
                assert_eq!(ignored_resource_types, vec!["FILE", "DATA"]);
            }
            _ => panic!("expected compile command"),
        }
    }

    #[test]
    fn parent_translation_requires_translation() {
        let err = Cli::try_parse_from([
            "grc-compile",
            "compile",
            "doc.json",
            "--parent-translation",
            "parent.xlf",
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("translation"));
    }

    #[test]
    fn parses_check() {
        let cli = Cli::try_parse_from(["grc-compile", "check", "doc.json", "--json"]).unwrap();
        match cli.command {
            Commands::Check { input, json, .. } => {
                assert_eq!(input, "doc.json");
                assert!(json);
            }
            _ => panic!("expected check command"),
        }
    }
}
