//! Resource compiler CLI library.
//!
//! Holds the subcommand implementations; `main.rs` is kept to argument
//! parsing and dispatch.

pub mod commands;
