//! Subcommand implementations, one module per `Commands` variant.

pub mod check;
pub mod compile;
