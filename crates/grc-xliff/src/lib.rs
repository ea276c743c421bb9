//! XLIFF 1.2 translation support for the GRC compiler.
//!
//! Three independent steps, matching the component design:
//! 1. [`parse::parse_xliff`] reads `<trans-unit>` elements into a flat
//!    `dictId -> text` dictionary, preferring a usable `<target>` over
//!    `<source>`.
//! 2. [`merge::merge_dictionaries`] overlays a child dictionary on an
//!    optional parent, child wins.
//! 3. [`substitute::substitute_into_json`] walks a parsed spec JSON value and
//!    replaces `str` fields that carry a matching `dictId`, preserving
//!    leading/trailing whitespace.

pub mod merge;
pub mod parse;
pub mod substitute;

pub use merge::merge_dictionaries;
pub use parse::{parse_xliff, Dictionary};
pub use substitute::substitute_into_json;
