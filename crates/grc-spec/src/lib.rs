//! Shared model for the JSON-to-GRC resource compiler.
//!
//! This crate holds nothing backend-specific: the JSON record/exhaustion
//! model, the error taxonomy, the `#condition` tokenizer, the token
//! formatter (escaping, comments, fixed-width columns, icon ids), and the
//! generic enumerated-property mapper. [`grc_compiler`](../grc_compiler)
//! builds the actual resource and dialog-control converters on top of these.

pub mod condition;
pub mod error;
pub mod format;
pub mod localizable;
pub mod model;
pub mod property;

pub use error::{GrcError, Result};
pub use localizable::LocalizableString;
pub use model::{JsonObject, JsonRecord, Rect, Size};
