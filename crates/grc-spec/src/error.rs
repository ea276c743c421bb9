//! Error taxonomy for JSON-to-GRC conversion.

use thiserror::Error;

/// Top-level error type produced by the JSON record model, the XLIFF
/// translator, and every resource/control converter.
#[derive(Debug, Error)]
pub enum GrcError {
    /// A `#condition` (or list-of-alternates shape) appeared at a position
    /// the converter does not support yet.
    #[error("#condition is not supported on {0}")]
    ConditionHandlingNotImplemented(String),

    /// An unrecognized top-level resource tag.
    #[error("unsupported resource type '{0}'")]
    UnsupportedResourceType(String),

    /// An unrecognized key inside a dialog's `controls` list.
    #[error("unsupported GDLG control '{0}'")]
    UnsupportedGDLGControl(String),

    /// An enumerated control property whose value is not in the mapping table.
    #[error("unsupported value '{value}' for {control}.{property}")]
    UnsupportedGDLGControlProperty {
        control: &'static str,
        property: &'static str,
        value: String,
    },

    /// A dialog type/flag combination `ResConv` forbids.
    #[error("illegal style: {0}")]
    IllegalStyle(String),

    /// A record kept unrecognized keys after conversion.
    #[error("record '{record}' has unhandled properties: {keys:?}")]
    UnhandledJsonProperty { record: String, keys: Vec<String> },

    /// A required field was absent.
    #[error("missing required field '{field}' on {record}")]
    MissingField { record: String, field: &'static str },

    /// A field had the wrong JSON shape (e.g. a string where a number was
    /// expected). Treated as a programming/input error, not a recoverable one.
    #[error("field '{field}' on {record} has the wrong type: expected {expected}, got {actual}")]
    TypeMismatch {
        record: String,
        field: &'static str,
        expected: &'static str,
        actual: String,
    },

    /// A `#condition` string used a token the tokenizer does not recognize.
    #[error("invalid condition token '{0}'")]
    InvalidConditionToken(String),

    /// `DATA` declared both `fileName` and `data`, or neither.
    #[error("{0}")]
    InvalidDataRecord(String),

    /// Malformed XLIFF input.
    #[error("XLIFF error: {0}")]
    Xliff(String),

    /// The caller handed in JSON that did not even parse.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GrcError>;
