//! Localizable string values: either a bare JSON string, or an object
//! `{str, dictId?, localized?, #value?, #comment?}`.

use serde_json::Value;

use crate::error::{GrcError, Result};
use crate::model::{json_kind, JsonRecord};

/// A `name`-shaped field after XLIFF substitution has already run (if any).
/// By the time a converter sees one of these, `dictId` has done its job and
/// only the display string and an optional inline comment remain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizableString {
    pub text: String,
    pub comment: Option<String>,
}

impl LocalizableString {
    pub fn from_value(label: &str, value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self { text: s, comment: None }),
            Value::Object(_) => {
                let mut rec = JsonRecord::new(label, value)?;
                if rec.peek_condition().is_some() {
                    return Err(GrcError::ConditionHandlingNotImplemented(label.to_string()));
                }
                let text = rec.take_string("str")?;
                // `dictId` is consumed upstream by the XLIFF substitution pass;
                // `localized` is a hint to translators with no GRC representation.
                rec.take("dictId");
                rec.take("localized");
                // `#value` without `#condition` is accepted as a plain alternate
                // spelling of `str`; nested `#value`/`#condition` pairs are out
                // of scope (see open questions).
                if let Some(alt) = rec.take("#value") {
                    if rec.peek_condition().is_none() {
                        if let Some(s) = alt.as_str() {
                            let comment = rec.take_comment();
                            rec.finish()?;
                            return Ok(Self { text: s.to_string(), comment });
                        }
                    }
                }
                let comment = rec.take_comment();
                rec.finish()?;
                Ok(Self { text, comment })
            }
            other => Err(GrcError::TypeMismatch {
                record: label.to_string(),
                field: "name",
                expected: "string or object",
                actual: json_kind(&other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_string() {
        let s = LocalizableString::from_value("x", json!("Hello")).unwrap();
        assert_eq!(s.text, "Hello");
        assert!(s.comment.is_none());
    }

    #[test]
    fn object_with_dict_id_and_localized() {
        let s = LocalizableString::from_value(
            "x",
            json!({"str": "Hello", "dictId": "g1", "localized": true}),
        )
        .unwrap();
        assert_eq!(s.text, "Hello");
    }

    #[test]
    fn value_without_condition_overrides_str() {
        let s = LocalizableString::from_value("x", json!({"str": "A", "#value": "B"})).unwrap();
        assert_eq!(s.text, "B");
    }

    #[test]
    fn condition_on_localizable_object_is_rejected() {
        let err = LocalizableString::from_value("x", json!({"str": "A", "#condition": "+WIN"})).unwrap_err();
        assert!(matches!(err, GrcError::ConditionHandlingNotImplemented(_)));
    }
}
