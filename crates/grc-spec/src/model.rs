//! The JSON record model.
//!
//! A converter receives one JSON object per resource record (or per dialog
//! control) and must consume every key it recognizes. [`JsonRecord`] tracks
//! which keys have been taken; [`JsonRecord::finish`] turns any leftovers into
//! [`GrcError::UnhandledJsonProperty`]. This is the dynamic analogue of the
//! destructive dict-popping the original `ResConv` front end performs, without
//! requiring one hand-written `serde::Deserialize` impl per control variant.

use serde_json::{Map, Value};

use crate::error::{GrcError, Result};

pub type JsonObject = Map<String, Value>;

/// A resource or control record mid-conversion.
///
/// `label` identifies the record in error messages (e.g. `"FILE#42"` or
/// `"Button#7"`); it is purely diagnostic.
#[derive(Debug)]
pub struct JsonRecord {
    label: String,
    map: JsonObject,
}

impl JsonRecord {
    /// Wraps a JSON value as a record. Fails if the value is not an object.
    pub fn new(label: impl Into<String>, value: Value) -> Result<Self> {
        let label = label.into();
        match value {
            Value::Object(map) => Ok(Self { label, map }),
            other => Err(GrcError::TypeMismatch {
                record: label,
                field: "<record>",
                expected: "object",
                actual: json_kind(&other),
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Removes and returns a raw value, if present.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.map.remove(key)
    }

    /// Removes a required raw value or reports it missing.
    pub fn take_required(&mut self, key: &'static str) -> Result<Value> {
        self.map.remove(key).ok_or_else(|| GrcError::MissingField {
            record: self.label.clone(),
            field: key,
        })
    }

    /// Removes `#id` as an integer.
    pub fn take_id(&mut self) -> Result<i64> {
        self.take_i64("#id")
    }

    /// Removes `#condition`, if present.
    pub fn take_condition(&mut self) -> Option<String> {
        self.take("#condition").and_then(|v| v.as_str().map(str::to_string))
    }

    /// Removes `#comment`, if present.
    pub fn take_comment(&mut self) -> Option<String> {
        self.take("#comment").and_then(|v| v.as_str().map(str::to_string))
    }

    /// Peeks `#condition` without consuming it (used by callers that need to
    /// know about it before the record's own fields are read).
    pub fn peek_condition(&self) -> Option<&str> {
        self.map.get("#condition").and_then(Value::as_str)
    }

    pub fn take_string(&mut self, key: &'static str) -> Result<String> {
        let value = self.take_required(key)?;
        value.as_str().map(str::to_string).ok_or_else(|| GrcError::TypeMismatch {
            record: self.label.clone(),
            field: key,
            expected: "string",
            actual: json_kind(&value),
        })
    }

    pub fn take_opt_string(&mut self, key: &'static str) -> Result<Option<String>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| GrcError::TypeMismatch {
                    record: self.label.clone(),
                    field: key,
                    expected: "string",
                    actual: json_kind(&value),
                }),
        }
    }

    pub fn take_i64(&mut self, key: &'static str) -> Result<i64> {
        let value = self.take_required(key)?;
        value.as_i64().ok_or_else(|| GrcError::TypeMismatch {
            record: self.label.clone(),
            field: key,
            expected: "integer",
            actual: json_kind(&value),
        })
    }

    pub fn take_opt_i64(&mut self, key: &'static str) -> Result<Option<i64>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_i64().map(Some).ok_or_else(|| GrcError::TypeMismatch {
                record: self.label.clone(),
                field: key,
                expected: "integer",
                actual: json_kind(&value),
            }),
        }
    }

    pub fn take_f64(&mut self, key: &'static str) -> Result<f64> {
        let value = self.take_required(key)?;
        value.as_f64().ok_or_else(|| GrcError::TypeMismatch {
            record: self.label.clone(),
            field: key,
            expected: "number",
            actual: json_kind(&value),
        })
    }

    pub fn take_bool(&mut self, key: &'static str, default: bool) -> Result<bool> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(b)) => Ok(b),
            Some(other) => Err(GrcError::TypeMismatch {
                record: self.label.clone(),
                field: key,
                expected: "bool",
                actual: json_kind(&other),
            }),
        }
    }

    pub fn take_array(&mut self, key: &'static str) -> Result<Vec<Value>> {
        let value = self.take_required(key)?;
        match value {
            Value::Array(items) => Ok(items),
            other => Err(GrcError::TypeMismatch {
                record: self.label.clone(),
                field: key,
                expected: "array",
                actual: json_kind(&other),
            }),
        }
    }

    pub fn take_opt_array(&mut self, key: &'static str) -> Result<Option<Vec<Value>>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(other) => Err(GrcError::TypeMismatch {
                record: self.label.clone(),
                field: key,
                expected: "array",
                actual: json_kind(&other),
            }),
        }
    }

    /// Does this record still hold the given key?
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Consumes the record, asserting it has no leftover keys.
    pub fn finish(self) -> Result<()> {
        if self.map.is_empty() {
            Ok(())
        } else {
            Err(GrcError::UnhandledJsonProperty {
                record: self.label,
                keys: self.map.keys().cloned().collect(),
            })
        }
    }
}

pub fn json_kind(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
    .to_string()
}

/// `{x, y, w, h}` (or `{x,y,w,h}` with any subset); used by almost every
/// dialog control as the opening rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Rect {
    pub fn from_value(label: &str, value: Value) -> Result<Self> {
        let mut rec = JsonRecord::new(format!("{label}.rect"), value)?;
        let x = rec.take_i64("x")?;
        let y = rec.take_i64("y")?;
        let w = rec.take_i64("w")?;
        let h = rec.take_i64("h")?;
        rec.finish()?;
        Ok(Self { x, y, w, h })
    }
}

/// `{w, h}`, used by the dialog resource's own `size` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub w: i64,
    pub h: i64,
}

impl Size {
    pub fn from_value(label: &str, value: Value) -> Result<Self> {
        let mut rec = JsonRecord::new(format!("{label}.size"), value)?;
        let w = rec.take_i64("w")?;
        let h = rec.take_i64("h")?;
        rec.finish()?;
        Ok(Self { w, h })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finish_ok_when_empty() {
        let rec = JsonRecord::new("FILE#1", json!({})).unwrap();
        assert!(rec.finish().is_ok());
    }

    #[test]
    fn finish_reports_leftover_keys() {
        let mut rec = JsonRecord::new("FILE#1", json!({"#id": 1, "foo": 1})).unwrap();
        rec.take_id().unwrap();
        let err = rec.finish().unwrap_err();
        match err {
            GrcError::UnhandledJsonProperty { record, keys } => {
                assert_eq!(record, "FILE#1");
                assert_eq!(keys, vec!["foo".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn take_id_requires_integer() {
        let mut rec = JsonRecord::new("X", json!({"#id": "oops"})).unwrap();
        assert!(rec.take_id().is_err());
    }

    #[test]
    fn rect_parses_all_fields() {
        let rect = Rect::from_value("Button#1", json!({"x": 10, "y": 20, "w": 80, "h": 20})).unwrap();
        assert_eq!(rect, Rect { x: 10, y: 20, w: 80, h: 20 });
    }
}
