//! `DATA` — either a file reference or inline data, never both, never
//! neither.

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::escape_string;
use grc_spec::{GrcError, JsonRecord};

use crate::ctx::Ctx;

use super::support::{take_id_and_name, wrap_record};

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new("DATA", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let file_name = rec.take_opt_string("fileName")?;
    let data = rec.take_opt_array("data")?;
    rec.finish()?;

    let body = match (file_name, data) {
        (Some(_), Some(_)) => {
            return Err(GrcError::InvalidDataRecord(format!(
                "DATA#{id} declares both fileName and data"
            )))
        }
        (None, None) => {
            return Err(GrcError::InvalidDataRecord(format!(
                "DATA#{id} declares neither fileName nor data"
            )))
        }
        (Some(file_name), None) => escape_string(&file_name),
        (None, Some(bytes)) => bytes
            .iter()
            .map(|v| v.as_i64().map(|n| n.to_string()).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(", "),
    };

    wrap_record(
        condition,
        vec![format!("'DATA' {id} {} {{ {body} }}", escape_string(&name.text))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_name_only() {
        let ctx = Ctx::new(29);
        let lines = convert(&ctx, json!({"#id": 1, "name": "D", "fileName": "blob.bin"})).unwrap();
        assert_eq!(lines[0], "'DATA' 1 \"D\" { \"blob.bin\" }");
    }

    #[test]
    fn both_is_error() {
        let ctx = Ctx::new(29);
        let err = convert(
            &ctx,
            json!({"#id": 1, "name": "D", "fileName": "a", "data": [1,2]}),
        )
        .unwrap_err();
        assert!(matches!(err, GrcError::InvalidDataRecord(_)));
    }

    #[test]
    fn neither_is_error() {
        let ctx = Ctx::new(29);
        let err = convert(&ctx, json!({"#id": 1, "name": "D"})).unwrap_err();
        assert!(matches!(err, GrcError::InvalidDataRecord(_)));
    }
}
