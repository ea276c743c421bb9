//! `ACNF` — Add-On configuration record.

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::escape_string;
use grc_spec::{GrcError, JsonRecord};

use crate::ctx::Ctx;

use super::support::take_id_and_name;

/// `ACNF` does not support `#condition`, nor does it accept list-shaped
/// alternates anywhere in its body — both are rejected outright rather than
/// silently ignored.
pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new("ACNF", record)?;
    if rec.peek_condition().is_some() {
        return Err(GrcError::ConditionHandlingNotImplemented("ACNF".to_string()));
    }

    let (id, name) = take_id_and_name(&mut rec)?;
    let version = rec.take_string("version")?;
    let platform = rec.take_string("platform")?;
    let flag = rec.take_string("flag")?;
    let method = rec.take_string("method")?;
    let sub_method = rec.take_string("subMethod")?;
    let method_version = rec.take_string("methodVersion")?;
    let method_index = rec.take_string("methodIndex")?;
    let function_items = rec.take_array("function")?;
    let modul_name = rec.take_string("modulName")?;
    rec.finish()?;

    if function_items.iter().any(|v| !v.is_string()) {
        return Err(GrcError::ConditionHandlingNotImplemented(
            "ACNF.function (non-string entries)".to_string(),
        ));
    }
    let function = function_items
        .iter()
        .map(|v| v.as_str().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" + ");

    Ok(vec![
        format!("'ACNF' {id} {} {{", escape_string(&name.text)),
        format!("\t{version}"),
        format!("\t{platform}"),
        format!("\t{flag}"),
        format!("\t{method}"),
        format!("\t{sub_method}"),
        format!("\t{method_version}"),
        format!("\t{method_index}"),
        format!("\t{function}"),
        format!("\t{modul_name}"),
        "}".to_string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn emits_fixed_field_block() {
        let ctx = Ctx::new(29);
        let lines = convert(
            &ctx,
            json!({
                "#id": 1, "name": "Cfg",
                "version": "1", "platform": "WIN", "flag": "0",
                "method": "M", "subMethod": "SM", "methodVersion": "1",
                "methodIndex": "0", "function": ["Foo", "Bar"], "modulName": "Mod"
            }),
        )
        .unwrap();
        assert_eq!(lines[0], "'ACNF' 1 \"Cfg\" {");
        assert_eq!(lines[7], "\tFoo + Bar");
        assert_eq!(lines.last().unwrap(), "}");
    }

    #[test]
    fn condition_is_rejected() {
        let ctx = Ctx::new(29);
        let err = convert(&ctx, json!({"#condition": "+WIN", "#id": 1, "name": "x"})).unwrap_err();
        assert!(matches!(err, GrcError::ConditionHandlingNotImplemented(_)));
    }
}
