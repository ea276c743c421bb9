//! `GALR` — alert/message box template. `#condition` on the inner text
//! fields is not supported (they go through [`LocalizableString::from_value`],
//! which already rejects a nested `#condition`).

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::escape_string;
use grc_spec::{JsonRecord, LocalizableString};

use crate::ctx::Ctx;

use super::support::{take_id_and_name, wrap_record};

fn take_text(rec: &mut JsonRecord, key: &'static str) -> Result<LocalizableString> {
    let value = rec.take_required(key)?;
    LocalizableString::from_value(rec.label(), value)
}

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new("GALR", record)?;
    let condition = rec.take_condition();
    let id = rec.take_id()?;
    let icon_id = rec.take_string("iconId")?;
    let name_value = rec.take_required("name")?;
    let name = LocalizableString::from_value(rec.label(), name_value)?;
    let large_text = take_text(&mut rec, "largeText")?;
    let small_text = take_text(&mut rec, "smallText")?;
    let button1 = take_text(&mut rec, "button1")?;
    let button2 = take_text(&mut rec, "button2")?;
    let button3 = take_text(&mut rec, "button3")?;
    rec.finish()?;

    wrap_record(
        condition,
        vec![
            format!("'GALR' {id} {icon_id} {} {{", escape_string(&name.text)),
            format!("\t{}", escape_string(&large_text.text)),
            format!("\t{}", escape_string(&small_text.text)),
            format!("\t{}", escape_string(&button1.text)),
            format!("\t{}", escape_string(&button2.text)),
            format!("\t{}", escape_string(&button3.text)),
            "}".to_string(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn emits_header_and_five_texts() {
        let ctx = Ctx::new(29);
        let lines = convert(
            &ctx,
            json!({
                "#id": 1, "iconId": "DGWarningIcon", "name": "Confirm",
                "largeText": "Are you sure?", "smallText": "This cannot be undone.",
                "button1": "Yes", "button2": "No", "button3": ""
            }),
        )
        .unwrap();
        assert_eq!(lines[0], "'GALR' 1 DGWarningIcon \"Confirm\" {");
        assert_eq!(lines[6], "\t\"\"");
    }
}
