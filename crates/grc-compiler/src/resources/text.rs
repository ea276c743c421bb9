//! `TEXT` — block text table, same item shape as `STRS` but emitted under
//! the `'TEXT'` tag.

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::escape_string;

use crate::ctx::Ctx;

use super::support::{emit_indexed_items, take_id_and_name, wrap_record};

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = grc_spec::JsonRecord::new("TEXT", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let items = rec.take_array("items")?;
    rec.finish()?;

    let header = format!("'TEXT' {id} {} {{", escape_string(&name.text));
    let lines = emit_indexed_items(header, &format!("TEXT#{id}"), items, |item_rec| {
        let text = item_rec.take_string("text")?;
        item_rec.take("localized");
        Ok(escape_string(&text))
    })?;

    wrap_record(condition, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn emits_text_tag() {
        let ctx = Ctx::new(29);
        let lines = convert(
            &ctx,
            json!({"#id": 1, "name": "Blurbs", "items": [{"#id": 1, "text": "Welcome"}]}),
        )
        .unwrap();
        assert_eq!(lines[0], "'TEXT' 1 \"Blurbs\" {");
        assert_eq!(lines[1], "/* [  1] */ \"Welcome\"");
    }
}
