//! `GICN` — icon resource table; each item references an image file.

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::escape_string;

use crate::ctx::Ctx;

use super::support::{emit_indexed_items, take_id_and_name, wrap_record};

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = grc_spec::JsonRecord::new("GICN", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let items = rec.take_array("items")?;
    rec.finish()?;

    let header = format!("'GICN' {id} {} {{", escape_string(&name.text));
    let lines = emit_indexed_items(header, &format!("GICN#{id}"), items, |item_rec| {
        let file_name = item_rec.take_string("fileName")?;
        Ok(escape_string(&file_name))
    })?;

    wrap_record(condition, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn emits_file_names() {
        let ctx = Ctx::new(29);
        let lines = convert(
            &ctx,
            json!({"#id": 1, "name": "Icons", "items": [{"#id": 500, "fileName": "ok.png"}]}),
        )
        .unwrap();
        assert_eq!(lines[1], "/* [500] */ \"ok.png\"");
    }
}
