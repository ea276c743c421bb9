//! `ACP0` — name/value variable table. Drops the optional `localized` flag
//! on each item; a per-item `#comment` is appended at line end.

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::{escape_string, format_comment_leading_space, pad_left_justify, MACRO_NAME, MACRO_VALUE};
use grc_spec::JsonRecord;

use crate::ctx::Ctx;

use super::support::{take_id_and_name, wrap_record};

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new("ACP0", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let items = rec.take_array("items")?;
    rec.finish()?;

    let mut lines = vec![format!("'ACP0' {id} {} {{", escape_string(&name.text))];
    for (idx, item) in items.into_iter().enumerate() {
        let mut item_rec = JsonRecord::new(format!("ACP0#{id}.items[{idx}]"), item)?;
        let var_name = item_rec.take_string("varName")?;
        let value = item_rec.take_string("value")?;
        item_rec.take("localized");
        let comment = item_rec.take_comment();
        item_rec.finish()?;

        lines.push(format!(
            "{}{}{}",
            pad_left_justify(&var_name, MACRO_NAME),
            pad_left_justify(&value, MACRO_VALUE),
            format_comment_leading_space(comment.as_deref().unwrap_or_default())
        ));
    }
    lines.push("}".to_string());

    wrap_record(condition, lines)
}
