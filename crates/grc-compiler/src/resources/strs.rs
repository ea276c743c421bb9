//! `STRS` — string table. Drops the optional `localized` flag per item.

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::escape_string;

use crate::ctx::Ctx;

use super::support::{emit_indexed_items, take_id_and_name, wrap_record};

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = grc_spec::JsonRecord::new("STRS", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let items = rec.take_array("items")?;
    rec.finish()?;

    let header = format!("'STR#' {id} {} {{", escape_string(&name.text));
    let lines = emit_indexed_items(header, &format!("STRS#{id}"), items, |item_rec| {
        let text = item_rec.take_string("text")?;
        item_rec.take("localized");
        Ok(escape_string(&text))
    })?;

    wrap_record(condition, lines)
}
