//! `DHLP` — standalone tooltip/anchor table (distinct from the `DLGH` block
//! synthesized alongside `GDLG`).

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::{escape_string, item_index_comment, pad_left_justify, GDLH_TOOLTIP};
use grc_spec::JsonRecord;

use crate::ctx::Ctx;

use super::support::{take_id_and_name, wrap_record};

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new("DHLP", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let items = rec.take_array("items")?;
    rec.finish()?;

    let mut lines = vec![format!("'DHLP' {id} {} {{", escape_string(&name.text))];
    for (idx, item) in items.into_iter().enumerate() {
        let mut item_rec = JsonRecord::new(format!("DHLP#{id}.items[{idx}]"), item)?;
        let tooltip = item_rec.take_string("tooltip")?;
        let anchor = item_rec.take_string("anchor")?;
        item_rec.finish()?;

        lines.push(format!(
            "{}  {}  {anchor}",
            item_index_comment(idx as i64 + 1),
            pad_left_justify(&escape_string(&tooltip), GDLH_TOOLTIP),
        ));
    }
    lines.push("}".to_string());

    wrap_record(condition, lines)
}
