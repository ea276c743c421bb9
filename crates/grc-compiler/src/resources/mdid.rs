//! `MDID` — module id constant table. Pairs with the `#include
//! "MDIDs_modules.h"` preamble line the top-level driver emits whenever an
//! `MDID` resource is present.

use serde_json::Value;

use grc_spec::error::Result;

use crate::ctx::Ctx;

use super::support::{emit_indexed_items, take_id_and_name, wrap_record};

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = grc_spec::JsonRecord::new("MDID", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let items = rec.take_array("items")?;
    rec.finish()?;

    let header = format!("'MDID' {id} {} {{", grc_spec::format::escape_string(&name.text));
    let lines = emit_indexed_items(header, &format!("MDID#{id}"), items, |item_rec| {
        item_rec.take_string("name")
    })?;

    wrap_record(condition, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn emits_constant_names() {
        let ctx = Ctx::new(29);
        let lines = convert(
            &ctx,
            json!({"#id": 1, "name": "ModuleIds", "items": [{"#id": 1, "name": "kMyModuleID"}]}),
        )
        .unwrap();
        assert_eq!(lines[1], "/* [  1] */ kMyModuleID");
    }
}
