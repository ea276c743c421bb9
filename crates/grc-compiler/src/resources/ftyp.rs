//! `FTYP` — file type registration: a fixed five-field block.

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::{escape_string, map_icon_id};
use grc_spec::JsonRecord;

use crate::ctx::Ctx;

use super::support::{take_id_and_name, wrap_record};

/// `FTYP`'s icon column is numeric: `NoIcon`/`DGNoIcon` become `-1`, anything
/// else goes through the usual symbolic mapping.
fn icon_field(value: &str) -> String {
    match value {
        "NoIcon" | "DGNoIcon" | "-1" => "-1".to_string(),
        other => map_icon_id(other),
    }
}

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new("FTYP", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let description = rec.take_string("description")?;
    let file_ext = rec.take_string("fileExt")?;
    let creator = rec.take_string("creator")?;
    let type_ = rec.take_string("type")?;
    let icon_id = rec.take_string("iconId")?;
    rec.finish()?;

    wrap_record(
        condition,
        vec![
            format!("'FTYP' {id} {} {{", escape_string(&name.text)),
            format!("\t{}", escape_string(&description)),
            format!("\t{}", escape_string(&file_ext)),
            format!("\t{}", escape_string(&creator)),
            format!("\t{}", escape_string(&type_)),
            format!("\t{}", icon_field(&icon_id)),
            "}".to_string(),
        ],
    )
}
