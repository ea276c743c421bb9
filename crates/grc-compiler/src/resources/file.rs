//! `FILE` — a single referenced file name.

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::escape_string;
use grc_spec::JsonRecord;

use crate::ctx::Ctx;

use super::support::{take_id_and_name, wrap_record};

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new("FILE", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let file_name = rec.take_string("fileName")?;
    rec.finish()?;

    wrap_record(
        condition,
        vec![format!(
            "'FILE' {id} {} {{ {} }}",
            escape_string(&name.text),
            escape_string(&file_name)
        )],
    )
}
