//! `CMND` — command palette entries. Each command is its own `#condition`-
//! wrappable block; only the first item line of a command shows the id and
//! icon id, later items of the same command repeat text/description with
//! blank id/iconId columns.

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::{escape_string, map_icon_id, pad_left_justify, CMND_ICONID, CMND_ID, CMND_TEXT};
use grc_spec::JsonRecord;

use crate::ctx::Ctx;

use super::support::{take_id_and_name, wrap_record};

fn icon_column(icon_id: &str) -> String {
    if icon_id == "-1" {
        "NoIcon".to_string()
    } else {
        map_icon_id(icon_id)
    }
}

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new("CMND", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let commands = rec.take_array("commands")?;
    rec.finish()?;

    let mut lines = vec![format!("'CMND' {id} {} {{", escape_string(&name.text))];
    for (cmd_idx, command) in commands.into_iter().enumerate() {
        let mut cmd_rec = JsonRecord::new(format!("CMND#{id}.commands[{cmd_idx}]"), command)?;
        let cmd_condition = cmd_rec.take_condition();
        let cmd_id = cmd_rec.take_i64("#id")?;
        let icon_id = match cmd_rec.take("iconId") {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s,
            None => "-1".to_string(),
            Some(other) => {
                return Err(grc_spec::GrcError::TypeMismatch {
                    record: cmd_rec.label().to_string(),
                    field: "iconId",
                    expected: "string or number",
                    actual: grc_spec::model::json_kind(&other),
                })
            }
        };
        let items = cmd_rec.take_array("items")?;
        cmd_rec.finish()?;

        let mut command_lines = Vec::new();
        for (item_idx, item) in items.into_iter().enumerate() {
            let mut item_rec = JsonRecord::new(format!("CMND#{id}.commands[{cmd_idx}].items[{item_idx}]"), item)?;
            let text = item_rec.take_string("text")?;
            let description = item_rec.take_string("description")?;
            item_rec.finish()?;

            let (id_col, icon_col) = if item_idx == 0 {
                (cmd_id.to_string(), icon_column(&icon_id))
            } else {
                (String::new(), String::new())
            };
            command_lines.push(format!(
                "{}{}{}{}",
                pad_left_justify(&id_col, CMND_ID),
                pad_left_justify(&icon_col, CMND_ICONID),
                pad_left_justify(&escape_string(&text), CMND_TEXT),
                escape_string(&description),
            ));
        }

        lines.extend(wrap_record(cmd_condition, command_lines)?);
    }
    lines.push("}".to_string());

    wrap_record(condition, lines)
}
