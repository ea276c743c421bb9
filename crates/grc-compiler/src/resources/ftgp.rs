//! `FTGP` — two MIME-type groups, each emitted inside its own `{}`.

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::escape_string;
use grc_spec::JsonRecord;

use crate::ctx::Ctx;

use super::support::{take_id_and_name, wrap_record};

fn emit_group(id: i64, label: &str, items: Vec<Value>) -> Result<Vec<String>> {
    let mut lines = vec!["{".to_string()];
    for (idx, item) in items.into_iter().enumerate() {
        let mut item_rec = JsonRecord::new(format!("FTGP#{id}.{label}[{idx}]"), item)?;
        let mime_id = item_rec.take_string("mimeId")?;
        let mime_type = item_rec.take_string("mimeType")?;
        item_rec.finish()?;
        lines.push(format!("{mime_id} {}", escape_string(&mime_type)));
    }
    lines.push("}".to_string());
    Ok(lines)
}

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new("FTGP", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let group1 = rec.take_array("group1")?;
    let group2 = rec.take_array("group2")?;
    rec.finish()?;

    let mut lines = vec![format!("'FTGP' {id} {} {{", escape_string(&name.text))];
    lines.extend(emit_group(id, "group1", group1)?);
    lines.extend(emit_group(id, "group2", group2)?);
    lines.push("}".to_string());

    wrap_record(condition, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn two_groups_each_in_own_braces() {
        let ctx = Ctx::new(29);
        let lines = convert(
            &ctx,
            json!({
                "#id": 1, "name": "G",
                "group1": [{"mimeId": "1", "mimeType": "text/plain"}],
                "group2": []
            }),
        )
        .unwrap();
        assert_eq!(lines[0], "'FTGP' 1 \"G\" {");
        assert_eq!(lines[1], "{");
        assert_eq!(lines[2], "1 \"text/plain\"");
        assert_eq!(lines[3], "}");
        assert_eq!(lines[4], "{");
        assert_eq!(lines[5], "}");
        assert_eq!(lines[6], "}");
    }
}
