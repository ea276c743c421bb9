//! `GCSR` — cursor hotspot coordinates.

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::format::escape_string;
use grc_spec::JsonRecord;

use crate::ctx::Ctx;

use super::support::{take_id_and_name, wrap_record};

pub fn convert(_ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new("GCSR", record)?;
    let condition = rec.take_condition();
    let (id, name) = take_id_and_name(&mut rec)?;
    let x = rec.take_i64("x")?;
    let y = rec.take_i64("y")?;
    rec.finish()?;

    wrap_record(
        condition,
        vec![format!("'GCSR' {id} {} {{ {x} {y} }}", escape_string(&name.text))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_line() {
        let ctx = Ctx::new(29);
        let lines = convert(&ctx, json!({"#id": 1, "name": "Cur", "x": 8, "y": 8})).unwrap();
        assert_eq!(lines, vec!["'GCSR' 1 \"Cur\" { 8 8 }".to_string()]);
    }
}
