//! Shared helpers used by the non-dialog resource converters.

use serde_json::Value;

use grc_spec::condition::{format_endif_line, format_if_line};
use grc_spec::error::Result;
use grc_spec::format::{escape_string, item_index_comment};
use grc_spec::{JsonRecord, LocalizableString};

use crate::ctx::Ctx;

/// Wraps a record's already-rendered lines in `#if`/`#endif` if `condition`
/// is present. This is the resource-level counterpart of the per-control
/// wrap: the bracket surrounds the whole `'<TAG>' … { … }` block.
pub fn wrap_record(condition: Option<String>, lines: Vec<String>) -> Result<Vec<String>> {
    match condition {
        Some(c) => {
            let mut out = Vec::with_capacity(lines.len() + 2);
            out.push(format_if_line(&c)?);
            out.extend(lines);
            out.push(format_endif_line().to_string());
            Ok(out)
        }
        None => Ok(lines),
    }
}

pub fn quoted(s: &str) -> String {
    escape_string(s)
}

/// Reads `#id` and a `name` localizable string off `rec`, in that order —
/// every non-dialog resource record starts this way.
pub fn take_id_and_name(rec: &mut JsonRecord) -> Result<(i64, LocalizableString)> {
    let id = rec.take_id()?;
    let name_value = rec.take_required("name")?;
    let name = LocalizableString::from_value(rec.label(), name_value)?;
    Ok((id, name))
}

/// Renders `header { /* [id] */ token … }` for the family of resources whose
/// items are each `{#id, <one field>}`: `GICN`, `MDID`, `STRS`, `TEXT`. The
/// index shown is the item's own `#id`, not its position.
pub fn emit_indexed_items(
    header: String,
    label_prefix: &str,
    items: Vec<Value>,
    extract: impl Fn(&mut JsonRecord) -> Result<String>,
) -> Result<Vec<String>> {
    let mut lines = vec![header];
    for (idx, item) in items.into_iter().enumerate() {
        let mut item_rec = JsonRecord::new(format!("{label_prefix}.items[{idx}]"), item)?;
        let item_id = item_rec.take_i64("#id")?;
        let token = extract(&mut item_rec)?;
        item_rec.finish()?;
        lines.push(format!("{} {token}", item_index_comment(item_id)));
    }
    lines.push("}".to_string());
    Ok(lines)
}

pub fn as_array(label: &str, value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(grc_spec::GrcError::TypeMismatch {
            record: label.to_string(),
            field: "<items>",
            expected: "array",
            actual: grc_spec::model::json_kind(&other),
        }),
    }
}
