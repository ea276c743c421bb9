//! `'GDLG'` + `'DLGH'`: a dialog resource expands into two correlated GRC
//! blocks from one JSON record (§4.5).

mod controls;

use std::collections::HashSet;

use serde_json::Value;

use grc_spec::condition::{format_endif_line, format_if_line};
use grc_spec::error::Result;
use grc_spec::format::{escape_string, pad_left_justify, GDLH_TOOLTIP};
use grc_spec::{GrcError, JsonRecord, LocalizableString, Size};

use crate::ctx::Ctx;

pub fn convert(ctx: &Ctx, record: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new("GDLG", record)?;
    let condition = rec.take_condition();
    let id = rec.take_id()?;
    rec.take("localized");
    let name = LocalizableString::from_value(rec.label(), rec.take_required("name")?)?;
    let size = Size::from_value(rec.label(), rec.take_required("size")?)?;
    let dialog_type = rec.take_string("type")?;
    let anchor = rec.take_string("anchor")?;
    let flags = dialog_type_flags(&dialog_type, &mut rec)?;
    let controls = rec.take_array("controls")?;
    // The second (DLGH) pass reads helpInfo off an independent copy; the
    // first pass below consumes the originals destructively.
    let controls_copy = controls.clone();
    rec.finish()?;

    let mut gdlg_header = format!("'GDLG' {id} {dialog_type}");
    if !flags.is_empty() {
        gdlg_header.push_str(&format!(" | {}", flags.join(" | ")));
    }
    gdlg_header.push_str(&format!(" 0 0 {} {} {} {{", size.w, size.h, escape_string(&name.text)));

    let mut lines = vec![gdlg_header];
    for control in controls {
        let (control_type, value) = single_key(control)?;
        lines.extend(controls::convert_control(ctx, &control_type, value)?);
    }
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push(format!("'DLGH' {id} {} {{", escape_string(&anchor)));
    let mut used_anchors = collect_declared_anchors(&controls_copy)?;
    for control in controls_copy {
        let (control_type, value) = single_key(control)?;
        lines.extend(dlgh_entry(&control_type, value, &mut used_anchors)?);
    }
    lines.push("}".to_string());

    match condition {
        Some(c) => {
            let mut wrapped = Vec::with_capacity(lines.len() + 2);
            wrapped.push(format_if_line(&c)?);
            wrapped.append(&mut lines);
            wrapped.push(format_endif_line().to_string());
            Ok(wrapped)
        }
        None => Ok(lines),
    }
}

/// Unwraps a control's single-key `{<ControlType>: {...}}` mapping.
fn single_key(value: Value) -> Result<(String, Value)> {
    match value {
        Value::Object(mut map) if map.len() == 1 => {
            let key = map.keys().next().unwrap().clone();
            let inner = map.remove(&key).unwrap();
            Ok((key, inner))
        }
        other => Err(GrcError::TypeMismatch {
            record: "GDLG.controls[]".to_string(),
            field: "<control>",
            expected: "single-key object",
            actual: grc_spec::model::json_kind(&other),
        }),
    }
}

const GROW: &[(&str, &str)] = &[("no", "noGrow"), ("h", "hGrow"), ("v", "vGrow"), ("hv", "grow")];
const CLOSE: &[(&str, &str)] = &[("yes", "close"), ("no", "noClose")];
const CAPTION: &[(&str, &str)] = &[("top", "topCaption"), ("left", "leftCaption"), ("no", "noCaption")];
const MINIMIZE: &[(&str, &str)] = &[("no", "noMinimize"), ("yes", "minimize")];
const MAXIMIZE: &[(&str, &str)] = &[("no", "noMaximize"), ("yes", "maximize")];
const FRAME: &[(&str, &str)] = &[("normal", "normalFrame"), ("thick", "thickFrame"), ("no", "noFrame")];

fn convert_grow(value: &str) -> Result<&'static str> {
    grc_spec::property::map_property("GDLG", "grow", value, GROW)
}
fn convert_close(value: &str) -> Result<&'static str> {
    grc_spec::property::map_property("GDLG", "close", value, CLOSE)
}
fn convert_caption(value: &str) -> Result<&'static str> {
    grc_spec::property::map_property("GDLG", "caption", value, CAPTION)
}
fn convert_minimize(value: &str) -> Result<&'static str> {
    grc_spec::property::map_property("GDLG", "minimize", value, MINIMIZE)
}
fn convert_maximize(value: &str) -> Result<&'static str> {
    grc_spec::property::map_property("GDLG", "maximize", value, MAXIMIZE)
}
fn convert_frame(value: &str) -> Result<&'static str> {
    grc_spec::property::map_property("GDLG", "frame", value, FRAME)
}

/// Flags legal for each dialog `type`, consumed in the fixed order the GRC
/// output lists them (§4.5). Every flag is a string enum, not a boolean —
/// whether a token is emitted depends on whether the key is *present*, not
/// on its value (an explicit "no" still emits its "off" token, e.g.
/// `noGrow`/`noCaption`). `TabPage` allows none of them: it only rejects an
/// explicit `grow` key and otherwise consumes nothing, leaving any other
/// flag key to surface later as `UnhandledJsonProperty`.
fn dialog_type_flags(dialog_type: &str, rec: &mut JsonRecord) -> Result<Vec<&'static str>> {
    match dialog_type {
        "TabPage" => {
            if rec.contains_key("grow") {
                return Err(GrcError::IllegalStyle(format!(
                    "Illegal grow property for dialog type {dialog_type}"
                )));
            }
            Ok(Vec::new())
        }
        "Modal" => {
            let mut flags = Vec::new();
            let grow = rec.take_opt_string("grow")?.unwrap_or_else(|| "no".to_string());
            flags.push(convert_grow(&grow)?);
            if let Some(caption) = rec.take_opt_string("caption")? {
                let caption = convert_caption(&caption)?;
                if matches!(caption, "topCaption" | "leftCaption") {
                    return Err(GrcError::IllegalStyle(format!(
                        "Illegal caption '{caption}' for dialog type '{dialog_type}'"
                    )));
                }
                flags.push(caption);
            }
            if let Some(frame) = rec.take_opt_string("frame")? {
                flags.push(convert_frame(&frame)?);
            }
            Ok(flags)
        }
        "Modeless" => {
            let mut flags = Vec::new();
            if let Some(grow) = rec.take_opt_string("grow")? {
                flags.push(convert_grow(&grow)?);
            }
            if let Some(caption) = rec.take_opt_string("caption")? {
                flags.push(convert_caption(&caption)?);
            }
            if let Some(close) = rec.take_opt_string("close")? {
                flags.push(convert_close(&close)?);
            }
            if let Some(minimize) = rec.take_opt_string("minimize")? {
                flags.push(convert_minimize(&minimize)?);
            }
            if let Some(maximize) = rec.take_opt_string("maximize")? {
                flags.push(convert_maximize(&maximize)?);
            }
            if let Some(frame) = rec.take_opt_string("frame")? {
                flags.push(convert_frame(&frame)?);
            }
            Ok(flags)
        }
        "Palette" => {
            let mut flags = Vec::new();
            if let Some(grow) = rec.take_opt_string("grow")? {
                flags.push(convert_grow(&grow)?);
            }
            if let Some(caption) = rec.take_opt_string("caption")? {
                flags.push(convert_caption(&caption)?);
            }
            if let Some(close) = rec.take_opt_string("close")? {
                flags.push(convert_close(&close)?);
            }
            if let Some(frame) = rec.take_opt_string("frame")? {
                flags.push(convert_frame(&frame)?);
            }
            Ok(flags)
        }
        other => Err(GrcError::UnsupportedGDLGControlProperty {
            control: "GDLG",
            property: "type",
            value: other.to_string(),
        }),
    }
}

/// Pre-scans the control list for anchors already declared via `helpInfo`,
/// without consuming anything, so synthesized anchors never collide with
/// them regardless of iteration order.
fn collect_declared_anchors(controls: &[Value]) -> Result<HashSet<String>> {
    let mut used = HashSet::new();
    for control in controls {
        let Value::Object(map) = control else {
            continue;
        };
        let Some(inner) = map.values().next() else {
            continue;
        };
        let Some(help_info) = inner.get("helpInfo") else {
            continue;
        };
        match help_info {
            Value::Object(entry) => {
                if let Some(anchor) = entry.get("anchor").and_then(Value::as_str) {
                    used.insert(anchor.to_string());
                }
            }
            Value::Array(entries) => {
                for entry in entries {
                    if let Some(anchor) = entry.get("anchor").and_then(Value::as_str) {
                        used.insert(anchor.to_string());
                    }
                }
            }
            _ => {}
        }
    }
    Ok(used)
}

fn synthesize_anchor(control_type: &str, used: &mut HashSet<String>) -> String {
    let mut k = 0i64;
    loop {
        let candidate = format!("{control_type}_{k}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        k += 1;
    }
}

fn anchor_line(ordinal: String, tooltip: &str, anchor: &str) -> String {
    format!("{ordinal}  {}  {anchor}", pad_left_justify(&escape_string(tooltip), GDLH_TOOLTIP))
}

/// Builds the `DLGH` line(s) for one control, from the untouched copy of its
/// JSON object.
fn dlgh_entry(control_type: &str, value: Value, used: &mut HashSet<String>) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new(format!("{control_type}#?"), value)?;
    let id = rec.take_id()?;
    let condition = rec.take_condition();
    let comment = rec.take_comment();
    let help_info = rec.take("helpInfo");

    let mut body = match help_info {
        None => {
            let anchor = synthesize_anchor(control_type, used);
            vec![anchor_line(id.to_string(), "", &anchor)]
        }
        Some(Value::Object(map)) => {
            let mut item = JsonRecord::new(format!("{control_type}#{id}.helpInfo"), Value::Object(map))?;
            let anchor = item.take_string("anchor")?;
            let tooltip = item.take_opt_string("tooltip")?.unwrap_or_default();
            item.finish()?;
            used.insert(anchor.clone());
            vec![anchor_line(id.to_string(), &tooltip, &anchor)]
        }
        Some(Value::Array(items)) => {
            let mut lines = Vec::new();
            for (idx, item_value) in items.into_iter().enumerate() {
                let mut item =
                    JsonRecord::new(format!("{control_type}#{id}.helpInfo[{idx}]"), item_value)?;
                let item_condition = item.take_condition();
                let item_comment = item.take_comment();
                let anchor = item.take_string("anchor")?;
                let tooltip = item.take_opt_string("tooltip")?.unwrap_or_default();
                item.finish()?;
                used.insert(anchor.clone());

                let ordinal = if idx == 0 { id.to_string() } else { String::new() };
                let mut line = anchor_line(ordinal, &tooltip, &anchor);
                if let Some(c) = &item_comment {
                    line.push_str(&grc_spec::format::format_comment_leading_space(c));
                }

                match item_condition {
                    Some(c) => {
                        lines.push(format_if_line(&c)?);
                        lines.push(line);
                        lines.push(format_endif_line().to_string());
                    }
                    None => lines.push(line),
                }
            }
            lines
        }
        Some(other) => {
            return Err(GrcError::TypeMismatch {
                record: rec.label().to_string(),
                field: "helpInfo",
                expected: "object or array",
                actual: grc_spec::model::json_kind(&other),
            })
        }
    };

    if let (Some(comment), Some(last)) = (comment.as_deref(), body.last_mut()) {
        last.push_str(&grc_spec::format::format_comment_leading_space(comment));
    }

    match condition {
        Some(c) => {
            let mut wrapped = Vec::with_capacity(body.len() + 2);
            wrapped.push(format_if_line(&c)?);
            wrapped.append(&mut body);
            wrapped.push(format_endif_line().to_string());
            Ok(wrapped)
        }
        None => Ok(body),
    }
}
