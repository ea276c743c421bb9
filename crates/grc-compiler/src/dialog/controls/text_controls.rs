//! Static text (`LeftText` / `RightText` / `CenterText`) and `GroupBox`.

use grc_spec::error::Result;
use grc_spec::{JsonRecord, LocalizableString};

use super::common::{edge_type, group_style, line_head, quoted, take_font_spec, take_rect, text_styles};

/// `rect fontSpec (vTop|vCenter|vBottom) | (noTrunc|truncEnd|truncMiddle)
/// edgeType "text"`.
pub fn static_text(control: &'static str, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let text_value = rec.take("text").unwrap_or(serde_json::Value::String(String::new()));
    let text = LocalizableString::from_value(rec.label(), text_value)?;
    let font = take_font_spec(control, rec)?;
    let styles = text_styles(control, rec)?;
    let edge = edge_type(control, rec)?;

    Ok(vec![format!(
        "{} {font} {styles} {edge} {}",
        line_head(control, rect),
        quoted(&text.text)
    )])
}

/// `rect fontSpec (Primary|Secondary) "text"`.
pub fn group_box(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let text = LocalizableString::from_value(rec.label(), rec.take_required("text")?)?;
    let style = group_style("GroupBox", &rec.take_string("groupBoxType")?)?;
    let font = take_font_spec("GroupBox", rec)?;

    Ok(vec![format!("{} {font} {style} {}", line_head("GroupBox", rect), quoted(&text.text))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn left_text_emits_alignment_and_truncation() {
        let mut rec = JsonRecord::new(
            "LeftText#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 100, "h": 16}, "font": "smallPlain",
                "alignment": "center", "truncation": "end", "edgeType": "default",
                "text": "Label"
            }),
        )
        .unwrap();
        let lines = static_text("LeftText", &mut rec).unwrap();
        assert!(lines[0].contains("vCenter | truncEnd Default \"Label\""));
    }

    #[test]
    fn static_text_defaults_when_fields_absent() {
        let mut rec = JsonRecord::new(
            "RightText#1",
            json!({"rect": {"x": 0, "y": 0, "w": 100, "h": 16}}),
        )
        .unwrap();
        let lines = static_text("RightText", &mut rec).unwrap();
        assert!(lines[0].contains("LargePlain vTop | noTrunc Default \"\""));
    }

    #[test]
    fn group_box_emits_style() {
        let mut rec = JsonRecord::new(
            "GroupBox#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 100, "h": 80}, "font": "smallBold",
                "groupBoxType": "primary", "text": "Options"
            }),
        )
        .unwrap();
        let lines = group_box(&mut rec).unwrap();
        assert!(lines[0].contains("Primary \"Options\""));
    }
}
