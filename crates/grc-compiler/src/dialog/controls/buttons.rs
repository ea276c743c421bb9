//! `Button`, `CheckBox`, `RadioButton`.

use grc_spec::error::Result;
use grc_spec::{JsonRecord, LocalizableString};

use crate::ctx::Ctx;

use super::common::{frame_type, line_head, quoted, take_font_spec, take_group_id, take_rect};

/// `rect fontSpec frameType bevelType "text"`. `bevelType` comes from the
/// version-sensitive `appearance` field (§4.6 version-parameterized
/// emission); `frameType` is a plain enumerated property.
pub fn button(ctx: &Ctx, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let font = take_font_spec("Button", rec)?;
    let frame = frame_type("Button", rec)?;
    let appearance = rec.take_opt_string("appearance")?.unwrap_or_else(|| "roundedEdge".to_string());
    let bevel = ctx.bevel_token("Button", &appearance)?;
    let text = LocalizableString::from_value(rec.label(), rec.take_required("text")?)?;

    Ok(vec![format!(
        "{} {font} {frame} {bevel} {}",
        line_head("Button", rect),
        quoted(&text.text)
    )])
}

/// `rect fontSpec [groupId] "text"`.
fn check_or_radio(control: &'static str, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let font = take_font_spec(control, rec)?;
    let group_id = take_group_id(rec)?;
    let text = LocalizableString::from_value(rec.label(), rec.take_required("text")?)?;

    let mut line = format!("{} {font}", line_head(control, rect));
    if let Some(group_id) = group_id {
        line.push(' ');
        line.push_str(&group_id.to_string());
    }
    line.push(' ');
    line.push_str(&quoted(&text.text));
    Ok(vec![line])
}

pub fn check_box(_ctx: &Ctx, rec: &mut JsonRecord) -> Result<Vec<String>> {
    check_or_radio("CheckBox", rec)
}

pub fn radio_button(_ctx: &Ctx, rec: &mut JsonRecord) -> Result<Vec<String>> {
    check_or_radio("RadioButton", rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(value: serde_json::Value) -> JsonRecord {
        JsonRecord::new("Button#1", value).unwrap()
    }

    #[test]
    fn button_emits_bevel_by_version() {
        let input = json!({
            "rect": {"x": 10, "y": 10, "w": 80, "h": 20},
            "font": "smallBold", "frame": "no",
            "appearance": "roundedEdge", "text": "OK"
        });

        let mut r28 = rec(input.clone());
        let lines28 = button(&Ctx::new(28), &mut r28).unwrap();
        assert!(r28.keys().next().is_none());
        assert!(lines28[0].contains("BevelEdge"));
        assert!(lines28[0].contains("noFrame"));

        let mut r29 = rec(input);
        let lines29 = button(&Ctx::new(29), &mut r29).unwrap();
        assert!(lines29[0].contains("RoundedEdge"));
    }

    #[test]
    fn button_defaults_frame_and_appearance() {
        let mut r = rec(json!({
            "rect": {"x": 0, "y": 0, "w": 10, "h": 10},
            "text": "OK"
        }));
        let lines = button(&Ctx::new(29), &mut r).unwrap();
        assert!(lines[0].contains("LargePlain"));
        assert!(lines[0].contains(" frame "));
        assert!(lines[0].contains("RoundedEdge"));
    }

    #[test]
    fn radio_button_includes_group_id() {
        let mut r = rec(json!({
            "rect": {"x": 0, "y": 0, "w": 10, "h": 10},
            "font": "smallPlain", "groupId": 3, "text": "A"
        }));
        let lines = radio_button(&Ctx::new(29), &mut r).unwrap();
        assert!(lines[0].contains(" 3 \"A\""));
    }

    #[test]
    fn check_box_without_group_id() {
        let mut r = rec(json!({
            "rect": {"x": 0, "y": 0, "w": 10, "h": 10},
            "font": "smallPlain", "text": "A"
        }));
        let lines = check_box(&Ctx::new(29), &mut r).unwrap();
        assert!(lines[0].ends_with("\"A\""));
    }
}
