//! Numeric and text edit fields: the `IntEdit` family, `LengthEdit`,
//! `TextEdit` family, and the rich/multi-line edit family.

use grc_spec::error::Result;
use grc_spec::JsonRecord;

use crate::ctx::Ctx;

use super::common::{line_head, quoted, take_flags_joined, take_font_spec, take_rect};

const NUMERIC_EDIT_STYLES: &[(&str, &str)] =
    &[("changeFont", "ChangeFont"), ("frame", "Frame"), ("update", "Update")];

const LENGTH_EDIT_STYLES: &[(&str, &str)] = &[
    ("changeFont", "ChangeFont"),
    ("frame", "Frame"),
    ("update", "Update"),
    ("relative", "Relative"),
    ("readOnly", "ReadOnly"),
];

const RICH_EDIT_STYLES: &[(&str, &str)] = &[
    ("resize", "Resize"),
    ("wrap", "Wrap"),
    ("frame", "Frame"),
    ("readOnly", "ReadOnly"),
];

/// Shared body for `IntEdit / AngleEdit / AreaEdit / RealEdit /
/// PolarAngleEdit / MMPointEdit / VolumeEdit / MMInchEdit`: `rect fontSpec
/// [subType] editStyles "minValue" "maxValue"`. Only `SAMQuantityEdit`
/// carries `subType`.
pub fn quantity_edit(control: &'static str, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let font = take_font_spec(control, rec)?;
    let sub_type = rec.take_opt_string("subType")?;
    let styles = take_flags_joined(rec, "editStyles", control, NUMERIC_EDIT_STYLES)?;
    let min_value = rec.take_string("minValue")?;
    let max_value = rec.take_string("maxValue")?;

    let mut line = format!("{} {font}", line_head(control, rect));
    if let Some(sub_type) = sub_type {
        line.push(' ');
        line.push_str(&sub_type);
    }
    line.push_str(&format!(" {styles} {} {}", quoted(&min_value), quoted(&max_value)));
    Ok(vec![line])
}

/// `rect fontSpec (changeFont|frame|update|relative|readOnly) "minValue"
/// "maxValue"`.
pub fn length_edit(_ctx: &Ctx, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let font = take_font_spec("LengthEdit", rec)?;
    let styles = take_flags_joined(rec, "editStyles", "LengthEdit", LENGTH_EDIT_STYLES)?;
    let min_value = rec.take_string("minValue")?;
    let max_value = rec.take_string("maxValue")?;

    Ok(vec![format!(
        "{} {font} {styles} {} {}",
        line_head("LengthEdit", rect),
        quoted(&min_value),
        quoted(&max_value)
    )])
}

/// `TextEdit / PasswordEdit / ShortcutEdit / SearchEdit`: `rect fontSpec
/// editStyles maxCharCount`.
pub fn text_edit(control: &'static str, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let font = take_font_spec(control, rec)?;
    let styles = take_flags_joined(rec, "editStyles", control, NUMERIC_EDIT_STYLES)?;
    let max_char_count = rec.take_i64("maxCharCount")?;

    Ok(vec![format!("{} {font} {styles} {max_char_count}", line_head(control, rect))])
}

/// `MultiLineEdit / RichEdit / UniRichEdit`: `rect fontSpec styles scroll`.
/// `UniRichEdit` allows `resize|wrap|frame|readOnly`; the plainer editors
/// reuse the numeric edit style table.
pub fn rich_edit(control: &'static str, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let font = take_font_spec(control, rec)?;
    let table = if control == "UniRichEdit" { RICH_EDIT_STYLES } else { NUMERIC_EDIT_STYLES };
    let styles = take_flags_joined(rec, "styles", control, table)?;
    let scroll = rec.take_bool("scroll", false)?;

    Ok(vec![format!(
        "{} {font} {styles} {}",
        line_head(control, rect),
        if scroll { "Scroll" } else { "NoScroll" }
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quantity_edit_with_sub_type() {
        let mut rec = JsonRecord::new(
            "SAMQuantityEdit#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 60, "h": 16}, "font": "smallPlain",
                "subType": "Area", "editStyles": ["changeFont"],
                "minValue": "0", "maxValue": "100"
            }),
        )
        .unwrap();
        let lines = quantity_edit("SAMQuantityEdit", &mut rec).unwrap();
        assert!(lines[0].contains(" Area ChangeFont \"0\" \"100\""));
    }

    #[test]
    fn length_edit_joins_flags() {
        let mut rec = JsonRecord::new(
            "LengthEdit#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 60, "h": 16}, "font": "smallPlain",
                "editStyles": ["frame", "readOnly"], "minValue": "0", "maxValue": "1000"
            }),
        )
        .unwrap();
        let lines = length_edit(&Ctx::new(29), &mut rec).unwrap();
        assert!(lines[0].contains("Frame | ReadOnly"));
    }

    #[test]
    fn text_edit_emits_max_char_count() {
        let mut rec = JsonRecord::new(
            "TextEdit#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 60, "h": 16}, "font": "smallPlain",
                "editStyles": [], "maxCharCount": 255
            }),
        )
        .unwrap();
        let lines = text_edit("TextEdit", &mut rec).unwrap();
        assert!(lines[0].ends_with(" 0 255"));
    }
}
