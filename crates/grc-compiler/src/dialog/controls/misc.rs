//! The remaining short-block controls: `Picture`, `UserControl`, `UserItem`,
//! `DateControl`, `Splitter`, `SplitButton`, and the table-driven
//! no-extra-field family (`Browser`, `Separator`, `TabBar`, `TimeControl`).

use grc_spec::error::Result;
use grc_spec::format::map_icon_id;
use grc_spec::property::map_property;
use grc_spec::JsonRecord;

use crate::ctx::Ctx;

use super::common::{edge_type, frame_type, hex_bytes, line_head, take_font_spec, take_rect};

/// `Picture`: `rect iconId edgeType`.
pub fn picture(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let icon_id = map_icon_id(&rec.take_string("iconId")?);
    let edge = edge_type("Picture", rec)?;
    Ok(vec![format!("{} {icon_id} {edge}", line_head("Picture", rect))])
}

/// `UserControl`: `rect ucId [data bytes as 0xHHHH …] frameType bevelType`.
/// `bevelType` comes from the version-sensitive `appearance` field.
pub fn user_control(ctx: &Ctx, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let uc_id = rec.take_i64("ucId")?;
    let data = rec.take_opt_array("data")?;
    let frame = frame_type("UserControl", rec)?;
    let appearance = rec.take_opt_string("appearance")?.unwrap_or_else(|| "roundedEdge".to_string());
    let bevel = ctx.bevel_token("UserControl", &appearance)?;

    let mut line = format!("{} {uc_id}", line_head("UserControl", rect));
    if let Some(data) = data {
        let bytes: Result<Vec<i64>> = data
            .into_iter()
            .map(|v| {
                v.as_i64().ok_or_else(|| grc_spec::GrcError::TypeMismatch {
                    record: rec.label().to_string(),
                    field: "data",
                    expected: "integer",
                    actual: grc_spec::model::json_kind(&v),
                })
            })
            .collect();
        line.push(' ');
        line.push_str(&hex_bytes(&bytes?));
    }
    line.push_str(&format!(" {frame} {bevel}"));
    Ok(vec![line])
}

const PARTIAL_UPDATE: &[(&str, &str)] = &[("yes", "PartialUpdate"), ("no", "")];

/// `UserItem`: `rect [PartialUpdate] edgeType`.
pub fn user_item(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let partial_update_value = rec.take_opt_string("partialUpdate")?.unwrap_or_else(|| "no".to_string());
    let partial_update = map_property("UserItem", "partialUpdate", &partial_update_value, PARTIAL_UPDATE)?;
    let edge = edge_type("UserItem", rec)?;

    let mut line = line_head("UserItem", rect);
    if !partial_update.is_empty() {
        line.push(' ');
        line.push_str(partial_update);
    }
    line.push(' ');
    line.push_str(edge);
    Ok(vec![line])
}

/// The single-line controls that carry no fields beyond their rect:
/// `Browser`, `Separator`, `TabBar`, `TimeControl`.
pub fn plain_block(control: &'static str, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    Ok(vec![line_head(control, rect)])
}

const SPLITTER_TYPES: &[(&str, &str)] = &[("normal", "Normal"), ("transparent", "Transparent")];

/// `Splitter`: `rect (Normal|Transparent)`.
pub fn splitter(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let value = rec.take_opt_string("splitterType")?.unwrap_or_else(|| "normal".to_string());
    let mapped = map_property("Splitter", "splitterType", &value, SPLITTER_TYPES)?;
    Ok(vec![format!("{} {mapped}", line_head("Splitter", rect))])
}

const DATE_CONTROL_TYPES: &[(&str, &str)] = &[("calendar", "Calendar"), ("standard", "Standard")];

/// `DateControl`: `rect (Calendar|Standard)`.
pub fn date_control(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let value = rec.take_opt_string("dateType")?.unwrap_or_else(|| "calendar".to_string());
    let mapped = map_property("DateControl", "dateType", &value, DATE_CONTROL_TYPES)?;
    Ok(vec![format!("{} {mapped}", line_head("DateControl", rect))])
}

/// `SplitButton`: `rect fontSpec bevelType iconId "text"`.
pub fn split_button(ctx: &Ctx, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let text = grc_spec::LocalizableString::from_value(rec.label(), rec.take_required("text")?)?;
    let font = take_font_spec("SplitButton", rec)?;
    let appearance = rec.take_opt_string("appearance")?.unwrap_or_else(|| "roundedEdge".to_string());
    let bevel = ctx.bevel_token("SplitButton", &appearance)?;
    let icon_id = map_icon_id(&rec.take_string("iconId")?);
    Ok(vec![format!(
        "{} {font} {bevel} {icon_id} {}",
        line_head("SplitButton", rect),
        grc_spec::format::escape_string(&text.text)
    )])
}
