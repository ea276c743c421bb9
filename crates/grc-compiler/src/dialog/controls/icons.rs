//! The `Icon` family: `Icon`, `IconButton`, the push/check/radio variants,
//! and the menu-icon list variants.
//!
//! Each variant has its own field set in the ground truth (`GDLGConverter.py`
//! `ConvertIcon*`) — `IconCheckBox` carries no bevel at all, `IconPushCheck`
//! has a `frame` but no `groupId`, `IconPushRadio`/`IconRadioButton` have
//! `groupId` but no `frame`, and only `IconRadioButton` rejects `appearance`
//! outright.

use grc_spec::error::Result;
use grc_spec::format::map_icon_id;
use grc_spec::{GrcError, JsonRecord};

use crate::ctx::Ctx;

use super::common::{edge_type, frame_type, line_head, take_group_id, take_rect};

fn icon_token(rec: &mut JsonRecord, key: &'static str) -> Result<String> {
    Ok(map_icon_id(&rec.take_string(key)?))
}

fn take_appearance(rec: &mut JsonRecord) -> Result<String> {
    Ok(rec.take_opt_string("appearance")?.unwrap_or_else(|| "roundedEdge".to_string()))
}

/// `Icon`: `rect iconId edgeType`.
pub fn icon(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let icon_id = icon_token(rec, "iconId")?;
    let edge = edge_type("Icon", rec)?;
    Ok(vec![format!("{} {icon_id} {edge}", line_head("Icon", rect))])
}

/// `IconButton`: `rect iconId frameType bevelType`, `bevelType` from the
/// version-sensitive `appearance` field.
pub fn icon_button(ctx: &Ctx, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let icon_id = icon_token(rec, "iconId")?;
    let frame = frame_type("IconButton", rec)?;
    let appearance = take_appearance(rec)?;
    let bevel = ctx.bevel_token("IconButton", &appearance)?;
    Ok(vec![format!("{} {icon_id} {frame} {bevel}", line_head("IconButton", rect))])
}

/// `IconCheckBox`: `rect iconId`, no bevel or frame at all.
pub fn icon_check_box(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let icon_id = icon_token(rec, "iconId")?;
    Ok(vec![format!("{} {icon_id}", line_head("IconCheckBox", rect))])
}

/// `IconPushCheck`: `rect iconId frameType bevelType`.
pub fn icon_push_check(ctx: &Ctx, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let icon_id = icon_token(rec, "iconId")?;
    let frame = frame_type("IconPushCheck", rec)?;
    let appearance = take_appearance(rec)?;
    let bevel = ctx.bevel_token("IconPushCheck", &appearance)?;
    Ok(vec![format!("{} {icon_id} {frame} {bevel}", line_head("IconPushCheck", rect))])
}

/// `IconPushRadio`: `rect [groupId] iconId bevelType`, no frame.
pub fn icon_push_radio(ctx: &Ctx, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let group_id = take_group_id(rec)?;
    let icon_id = icon_token(rec, "iconId")?;
    let appearance = take_appearance(rec)?;
    let bevel = ctx.bevel_token("IconPushRadio", &appearance)?;

    let mut line = format!("{}", line_head("IconPushRadio", rect));
    if let Some(group_id) = group_id {
        line.push(' ');
        line.push_str(&group_id.to_string());
    }
    line.push_str(&format!(" {icon_id} {bevel}"));
    Ok(vec![line])
}

/// `IconRadioButton`: `rect [groupId] iconId`. Rejects `appearance` outright
/// rather than mapping it — there is no bevel position in the output line.
pub fn icon_radio_button(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let group_id = take_group_id(rec)?;
    let icon_id = icon_token(rec, "iconId")?;
    if rec.contains_key("appearance") {
        return Err(GrcError::UnsupportedGDLGControl(
            "IconRadioButton with appearance property is not supported in GRC.".to_string(),
        ));
    }

    let mut line = format!("{}", line_head("IconRadioButton", rect));
    if let Some(group_id) = group_id {
        line.push(' ');
        line.push_str(&group_id.to_string());
    }
    line.push_str(&format!(" {icon_id}"));
    Ok(vec![line])
}

/// `IconMenuCheck / IconMenuRadio`: `rect [groupId] [iconId …] bevelType`.
/// `IconMenuRadio` carries a `groupId` ahead of the icon list; `IconMenuCheck`
/// does not.
pub fn icon_menu(ctx: &Ctx, control: &'static str, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let group_id = if control == "IconMenuRadio" { Some(rec.take_i64("groupId")?) } else { None };

    let items = rec.take_opt_array("items")?.unwrap_or_default();
    let mut tokens = Vec::with_capacity(items.len());
    for item in items {
        let mut item = JsonRecord::new(format!("{}.items[]", rec.label()), item)?;
        tokens.push(icon_token(&mut item, "iconId")?);
        item.take("#comment");
        item.finish()?;
    }

    let appearance = take_appearance(rec)?;
    let bevel = ctx.bevel_token(control, &appearance)?;

    let mut line = format!("{}", line_head(control, rect));
    if let Some(group_id) = group_id {
        line.push(' ');
        line.push_str(&group_id.to_string());
    }
    line.push_str(&format!(" {} {bevel}", tokens.join(" ")));
    Ok(vec![line])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn icon_button_maps_icon_and_frame_and_bevel() {
        let mut rec = JsonRecord::new(
            "IconButton#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 20, "h": 20}, "iconId": "DGErrorIcon",
                "frame": "no", "appearance": "roundedEdge"
            }),
        )
        .unwrap();
        let lines = icon_button(&Ctx::new(28), &mut rec).unwrap();
        assert!(lines[0].starts_with("IconButton"));
        assert!(lines[0].ends_with("DG_ERROR_ICON noFrame BevelEdge"));
    }

    #[test]
    fn icon_check_box_has_no_bevel_position() {
        let mut rec = JsonRecord::new(
            "IconCheckBox#1",
            json!({"rect": {"x": 0, "y": 0, "w": 20, "h": 20}, "iconId": "-1"}),
        )
        .unwrap();
        let lines = icon_check_box(&mut rec).unwrap();
        assert!(lines[0].ends_with("NoIcon"));
    }

    #[test]
    fn icon_radio_button_rejects_appearance() {
        let mut rec = JsonRecord::new(
            "IconRadioButton#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 20, "h": 20}, "iconId": "-1",
                "appearance": "roundedEdge"
            }),
        )
        .unwrap();
        let err = icon_radio_button(&mut rec).unwrap_err();
        assert!(matches!(err, GrcError::UnsupportedGDLGControl(_)));
    }

    #[test]
    fn icon_push_check_accepts_appearance() {
        let mut rec = JsonRecord::new(
            "IconPushCheck#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 20, "h": 20}, "iconId": "-1",
                "appearance": "squaredEdge"
            }),
        )
        .unwrap();
        let lines = icon_push_check(&Ctx::new(29), &mut rec).unwrap();
        assert!(lines[0].ends_with("SquaredEdge"));
    }

    #[test]
    fn icon_push_radio_includes_group_id() {
        let mut rec = JsonRecord::new(
            "IconPushRadio#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 20, "h": 20}, "iconId": "-1", "groupId": 8
            }),
        )
        .unwrap();
        let lines = icon_push_radio(&Ctx::new(29), &mut rec).unwrap();
        assert!(lines[0].contains(" 8 NoIcon "));
    }

    #[test]
    fn icon_menu_check_joins_ids_without_group_id() {
        let mut rec = JsonRecord::new(
            "IconMenuCheck#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 20, "h": 20},
                "items": [{"iconId": "-1"}, {"iconId": "DGWarningIcon"}]
            }),
        )
        .unwrap();
        let lines = icon_menu(&Ctx::new(29), "IconMenuCheck", &mut rec).unwrap();
        assert!(lines[0].contains("NoIcon DG_WARNING_ICON RoundedEdge"));
    }

    #[test]
    fn icon_menu_radio_includes_group_id() {
        let mut rec = JsonRecord::new(
            "IconMenuRadio#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 20, "h": 20}, "groupId": 8,
                "items": [{"iconId": "-1"}]
            }),
        )
        .unwrap();
        let lines = icon_menu(&Ctx::new(29), "IconMenuRadio", &mut rec).unwrap();
        assert!(lines[0].contains(" 8 NoIcon RoundedEdge"));
    }
}
