//! Tab strips, popups, and the list/list-view/tree-view families.

use grc_spec::error::Result;
use grc_spec::JsonRecord;

use super::common::{line_head, quoted, take_font_spec, take_rect};

/// `NormalTab`: `rect` then per item `pageId iconId "text"`.
pub fn normal_tab(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let items = rec.take_array("items")?;

    let mut lines = vec![format!("{} {{", line_head("NormalTab", rect))];
    for item in items {
        let mut item_rec = JsonRecord::new(format!("{}.items", rec.label()), item)?;
        let page_id = item_rec.take_i64("pageId")?;
        let icon_id = grc_spec::format::map_icon_id(&item_rec.take_string("iconId")?);
        let text = grc_spec::LocalizableString::from_value(
            item_rec.label(),
            item_rec.take_required("text")?,
        )?;
        item_rec.finish()?;
        lines.push(format!("  {page_id} {icon_id} {}", quoted(&text.text)));
    }
    lines.push("}".to_string());
    Ok(lines)
}

/// `SimpleTab`: `rect frame` then per item `pageId`.
pub fn simple_tab(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let frame = rec.take_bool("frame", false)?;
    let items = rec.take_array("items")?;

    let mut lines = vec![format!(
        "{} {} {{",
        line_head("SimpleTab", rect),
        if frame { "Frame" } else { "NoFrame" }
    )];
    for item in items {
        let mut item_rec = JsonRecord::new(format!("{}.items", rec.label()), item)?;
        let page_id = item_rec.take_i64("pageId")?;
        item_rec.finish()?;
        lines.push(format!("  {page_id}"));
    }
    lines.push("}".to_string());
    Ok(lines)
}

/// `PopupControl`: `rect listHeight textOffset` then per item `iconId
/// "text"`.
pub fn popup_control(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let list_height = rec.take_i64("listHeight")?;
    let text_offset = rec.take_i64("textOffset")?;
    let items = rec.take_array("items")?;

    let mut lines = vec![format!(
        "{} {list_height} {text_offset} {{",
        line_head("PopupControl", rect)
    )];
    for item in items {
        let mut item_rec = JsonRecord::new(format!("{}.items", rec.label()), item)?;
        let icon_id = grc_spec::format::map_icon_id(&item_rec.take_string("iconId")?);
        let text = grc_spec::LocalizableString::from_value(
            item_rec.label(),
            item_rec.take_required("text")?,
        )?;
        item_rec.finish()?;
        lines.push(format!("  {icon_id} {}", quoted(&text.text)));
    }
    lines.push("}".to_string());
    Ok(lines)
}

/// `SingleSelList / MultiSelList`: `rect fontSpec partialItems scroll
/// itemHeight [HasHeader N] [HasFrame]`.
pub fn sel_list(control: &'static str, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let font = take_font_spec(control, rec)?;
    let partial_items = rec.take_bool("partialItems", false)?;
    let scroll = rec.take_bool("scroll", false)?;
    let item_height = rec.take_i64("itemHeight")?;
    let header_count = rec.take_opt_i64("headerCount")?;
    let has_frame = rec.take_bool("frame", false)?;

    let mut line = format!(
        "{} {font} {} {} {item_height}",
        line_head(control, rect),
        bool_tok(partial_items, "PartialItems", "NoPartialItems"),
        bool_tok(scroll, "Scroll", "NoScroll"),
    );
    if let Some(n) = header_count {
        line.push_str(&format!(" HasHeader {n}"));
    }
    if has_frame {
        line.push_str(" HasFrame");
    }
    Ok(vec![line])
}

/// `SingleSelListView / MultiSelListView`: `rect fontSpec imW imH cellW cellH
/// mode [NoScroll] [HasFrame]`.
pub fn sel_list_view(control: &'static str, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let font = take_font_spec(control, rec)?;
    let im_w = rec.take_i64("imageWidth")?;
    let im_h = rec.take_i64("imageHeight")?;
    let cell_w = rec.take_i64("cellWidth")?;
    let cell_h = rec.take_i64("cellHeight")?;
    let mode = rec.take_string("mode")?;
    let scroll = rec.take_bool("scroll", true)?;
    let has_frame = rec.take_bool("frame", false)?;

    let mut line = format!("{} {font} {im_w} {im_h} {cell_w} {cell_h} {mode}", line_head(control, rect));
    if !scroll {
        line.push_str(" NoScroll");
    }
    if has_frame {
        line.push_str(" HasFrame");
    }
    Ok(vec![line])
}

/// `SingleSelTreeView / MultiSelTreeView`: `rect fontSpec normW normH smW smH
/// (labelEdit|noLabelEdit) (dragDrop|noDragDrop) maxCharCount
/// [noRootButton] [HasFrame]`.
pub fn sel_tree_view(control: &'static str, rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let font = take_font_spec(control, rec)?;
    let norm_w = rec.take_i64("normalWidth")?;
    let norm_h = rec.take_i64("normalHeight")?;
    let sm_w = rec.take_i64("smallWidth")?;
    let sm_h = rec.take_i64("smallHeight")?;
    let label_edit = rec.take_bool("labelEdit", false)?;
    let drag_drop = rec.take_bool("dragDrop", false)?;
    let max_char_count = rec.take_i64("maxCharCount")?;
    let root_button = rec.take_bool("rootButton", true)?;
    let has_frame = rec.take_bool("frame", false)?;

    let mut line = format!(
        "{} {font} {norm_w} {norm_h} {sm_w} {sm_h} {} {} {max_char_count}",
        line_head(control, rect),
        bool_tok(label_edit, "labelEdit", "noLabelEdit"),
        bool_tok(drag_drop, "dragDrop", "noDragDrop"),
    );
    if !root_button {
        line.push_str(" noRootButton");
    }
    if has_frame {
        line.push_str(" HasFrame");
    }
    Ok(vec![line])
}

fn bool_tok(value: bool, when_true: &'static str, when_false: &'static str) -> &'static str {
    if value {
        when_true
    } else {
        when_false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normal_tab_emits_item_lines() {
        let mut rec = JsonRecord::new(
            "NormalTab#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 200, "h": 180},
                "items": [{"pageId": 1, "iconId": "-1", "text": "Page 1"}]
            }),
        )
        .unwrap();
        let lines = normal_tab(&mut rec).unwrap();
        assert!(lines[1].contains("1 NoIcon \"Page 1\""));
    }

    #[test]
    fn sel_list_includes_header_when_present() {
        let mut rec = JsonRecord::new(
            "SingleSelList#1",
            json!({
                "rect": {"x": 0, "y": 0, "w": 100, "h": 100}, "font": "smallPlain",
                "partialItems": true, "scroll": true, "itemHeight": 16,
                "headerCount": 2, "frame": true
            }),
        )
        .unwrap();
        let lines = sel_list("SingleSelList", &mut rec).unwrap();
        assert!(lines[0].contains("HasHeader 2"));
        assert!(lines[0].ends_with("HasFrame"));
    }
}
