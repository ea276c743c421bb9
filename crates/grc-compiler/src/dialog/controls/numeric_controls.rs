//! Numeric-range controls (`SingleSpin / EditSpin / Slider / ScrollBar /
//! ProgressBar`) and `Ruler`. Each variant has its own field set in the
//! ground truth (`GDLGConverter.py` `ConvertSingleSpin`/`ConvertEditSpin`/
//! `ConvertSlider`/`ConvertScrollBar`/`ConvertProgressBar`) — they are not
//! a single shared shape.

use grc_spec::error::Result;
use grc_spec::property::map_property;
use grc_spec::JsonRecord;

use super::common::{line_head, take_rect};

/// `SingleSpin`: `rect minValue maxValue`.
pub fn single_spin(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let min = rec.take_i64("minValue")?;
    let max = rec.take_i64("maxValue")?;
    Ok(vec![format!("{} {min} {max}", line_head("SingleSpin", rect))])
}

/// `EditSpin`: `rect editId`.
pub fn edit_spin(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let edit_id = rec.take_i64("editId")?;
    Ok(vec![format!("{} {edit_id}", line_head("EditSpin", rect))])
}

const SLIDER_STYLES: &[(&str, &str)] = &[("BottomRight", "BottomRight"), ("TopLeft", "TopLeft")];

/// `Slider`: `rect stepValue minValue maxValue sliderStyle`.
pub fn slider(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let step = rec.take_i64("stepValue")?;
    let min = rec.take_i64("minValue")?;
    let max = rec.take_i64("maxValue")?;
    let style_value = rec.take_opt_string("sliderStyle")?.unwrap_or_else(|| "BottomRight".to_string());
    let style = map_property("Slider", "sliderStyle", &style_value, SLIDER_STYLES)?;
    Ok(vec![format!("{} {step} {min} {max} {style}", line_head("Slider", rect))])
}

const PROPORTIONAL: &[(&str, &str)] = &[("yes", "Proportional"), ("no", "Normal")];
const FOCUSABLE: &[(&str, &str)] = &[("yes", "Focusable"), ("no", "NonFocusable")];
const AUTO_SCROLL: &[(&str, &str)] = &[("yes", "AutoScroll"), ("no", "NoAutoScroll")];

/// `ScrollBar`: `rect pageSize minValue maxValue (Proportional|Normal) |
/// (Focusable|NonFocusable) | (AutoScroll|NoAutoScroll)`.
pub fn scroll_bar(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let page_size = rec.take_i64("pageSize")?;
    let min = rec.take_i64("minValue")?;
    let max = rec.take_i64("maxValue")?;

    let proportional_value = rec.take_opt_string("proportional")?.unwrap_or_else(|| "no".to_string());
    let proportional = map_property("ScrollBar", "proportional", &proportional_value, PROPORTIONAL)?;
    let focusable_value = rec.take_opt_string("focusable")?.unwrap_or_else(|| "yes".to_string());
    let focusable = map_property("ScrollBar", "focusable", &focusable_value, FOCUSABLE)?;
    let auto_scroll_value = rec.take_opt_string("autoScroll")?.unwrap_or_else(|| "yes".to_string());
    let auto_scroll = map_property("ScrollBar", "autoScroll", &auto_scroll_value, AUTO_SCROLL)?;

    Ok(vec![format!(
        "{} {page_size} {min} {max} {proportional} | {focusable} | {auto_scroll}",
        line_head("ScrollBar", rect)
    )])
}

const PROGRESS_BAR_FRAMES: &[(&str, &str)] =
    &[("staticEdge", "StaticEdge"), ("clientEdge", "ClientEdge"), ("modalFrame", "ModalFrame")];

/// `ProgressBar`: `rect minValue maxValue frameType`, `frameType` defaulting
/// to `staticEdge` (a different key and default from the general `edgeType`).
pub fn progress_bar(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let min = rec.take_i64("minValue")?;
    let max = rec.take_i64("maxValue")?;
    let frame_value = rec.take_opt_string("frameType")?.unwrap_or_else(|| "staticEdge".to_string());
    let frame = map_property("ProgressBar", "frameType", &frame_value, PROGRESS_BAR_FRAMES)?;
    Ok(vec![format!("{} {min} {max} {frame}", line_head("ProgressBar", rect))])
}

const RULER_TYPES: &[(&str, &str)] = &[("editor", "editor"), ("window", "window"), ("table", "table")];

/// `Ruler`: `rect rulerType [editId]`. `editId` is present only when
/// `rulerType` is `editor` or `table`.
pub fn ruler(rec: &mut JsonRecord) -> Result<Vec<String>> {
    let rect = take_rect(rec)?;
    let ruler_type_value = rec.take_string("rulerType")?;
    let ruler_type = map_property("Ruler", "rulerType", &ruler_type_value, RULER_TYPES)?;

    let edit_id = if matches!(ruler_type, "editor" | "table") {
        Some(rec.take_i64("editId")?)
    } else {
        None
    };

    let mut line = format!("{} {ruler_type}", line_head("Ruler", rect));
    if let Some(edit_id) = edit_id {
        line.push(' ');
        line.push_str(&edit_id.to_string());
    }
    Ok(vec![line])
}
