//! Dispatch table for the ~50 dialog control variants (§4.6).
//!
//! Every control object carries `#id`, `rect`, optionally `helpInfo`,
//! `#condition`, `#comment`, plus its own fields. This pass (building the
//! `'GDLG'` block) consumes `#id` and `helpInfo` without emitting them —
//! `helpInfo` belongs to the later `DLGH` pass, which works off a separate
//! deep copy of the original control list.

mod buttons;
mod common;
mod edits;
mod icons;
mod misc;
mod numeric_controls;
mod tabs_lists;
mod text_controls;

use serde_json::Value;

use grc_spec::condition::{format_endif_line, format_if_line};
use grc_spec::error::Result;
use grc_spec::{GrcError, JsonRecord};

use crate::ctx::Ctx;

/// Converts one control entry (the single-key `{<ControlType>: {...}}`
/// mapping) into its `#if`/`#endif`-wrapped GRC lines.
pub fn convert_control(ctx: &Ctx, control_type: &str, value: Value) -> Result<Vec<String>> {
    let mut rec = JsonRecord::new(format!("{control_type}#?"), value)?;
    let condition = rec.take_condition();
    let comment = rec.take_comment();
    rec.take_id()?;
    rec.take("helpInfo");

    let mut lines = dispatch(ctx, control_type, &mut rec)?;
    rec.finish()?;

    if let (Some(comment), Some(last)) = (comment.as_deref(), lines.last_mut()) {
        last.push_str(&grc_spec::format::format_comment_leading_space(comment));
    }

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

fn dispatch(ctx: &Ctx, control_type: &str, rec: &mut JsonRecord) -> Result<Vec<String>> {
    use buttons::{button, check_box, radio_button};
    use edits::{length_edit, quantity_edit, rich_edit, text_edit};
    use icons::{
        icon, icon_button, icon_check_box, icon_menu, icon_push_check, icon_push_radio,
        icon_radio_button,
    };
    use misc::{date_control, picture, plain_block, split_button, splitter, user_control, user_item};
    use numeric_controls::{edit_spin, progress_bar, ruler, scroll_bar, single_spin, slider};
    use tabs_lists::{normal_tab, popup_control, sel_list, sel_list_view, sel_tree_view, simple_tab};
    use text_controls::{group_box, static_text};

    match control_type {
        "Button" => button(ctx, rec),
        "CheckBox" => check_box(ctx, rec),
        "RadioButton" => radio_button(ctx, rec),

        "IntEdit" => quantity_edit("IntEdit", rec),
        "AngleEdit" => quantity_edit("AngleEdit", rec),
        "AreaEdit" => quantity_edit("AreaEdit", rec),
        "RealEdit" => quantity_edit("RealEdit", rec),
        "PolarAngleEdit" => quantity_edit("PolarAngleEdit", rec),
        "MMPointEdit" => quantity_edit("MMPointEdit", rec),
        "VolumeEdit" => quantity_edit("VolumeEdit", rec),
        "MMInchEdit" => quantity_edit("MMInchEdit", rec),
        "SAMQuantityEdit" => quantity_edit("SAMQuantityEdit", rec),
        "LengthEdit" => length_edit(ctx, rec),
        "TextEdit" => text_edit("TextEdit", rec),
        "PasswordEdit" => text_edit("PasswordEdit", rec),
        "ShortcutEdit" => text_edit("ShortcutEdit", rec),
        "SearchEdit" => text_edit("SearchEdit", rec),
        "MultiLineEdit" => rich_edit("MultiLineEdit", rec),
        "RichEdit" => rich_edit("RichEdit", rec),
        "UniRichEdit" => rich_edit("UniRichEdit", rec),

        "LeftText" => static_text("LeftText", rec),
        "RightText" => static_text("RightText", rec),
        "CenterText" => static_text("CenterText", rec),
        "GroupBox" => group_box(rec),

        "Icon" => icon(rec),
        "IconButton" => icon_button(ctx, rec),
        "IconCheckBox" => icon_check_box(rec),
        "IconPushCheck" => icon_push_check(ctx, rec),
        "IconRadioButton" => icon_radio_button(rec),
        "IconPushRadio" => icon_push_radio(ctx, rec),
        "IconMenuCheck" => icon_menu(ctx, "IconMenuCheck", rec),
        "IconMenuRadio" => icon_menu(ctx, "IconMenuRadio", rec),

        "NormalTab" => normal_tab(rec),
        "SimpleTab" => simple_tab(rec),
        "PopupControl" => popup_control(rec),
        "SingleSelList" => sel_list("SingleSelList", rec),
        "MultiSelList" => sel_list("MultiSelList", rec),
        "SingleSelListView" => sel_list_view("SingleSelListView", rec),
        "MultiSelListView" => sel_list_view("MultiSelListView", rec),
        "SingleSelTreeView" => sel_tree_view("SingleSelTreeView", rec),
        "MultiSelTreeView" => sel_tree_view("MultiSelTreeView", rec),

        "SingleSpin" => single_spin(rec),
        "EditSpin" => edit_spin(rec),
        "Slider" => slider(rec),
        "ScrollBar" => scroll_bar(rec),
        "ProgressBar" => progress_bar(rec),
        "Ruler" => ruler(rec),

        "Picture" => picture(rec),
        "UserControl" => user_control(ctx, rec),
        "UserItem" => user_item(rec),
        "Browser" => plain_block("Browser", rec),
        "Separator" => plain_block("Separator", rec),
        "Splitter" => splitter(rec),
        "TabBar" => plain_block("TabBar", rec),
        "DateControl" => date_control(rec),
        "TimeControl" => plain_block("TimeControl", rec),
        "SplitButton" => split_button(ctx, rec),

        other => Err(GrcError::UnsupportedGDLGControl(other.to_string())),
    }
}
