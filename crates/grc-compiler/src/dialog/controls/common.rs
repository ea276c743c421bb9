//! Shared plumbing for the ~50 dialog control converters: rect formatting,
//! the control-type column, and little enum tables reused by more than one
//! control family.

use grc_spec::error::Result;
use grc_spec::format::{escape_string, pad_left_justify, GDLG_CONTROL_TYPE};
use grc_spec::property::map_property;
use grc_spec::{JsonRecord, Rect};

pub fn take_rect(rec: &mut JsonRecord) -> Result<Rect> {
    let value = rec.take_required("rect")?;
    Rect::from_value(rec.label(), value)
}

pub fn rect_cols(rect: Rect) -> String {
    format!(" {:>4}{:>4}{:>4}{:>4}", rect.x, rect.y, rect.w, rect.h)
}

/// `<ControlType padded to 24><rect>`, the common opening of every control
/// line.
pub fn line_head(control_type: &str, rect: Rect) -> String {
    format!("{}{}", pad_left_justify(control_type, GDLG_CONTROL_TYPE), rect_cols(rect))
}

pub fn quoted(s: &str) -> String {
    escape_string(s)
}

const FONT_SPECS: &[(&str, &str)] = &[
    ("extraSmall", "ExtraSmall"),
    ("smallPlain", "SmallPlain"),
    ("smallItalic", "SmallItalic"),
    ("smallUnderline", "SmallUnderline"),
    ("smallBold", "SmallBold"),
    ("smallShadow", "SmallShadow"),
    ("smallOutline", "SmallOutline"),
    ("largePlain", "LargePlain"),
    ("largeItalic", "LargeItalic"),
    ("largeUnderline", "LargeUnderline"),
    ("largeBold", "LargeBold"),
    ("largeShadow", "LargeShadow"),
    ("largeOutline", "LargeOutline"),
];

/// Optional `font` key, defaulting to `largePlain` (§4.6, `ConvertFontSpec`).
pub fn take_font_spec(control: &'static str, rec: &mut JsonRecord) -> Result<&'static str> {
    let value = rec.take_opt_string("font")?.unwrap_or_else(|| "largePlain".to_string());
    map_property(control, "font", &value, FONT_SPECS)
}

pub fn take_group_id(rec: &mut JsonRecord) -> Result<Option<i64>> {
    rec.take_opt_i64("groupId")
}

const FRAME_TYPES: &[(&str, &str)] = &[("no", "noFrame"), ("yes", "frame")];

/// Optional `frame` key, defaulting to `yes` (§4.6, `ConvertFrameType`).
pub fn frame_type(control: &'static str, rec: &mut JsonRecord) -> Result<&'static str> {
    let value = rec.take_opt_string("frame")?.unwrap_or_else(|| "yes".to_string());
    map_property(control, "frame", &value, FRAME_TYPES)
}

const EDGE_TYPES: &[(&str, &str)] = &[
    ("default", "Default"),
    ("staticEdge", "StaticEdge"),
    ("clientEdge", "ClientEdge"),
    ("modalFrame", "ModalFrame"),
];

/// Optional `edgeType` key, defaulting to `default` (§4.6, `ConvertEdgeType`).
pub fn edge_type(control: &'static str, rec: &mut JsonRecord) -> Result<&'static str> {
    let value = rec.take_opt_string("edgeType")?.unwrap_or_else(|| "default".to_string());
    map_property(control, "edgeType", &value, EDGE_TYPES)
}

const ALIGNMENT: &[(&str, &str)] = &[("top", "vTop"), ("center", "vCenter"), ("bottom", "vBottom")];

/// Optional `alignment` key, defaulting to `top` (§4.6, `ConvertAlignment`).
pub fn alignment(control: &'static str, rec: &mut JsonRecord) -> Result<&'static str> {
    let value = rec.take_opt_string("alignment")?.unwrap_or_else(|| "top".to_string());
    map_property(control, "alignment", &value, ALIGNMENT)
}

const TRUNCATION: &[(&str, &str)] = &[
    ("no", "noTrunc"),
    ("end", "truncEnd"),
    ("middle", "truncMiddle"),
];

/// Optional `truncation` key, defaulting to `no` (§4.6, `ConvertTruncation`).
pub fn truncation(control: &'static str, rec: &mut JsonRecord) -> Result<&'static str> {
    let value = rec.take_opt_string("truncation")?.unwrap_or_else(|| "no".to_string());
    map_property(control, "truncation", &value, TRUNCATION)
}

/// `alignment | truncation`, the common text-style pair shared by the
/// static-text family (`ConvertTextStyles`).
pub fn text_styles(control: &'static str, rec: &mut JsonRecord) -> Result<String> {
    Ok(format!("{} | {}", alignment(control, rec)?, truncation(control, rec)?))
}

const GROUP_STYLE: &[(&str, &str)] = &[("primary", "Primary"), ("secondary", "Secondary")];

pub fn group_style(control: &'static str, value: &str) -> Result<&'static str> {
    map_property(control, "groupBoxType", value, GROUP_STYLE)
}

/// Reads an array field of flag names and joins the mapped tokens with
/// `" | "`, e.g. `LengthEdit`'s `changeFont|frame|update|relative|readOnly`
/// or the generic numeric-edit `editStyles`. Returns `"0"` for an empty or
/// absent list, matching the GRC convention for "no flags set".
pub fn take_flags_joined(
    rec: &mut JsonRecord,
    field: &'static str,
    control: &'static str,
    allowed: &[(&str, &str)],
) -> Result<String> {
    let items = rec.take_opt_array(field)?.unwrap_or_default();
    if items.is_empty() {
        return Ok("0".to_string());
    }
    let mut tokens = Vec::with_capacity(items.len());
    for item in items {
        let name = match item {
            serde_json::Value::String(s) => s,
            other => {
                return Err(grc_spec::GrcError::TypeMismatch {
                    record: control.to_string(),
                    field,
                    expected: "string",
                    actual: grc_spec::model::json_kind(&other),
                })
            }
        };
        tokens.push(map_property(control, field, &name, allowed)?);
    }
    Ok(tokens.join(" | "))
}

/// `UserControl`'s inline `data` bytes, the one place the format uses hex
/// rather than decimal (§6).
pub fn hex_bytes(bytes: &[i64]) -> String {
    bytes.iter().map(|b| format!("0x{:04X}", b & 0xFFFF)).collect::<Vec<_>>().join(" ")
}
