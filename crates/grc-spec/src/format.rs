//! Token formatting: string escaping, comments, fixed-width columns, and the
//! icon-id symbol table.

/// Fixed column widths used by the aligned converters (§4.1).
pub const MACRO_NAME: usize = 48;
pub const MACRO_VALUE: usize = 8;
pub const GDLG_CONTROL_TYPE: usize = 24;
pub const GDLH_TOOLTIP: usize = 48;
pub const CMND_TEXT: usize = 64;
pub const CMND_ID: usize = 48;
pub const CMND_ICONID: usize = 48;

/// Left-justifies `s` to `width`, padding with spaces. Never truncates.
pub fn pad_left_justify(s: &str, width: usize) -> String {
    if s.len() >= width {
        s.to_string()
    } else {
        format!("{s:<width$}")
    }
}

/// Right-justifies a rectangle coordinate to a 4-char field.
pub fn pad_rect_field(n: i64) -> String {
    format!("{n:>4}")
}

/// Escapes a string as a C-style double-quoted GRC literal. An empty or
/// absent string emits `""`.
///
/// Replacement is order-sensitive: backslashes first, so that the escapes
/// introduced for `\n`/`\t`/`"` are not themselves re-escaped.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Formats a `/* text */` comment, stripping any embedded comment delimiters.
/// Returns an empty string when `text` is empty.
pub fn format_comment(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let cleaned = text.replace("/*", "").replace("*/", "");
    format!("/* {} */", cleaned.trim())
}

/// Same as [`format_comment`] but prefixed with a single leading space, for
/// appending to the end of an already-emitted line.
pub fn format_comment_leading_space(text: &str) -> String {
    let comment = format_comment(text);
    if comment.is_empty() {
        comment
    } else {
        format!(" {comment}")
    }
}

/// `/* [  N] */`, N right-aligned in a 3-char field.
pub fn item_index_comment(n: i64) -> String {
    format!("/* [{n:>3}] */")
}

/// Maps a symbolic icon name (or the legacy `-1`/`"DGNoIcon"` spelling) to its
/// GRC token. Unknown values pass through unchanged, matching `ResConv`'s own
/// tolerance for forward-declared icon ids.
pub fn map_icon_id(value: &str) -> String {
    const TABLE: &[(&str, &str)] = &[
        ("-1", "NoIcon"),
        ("DGNoIcon", "NoIcon"),
        ("DGErrorIcon", "DG_ERROR_ICON"),
        ("DGInfoIcon", "DG_INFORMATION_ICON"),
        ("DGWarningIcon", "DG_WARNING_ICON"),
        ("DGFileIcon", "DG_FILE_ICON"),
        ("DGTextFileIcon", "DG_TEXTFILE_ICON"),
        ("DGFolderIcon", "DG_FOLDER_ICON"),
        ("DGFolderOpenIcon", "DG_FOLDEROPEN_ICON"),
        ("DGMyDocFolderIcon", "DG_MYDOCFOLDER_ICON"),
        ("DGFavoritesIcon", "DG_FAVORITES_ICON"),
        ("DGFloppyIcon", "DG_FLOPPY_ICON"),
        ("DGCDDriveIcon", "DG_CDDRIVE_ICON"),
        ("DGHDDIcon", "DG_HDD_ICON"),
        ("DGNetDriveIcon", "DG_NETDRIVE_ICON"),
        ("DGDesktopIcon", "DG_DESKTOP_ICON"),
        ("DGRecycleBinIcon", "DG_RECYCLEBIN_ICON"),
        ("DGEntireNetworkIcon", "DG_ENTIRENETWORK_ICON"),
        ("DGFilledLeftIcon", "DG_FILLED_LEFT_ICON"),
        ("DGFilledRightIcon", "DG_FILLED_RIGHT_ICON"),
        ("DGFilledDownIcon", "DG_FILLED_DOWN_ICON"),
        ("DGFishboneLeftIcon", "DG_FISHBONE_LEFT_ICON"),
        ("DGFishboneRightIcon", "DG_FISHBONE_RIGHT_ICON"),
        ("DGFishboneDownIcon", "DG_FISHBONE_DOWN_ICON"),
    ];
    TABLE
        .iter()
        .find(|(from, _)| *from == value)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_empty_is_quotes() {
        assert_eq!(escape_string(""), "\"\"");
    }

    #[test]
    fn escape_order_matters() {
        // A literal backslash-n must become \\n, not \n.
        assert_eq!(escape_string("a\\nb"), "\"a\\\\nb\"");
    }

    #[test]
    fn escape_newline_tab_quote() {
        assert_eq!(escape_string("a\nb\tc\"d"), "\"a\\nb\\tc\\\"d\"");
    }

    #[test]
    fn escape_idempotent_on_plain_text() {
        assert_eq!(escape_string("hello"), "\"hello\"");
    }

    #[test]
    fn comment_strips_delimiters_and_trims() {
        assert_eq!(format_comment("  a /* nested */ b  "), "/* a  b */");
    }

    #[test]
    fn comment_empty_is_empty() {
        assert_eq!(format_comment(""), "");
    }

    #[test]
    fn item_index_right_aligned() {
        assert_eq!(item_index_comment(1), "/* [  1] */");
        assert_eq!(item_index_comment(12), "/* [ 12] */");
        assert_eq!(item_index_comment(123), "/* [123] */");
    }

    #[test]
    fn icon_id_mapping_and_idempotence() {
        assert_eq!(map_icon_id("DGErrorIcon"), "DG_ERROR_ICON");
        assert_eq!(map_icon_id("DG_ERROR_ICON"), "DG_ERROR_ICON");
        assert_eq!(map_icon_id("-1"), "NoIcon");
        assert_eq!(map_icon_id("CustomIcon42"), "CustomIcon42");
    }
}
