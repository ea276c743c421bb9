//! One converter module per non-dialog resource kind. `GDLG` is handled
//! separately by [`crate::dialog`] since it expands into two correlated
//! blocks rather than one.

mod acnf;
mod acp0;
mod cmnd;
mod data;
mod dhlp;
mod file;
mod ftgp;
mod ftyp;
mod galr;
mod gcsr;
mod gicn;
mod mdid;
mod strs;
pub mod support;
mod text;

use serde_json::Value;

use grc_spec::error::Result;
use grc_spec::GrcError;

use crate::ctx::Ctx;

/// Converts a single record of the given non-dialog resource kind into its
/// GRC block lines (already `#if`/`#endif`-wrapped if the record carried a
/// `#condition`).
pub fn convert_record(ctx: &Ctx, tag: &str, record: Value) -> Result<Vec<String>> {
    match tag {
        "ACNF" => acnf::convert(ctx, record),
        "ACP0" => acp0::convert(ctx, record),
        "CMND" => cmnd::convert(ctx, record),
        "DATA" => data::convert(ctx, record),
        "DHLP" => dhlp::convert(ctx, record),
        "FILE" => file::convert(ctx, record),
        "FTGP" => ftgp::convert(ctx, record),
        "FTYP" => ftyp::convert(ctx, record),
        "GALR" => galr::convert(ctx, record),
        "GCSR" => gcsr::convert(ctx, record),
        "GICN" => gicn::convert(ctx, record),
        "MDID" => mdid::convert(ctx, record),
        "STRS" => strs::convert(ctx, record),
        "TEXT" => text::convert(ctx, record),
        other => Err(GrcError::UnsupportedResourceType(other.to_string())),
    }
}
