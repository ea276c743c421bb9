//! The top-level driver: preamble, macro dictionary, and dispatch over the
//! document's resource tags in their original order (§4.7).

use std::collections::HashSet;

use serde_json::Value;

use grc_spec::condition::{format_endif_line, format_if_line};
use grc_spec::error::Result;
use grc_spec::format::{pad_left_justify, MACRO_NAME, MACRO_VALUE};
use grc_spec::{GrcError, JsonRecord};

use crate::builder::GrcOutputBuilder;
use crate::ctx::Ctx;
use crate::{dialog, resources};

/// Driver-level configuration (§6), distinct from [`Ctx`] which only carries
/// the version axis the control converters need.
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    pub target_ac_version: u32,
    pub ignored_resource_types: HashSet<String>,
}

/// Walks `document` and returns the assembled GRC text.
pub fn run(document: Value, config: &DriverConfig) -> Result<String> {
    let mut doc = JsonRecord::new("<document>", document)?;
    let ctx = Ctx::new(config.target_ac_version);
    let mut out = GrcOutputBuilder::new();

    out.append_line("#include \"DGDefs.h\"");
    if doc.contains_key("MDID") {
        out.append_line("#include \"MDIDs_modules.h\"");
    }
    out.append_blank();

    if let Some(macros) = doc.take("macroDictionary") {
        emit_macro_dictionary(&mut out, macros)?;
        out.append_blank();
    }

    for tag in doc.keys().map(str::to_string).collect::<Vec<_>>() {
        let Some(value) = doc.take(&tag) else {
            continue;
        };
        if config.ignored_resource_types.contains(&tag) {
            continue;
        }
        let records = match value {
            Value::Array(items) => items,
            other => {
                return Err(GrcError::TypeMismatch {
                    record: "<document>".to_string(),
                    field: "<tag>",
                    expected: "array",
                    actual: grc_spec::model::json_kind(&other),
                })
            }
        };
        for record in records {
            let lines = if tag == "GDLG" {
                dialog::convert(&ctx, record)?
            } else {
                resources::convert_record(&ctx, &tag, record)?
            };
            for line in lines {
                out.append_line(line);
            }
            out.append_blank();
        }
    }

    Ok(out.into_text())
}

fn emit_macro_dictionary(out: &mut GrcOutputBuilder, macros: Value) -> Result<()> {
    let Value::Object(entries) = macros else {
        return Err(GrcError::TypeMismatch {
            record: "<document>".to_string(),
            field: "macroDictionary",
            expected: "object",
            actual: grc_spec::model::json_kind(&macros),
        });
    };

    for (macro_name, spec) in entries {
        let (value, condition) = match spec {
            Value::Object(mut entry) => {
                let value = entry
                    .remove("value")
                    .and_then(|v| v.as_str().map(str::to_string))
                    .ok_or_else(|| GrcError::MissingField {
                        record: format!("macroDictionary.{macro_name}"),
                        field: "value",
                    })?;
                let condition =
                    entry.remove("#condition").and_then(|v| v.as_str().map(str::to_string));
                if !entry.is_empty() {
                    return Err(GrcError::UnhandledJsonProperty {
                        record: format!("macroDictionary.{macro_name}"),
                        keys: entry.keys().cloned().collect(),
                    });
                }
                (value, condition)
            }
            Value::String(s) => (s, None),
            other => {
                return Err(GrcError::TypeMismatch {
                    record: format!("macroDictionary.{macro_name}"),
                    field: "<value>",
                    expected: "string or object",
                    actual: grc_spec::model::json_kind(&other),
                })
            }
        };

        let line = format!(
            "#define {}{}",
            pad_left_justify(&macro_name, MACRO_NAME),
            pad_left_justify(&value, MACRO_VALUE),
        );

        match condition {
            Some(c) => {
                out.append_line(format_if_line(&c)?);
                out.append_line(line);
                out.append_line(format_endif_line());
            }
            None => out.append_line(line),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn emits_preamble_and_mdid_include() {
        let doc = json!({
            "MDID": [{"#id": 1, "name": "Ids", "items": [{"#id": 1, "name": "kFoo"}]}]
        });
        let text = run(doc, &DriverConfig { target_ac_version: 29, ..Default::default() }).unwrap();
        assert!(text.starts_with("#include \"DGDefs.h\"\n#include \"MDIDs_modules.h\"\n\n"));
    }

    #[test]
    fn skips_ignored_resource_types() {
        let doc = json!({
            "FILE": [{"#id": 1, "name": "F", "fileName": "a.bin"}]
        });
        let config = DriverConfig {
            target_ac_version: 29,
            ignored_resource_types: ["FILE".to_string()].into_iter().collect(),
        };
        let text = run(doc, &config).unwrap();
        assert!(!text.contains("'FILE'"));
    }

    #[test]
    fn macro_dictionary_wraps_condition_per_line() {
        let doc = json!({
            "macroDictionary": {
                "kFoo": {"value": "1", "#condition": "+WIN"},
                "kBar": "2"
            }
        });
        let text = run(doc, &DriverConfig { target_ac_version: 29, ..Default::default() }).unwrap();
        assert!(text.contains("#if defined (WIN)\n#define kFoo"));
        assert!(text.contains("#define kBar"));
    }
}
