//! Converts a parsed Archicad Add-On resource JSON document into GRC source
//! text (§1–§2).
//!
//! [`compile`] is the single public entry point: translate (if XLIFF inputs
//! are given), then walk the document and dispatch every record to its
//! resource or dialog-control converter.

pub mod builder;
pub mod ctx;
pub mod dialog;
pub mod driver;
pub mod resources;

use serde_json::Value;

use grc_spec::error::Result;

pub use ctx::Ctx;
pub use driver::DriverConfig;

/// Optional translation inputs: a child XLIFF (required to translate at
/// all) and an optional parent XLIFF it overlays onto (§4.3).
#[derive(Debug, Clone, Default)]
pub struct TranslationInputs<'a> {
    pub child_xliff: Option<&'a str>,
    pub parent_xliff: Option<&'a str>,
}

/// Translates (if requested) and compiles `document` into GRC text.
pub fn compile(
    mut document: Value,
    config: &DriverConfig,
    translation: &TranslationInputs<'_>,
) -> Result<String> {
    if let Some(child_xml) = translation.child_xliff {
        let child_dict = grc_xliff::parse_xliff(child_xml)?;
        let parent_dict = translation.parent_xliff.map(grc_xliff::parse_xliff).transpose()?;
        let dict = grc_xliff::merge_dictionaries(parent_dict.as_ref(), &child_dict);
        grc_xliff::substitute_into_json(&mut document, &dict);
    }

    driver::run(document, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compiles_a_strs_record_without_translation() {
        let document = json!({
            "STRS": [{
                "#id": 32500, "name": "Greetings",
                "items": [{"#id": 1, "text": "Hi"}, {"#id": 2, "text": "Bye"}]
            }]
        });
        let text = compile(
            document,
            &DriverConfig { target_ac_version: 29, ..Default::default() },
            &TranslationInputs::default(),
        )
        .unwrap();
        assert!(text.contains("'STR#' 32500 \"Greetings\" {"));
        assert!(text.contains("/* [  1] */ \"Hi\""));
        assert!(text.contains("/* [  2] */ \"Bye\""));
    }

    #[test]
    fn translates_before_converting() {
        let document = json!({
            "FILE": [{"#id": 1, "name": {"str": "  Original  ", "dictId": "g1"}, "fileName": "a.bin"}]
        });
        let xliff = r#"<?xml version="1.0"?>
<xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">
  <file><body>
    <trans-unit id="g1">
      <source>  Original  </source>
      <target state="translated">  Translated  </target>
    </trans-unit>
  </body></file>
</xliff>"#;
        let text = compile(
            document,
            &DriverConfig { target_ac_version: 29, ..Default::default() },
            &TranslationInputs { child_xliff: Some(xliff), parent_xliff: None },
        )
        .unwrap();
        assert!(text.contains("  Translated  "));
    }
}
