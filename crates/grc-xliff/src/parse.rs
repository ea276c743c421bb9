//! XLIFF 1.2 parsing.
//!
//! Only the shape described in the component design is read: `<trans-unit
//! id=…>` elements carrying a `<source>` and an optional `<target
//! state=…>`. Everything else in the document (file metadata, `<body>`
//! wrappers, `<group>` nesting, alt-trans) is ignored. Attribute order is
//! never relied upon.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

use grc_spec::GrcError;

/// The XLIFF 1.2 default namespace.
pub const XLIFF_NAMESPACE: &[u8] = b"urn:oasis:names:tc:xliff:document:1.2";

/// `<target state="…">` values that are usable as the translated string.
const USABLE_TARGET_STATES: &[&str] = &["final", "translated", "signed-off", "x-machine-translated"];

/// `dictId -> translated text`.
pub type Dictionary = HashMap<String, String>;

#[derive(Default)]
struct UnitBuilder {
    id: Option<String>,
    source: String,
    target: Option<String>,
    target_state: Option<String>,
    target_seen: bool,
}

/// Parses an XLIFF 1.2 document into a `dictId -> text` dictionary.
pub fn parse_xliff(xml: &str) -> Result<Dictionary, GrcError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut dict = Dictionary::new();
    let mut unit: Option<UnitBuilder> = None;
    // 0 = outside source/target, 1 = inside <source>, 2 = inside <target>
    let mut in_field: u8 = 0;

    loop {
        let (resolved, event) = reader
            .read_resolved_event()
            .map_err(|e| GrcError::Xliff(e.to_string()))?;

        match event {
            Event::Start(ref e) => {
                let local = e.local_name();
                let local = local.as_ref();
                let namespaced = matches!(resolved, ResolveResult::Bound(ns) if ns.as_ref() == XLIFF_NAMESPACE)
                    || matches!(resolved, ResolveResult::Unbound);
                if !namespaced {
                    continue;
                }
                match local {
                    b"trans-unit" => {
                        let mut builder = UnitBuilder::default();
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"id" {
                                builder.id = Some(
                                    attr.decode_and_unescape_value(reader.decoder())
                                        .map_err(|e| GrcError::Xliff(e.to_string()))?
                                        .into_owned(),
                                );
                            }
                        }
                        unit = Some(builder);
                    }
                    b"source" => in_field = 1,
                    b"target" => {
                        in_field = 2;
                        if let Some(ref mut u) = unit {
                            u.target_seen = true;
                            for attr in e.attributes().flatten() {
                                if attr.key.as_ref() == b"state" {
                                    u.target_state = Some(
                                        attr.decode_and_unescape_value(reader.decoder())
                                            .map_err(|e| GrcError::Xliff(e.to_string()))?
                                            .into_owned(),
                                    );
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(ref e) => {
                let text = e
                    .unescape()
                    .map_err(|e| GrcError::Xliff(e.to_string()))?
                    .into_owned();
                if let Some(ref mut u) = unit {
                    match in_field {
                        1 => u.source.push_str(&text),
                        2 => {
                            u.target.get_or_insert_with(String::new).push_str(&text);
                        }
                        _ => {}
                    }
                }
            }
            Event::End(ref e) => {
                let local = e.local_name();
                match local.as_ref() {
                    b"source" if in_field == 1 => in_field = 0,
                    b"target" if in_field == 2 => in_field = 0,
                    b"trans-unit" => {
                        if let Some(u) = unit.take() {
                            if let Some(id) = u.id {
                                let usable = u.target_seen
                                    && u.target.as_deref().is_some_and(|t| !t.is_empty())
                                    && u.target_state
                                        .as_deref()
                                        .is_some_and(|s| USABLE_TARGET_STATES.contains(&s));
                                let text = if usable {
                                    u.target.unwrap()
                                } else {
                                    u.source
                                };
                                dict.insert(id, text);
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xliff(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">
  <file source-language="en" target-language="fr" datatype="plaintext" original="dict">
    <body>
      {body}
    </body>
  </file>
</xliff>"#
        )
    }

    #[test]
    fn usable_target_wins_over_source() {
        let doc = xliff(
            r#"<trans-unit id="g1"><source>Hello</source><target state="final">Bonjour</target></trans-unit>"#,
        );
        let dict = parse_xliff(&doc).unwrap();
        assert_eq!(dict.get("g1"), Some(&"Bonjour".to_string()));
    }

    #[test]
    fn missing_target_falls_back_to_source() {
        let doc = xliff(r#"<trans-unit id="g1"><source>Hello</source></trans-unit>"#);
        let dict = parse_xliff(&doc).unwrap();
        assert_eq!(dict.get("g1"), Some(&"Hello".to_string()));
    }

    #[test]
    fn empty_target_falls_back_to_source() {
        let doc = xliff(
            r#"<trans-unit id="g1"><source>Hello</source><target state="final"></target></trans-unit>"#,
        );
        let dict = parse_xliff(&doc).unwrap();
        assert_eq!(dict.get("g1"), Some(&"Hello".to_string()));
    }

    #[test]
    fn unusable_state_falls_back_to_source() {
        let doc = xliff(
            r#"<trans-unit id="g1"><source>Hello</source><target state="needs-review-translation">Bonjour</target></trans-unit>"#,
        );
        let dict = parse_xliff(&doc).unwrap();
        assert_eq!(dict.get("g1"), Some(&"Hello".to_string()));
    }

    #[test]
    fn all_usable_states_accepted() {
        for state in ["final", "translated", "signed-off", "x-machine-translated"] {
            let doc = xliff(&format!(
                r#"<trans-unit id="g1"><source>Hello</source><target state="{state}">Bonjour</target></trans-unit>"#
            ));
            let dict = parse_xliff(&doc).unwrap();
            assert_eq!(dict.get("g1"), Some(&"Bonjour".to_string()), "state {state}");
        }
    }
}
