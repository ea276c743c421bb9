//! Whitespace-preserving substitution of translated strings into JSON.

use serde_json::Value;

use crate::parse::Dictionary;

/// Splits `s` into `(leading_whitespace, trailing_whitespace)` around its
/// non-whitespace core. If `s` is entirely whitespace, all of it is
/// attributed to the leading half.
fn split_whitespace(s: &str) -> (&str, &str) {
    let trimmed_start = s.trim_start();
    if trimmed_start.is_empty() {
        return (s, "");
    }
    let leading_len = s.len() - trimmed_start.len();
    let trimmed = trimmed_start.trim_end();
    let trailing_len = trimmed_start.len() - trimmed.len();
    (&s[..leading_len], &s[s.len() - trailing_len..])
}

/// Recursively walks `value`, replacing `str` wherever a mapping carries both
/// `dictId` and `str`, preserving the original leading/trailing whitespace of
/// `str`. Mappings whose `dictId` is not in `dict` are left untouched.
pub fn substitute_into_json(value: &mut Value, dict: &Dictionary) {
    if let Value::Object(map) = value {
        let dict_id = map.get("dictId").and_then(Value::as_str).map(str::to_string);
        if let Some(dict_id) = dict_id {
            if let Some(translated) = dict.get(&dict_id) {
                if let Some(Value::String(original)) = map.get("str") {
                    let (leading, trailing) = split_whitespace(original);
                    let replacement = format!("{leading}{}{trailing}", translated.replace("\\n", "\n"));
                    map.insert("str".to_string(), Value::String(replacement));
                }
            }
        }
    }

    match value {
        Value::Object(map) => {
            for v in map.values_mut() {
                substitute_into_json(v, dict);
            }
        }
        Value::Array(items) => {
            for v in items {
                substitute_into_json(v, dict);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dict(pairs: &[(&str, &str)]) -> Dictionary {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn preserves_leading_and_trailing_whitespace() {
        let mut value = json!({"str": "   Hello\n", "dictId": "g1"});
        substitute_into_json(&mut value, &dict(&[("g1", "Bonjour")]));
        assert_eq!(value["str"], "   Bonjour\n");
    }

    #[test]
    fn all_whitespace_attributes_to_leading() {
        let mut value = json!({"str": "   ", "dictId": "g1"});
        substitute_into_json(&mut value, &dict(&[("g1", "X")]));
        assert_eq!(value["str"], "   X");
    }

    #[test]
    fn missing_dict_id_leaves_value_unchanged() {
        let mut value = json!({"str": "Hello", "dictId": "missing"});
        substitute_into_json(&mut value, &dict(&[("g1", "Bonjour")]));
        assert_eq!(value["str"], "Hello");
    }

    #[test]
    fn recurses_into_nested_structures() {
        let mut value = json!({
            "controls": [
                {"Button": {"name": {"str": "Go", "dictId": "g1"}}}
            ]
        });
        substitute_into_json(&mut value, &dict(&[("g1", "Allez")]));
        assert_eq!(value["controls"][0]["Button"]["name"]["str"], "Allez");
    }

    #[test]
    fn translated_literal_backslash_n_becomes_newline() {
        let mut value = json!({"str": "x", "dictId": "g1"});
        substitute_into_json(&mut value, &dict(&[("g1", "line1\\nline2")]));
        assert_eq!(value["str"], "line1\nline2");
    }
}
