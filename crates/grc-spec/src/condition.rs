//! `#condition` tokenization into `#if … #endif` brackets.
//!
//! Valid tokens: `&`, `|`, `(`, `)`, `+NAME`, `-NAME`. Anything else is a hard
//! error — the tokenizer does not pass unknown tokens through, since a silent
//! pass-through would corrupt the emitted `#if`.

use crate::error::{GrcError, Result};

/// Splits a condition string on `&`, `|`, `(`, `)` while keeping the
/// delimiters as their own tokens, trimming whitespace around each piece.
fn tokenize(condition: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in condition.chars() {
        match ch {
            '&' | '|' | '(' | ')' => {
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    tokens.push(trimmed.to_string());
                }
                current.clear();
                tokens.push(ch.to_string());
            }
            _ => current.push(ch),
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
    tokens
}

fn map_token(token: &str) -> Result<String> {
    match token {
        "(" | ")" => Ok(token.to_string()),
        "&" => Ok("&&".to_string()),
        "|" => Ok("||".to_string()),
        t if t.starts_with('+') && t.len() > 1 => Ok(format!("defined ({})", &t[1..])),
        t if t.starts_with('-') && t.len() > 1 => Ok(format!("!defined ({})", &t[1..])),
        other => Err(GrcError::InvalidConditionToken(other.to_string())),
    }
}

/// Renders the `#if <expr>` line for a `#condition` string.
pub fn format_if_line(condition: &str) -> Result<String> {
    let mapped: Result<Vec<String>> = tokenize(condition).iter().map(|t| map_token(t)).collect();
    Ok(format!("#if {}", mapped?.join(" ")))
}

/// The closing bracket line; this is a constant but kept as a function for
/// symmetry with [`format_if_line`] and to give call sites a single place to
/// read "this is the matching #endif".
pub fn format_endif_line() -> &'static str {
    "#endif"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_defined() {
        assert_eq!(format_if_line("+WIN").unwrap(), "#if defined (WIN)");
    }

    #[test]
    fn simple_not_defined() {
        assert_eq!(format_if_line("-MAC").unwrap(), "#if !defined (MAC)");
    }

    #[test]
    fn or_of_two_defines() {
        assert_eq!(
            format_if_line("+WIN|+MAC").unwrap(),
            "#if defined (WIN) || defined (MAC)"
        );
    }

    #[test]
    fn and_with_parens() {
        assert_eq!(
            format_if_line("(+WIN&+X64)|+MAC").unwrap(),
            "#if ( defined (WIN) && defined (X64) ) || defined (MAC)"
        );
    }

    #[test]
    fn unknown_token_is_fatal() {
        assert!(format_if_line("WIN").is_err());
        assert!(format_if_line("+").is_err());
    }
}
