//! Generic enumerated-property mapping.
//!
//! Every enumerated control attribute (frame type, bevel type, edge type, …)
//! goes through [`map_property`] against a closed table; an unlisted value is
//! always [`GrcError::UnsupportedGDLGControlProperty`], never passed through.

use crate::error::{GrcError, Result};

/// Looks up `value` in `table`, returning the matching GRC token.
pub fn map_property(
    control: &'static str,
    property: &'static str,
    value: &str,
    table: &[(&str, &str)],
) -> Result<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == value)
        .map(|(_, to)| *to)
        .ok_or_else(|| GrcError::UnsupportedGDLGControlProperty {
            control,
            property,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_TYPES: &[(&str, &str)] = &[("thinFrame", "ThinFrame"), ("thickFrame", "ThickFrame")];

    #[test]
    fn known_value_maps() {
        assert_eq!(
            map_property("Button", "frameType", "thinFrame", FRAME_TYPES).unwrap(),
            "ThinFrame"
        );
    }

    #[test]
    fn unknown_value_is_unsupported_property() {
        let err = map_property("Button", "frameType", "weird", FRAME_TYPES).unwrap_err();
        match err {
            GrcError::UnsupportedGDLGControlProperty { control, property, value } => {
                assert_eq!(control, "Button");
                assert_eq!(property, "frameType");
                assert_eq!(value, "weird");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
