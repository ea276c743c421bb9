//! Compiler-wide configuration.

use grc_spec::error::Result;
use grc_spec::GrcError;

/// Configuration accepted by the top-level driver (§6).
#[derive(Debug, Clone)]
pub struct Ctx {
    /// Flips bevel token mapping at the 29 boundary; no other axis in the
    /// control converters is version-sensitive.
    pub target_ac_version: u32,
}

impl Ctx {
    pub fn new(target_ac_version: u32) -> Self {
        Self { target_ac_version }
    }

    /// `roundedEdge`/`squaredEdge` bevel appearance, mapped per the target AC
    /// version. This is the single place the version axis is consulted;
    /// every control that carries a bevel/appearance field calls through
    /// here instead of branching on the version itself.
    pub fn bevel_token(&self, control: &'static str, appearance: &str) -> Result<&'static str> {
        match appearance {
            "roundedEdge" if self.target_ac_version >= 29 => Ok("RoundedEdge"),
            "roundedEdge" => Ok("BevelEdge"),
            "squaredEdge" if self.target_ac_version >= 29 => Ok("SquaredEdge"),
            "squaredEdge" => Ok("RoundedBevelEdge"),
            other => Err(GrcError::UnsupportedGDLGControlProperty {
                control,
                property: "appearance",
                value: other.to_string(),
            }),
        }
    }
}
