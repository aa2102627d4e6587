//! Favourite - the starred flag as it travels through a form

use serde::{Deserialize, Serialize};

/// Form field carrying the requested favourite state
pub const FAVOURITE_FIELD: &str = "favourite";

/// Requested favourite state
///
/// Decoding is an exact match against the literal `"true"`. Every other
/// value, including an absent field, decodes to `false`. This is not a
/// boolean parser: `"TRUE"`, `"1"` and `" true"` are all `false`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Favourite(pub bool);

impl Favourite {
    pub fn decode(raw: Option<&str>) -> Self {
        Self(raw == Some("true"))
    }

    pub fn is_set(self) -> bool {
        self.0
    }

    /// Value a toggle control submits to flip the current state
    pub fn toggled(self) -> Self {
        Self(!self.0)
    }

    pub fn as_form_value(self) -> &'static str {
        if self.0 {
            "true"
        } else {
            "false"
        }
    }
}

impl From<bool> for Favourite {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Favourite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_form_value())
    }
}
