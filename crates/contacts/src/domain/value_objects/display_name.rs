//! DisplayName - heading text for a contact

use serde::{Deserialize, Serialize};

/// Placeholder shown when a contact has neither first nor last name
pub const NO_NAME_PLACEHOLDER: &str = "No name";

/// Heading text for a contact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum DisplayName {
    /// `"<first> <last>"`, always joined by exactly one space
    Named(String),
    NoName,
}

impl DisplayName {
    pub fn from_parts(first: Option<&str>, last: Option<&str>) -> Self {
        let first = first.unwrap_or_default();
        let last = last.unwrap_or_default();

        if first.is_empty() && last.is_empty() {
            Self::NoName
        } else {
            Self::Named(format!("{} {}", first, last))
        }
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayName::Named(name) => write!(f, "{}", name),
            DisplayName::NoName => write!(f, "{}", NO_NAME_PLACEHOLDER),
        }
    }
}
