use serde::{Deserialize, Serialize};

/// Programme Learning Outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct Plo {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub standard_mappings: Vec<StandardMapping>,
}

impl Plo {
    #[must_use]
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            standard_mappings: Vec::new(),
        }
    }
}

/// Link from a PLO to one criteria/thread cell of an award standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct StandardMapping {
    #[serde(default)]
    pub criteria: String,
    #[serde(default)]
    pub thread: String,
    #[serde(default)]
    pub standard_id: String,
}
