use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct Module {
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub credits: f64,
    /// Modules are mandatory unless placed in an elective group.
    #[serde(default)]
    pub is_elective: bool,
    #[serde(default)]
    pub mimlos: Vec<Mimlo>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
    /// Keyed `<versionId>_<modality>`.
    #[serde(default)]
    pub effort_hours: BTreeMap<String, f64>,
    #[serde(default)]
    pub reading_list: Vec<ReadingItem>,
}

impl Module {
    #[must_use]
    pub fn new(id: &str, code: &str, title: &str, credits: f64) -> Self {
        Self {
            id: id.to_string(),
            code: code.to_string(),
            title: title.to_string(),
            credits,
            ..Self::default()
        }
    }

    /// Display handle used in flag messages: code, else title, else id.
    #[must_use]
    pub fn display_handle(&self) -> &str {
        if !self.code.trim().is_empty() {
            &self.code
        } else if !self.title.trim().is_empty() {
            &self.title
        } else {
            &self.id
        }
    }
}

/// Module Intended Minimum Learning Outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct Mimlo {
    pub id: String,
    #[serde(default)]
    pub text: String,
}

impl Mimlo {
    #[must_use]
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct Assessment {
    pub id: String,
    /// Assessment kind, e.g. "exam", "project", "continuous".
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Percentage of the module mark.
    #[serde(default)]
    pub weighting: f64,
    #[serde(default)]
    pub mimlo_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ReadingItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub year: String,
    /// "core" or "supplementary".
    #[serde(rename = "type", default)]
    pub kind: String,
}
