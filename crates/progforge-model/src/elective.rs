use serde::{Deserialize, Serialize};

/// A choice point: every definition must be satisfied by picking exactly one
/// of its groups, and each group's module credits should add up to the
/// definition's credit value. Those expectations are surfaced as warnings by
/// the validation engine, never enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ElectiveDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    /// Target credits each sibling group must sum to.
    #[serde(default)]
    pub credits: f64,
    #[serde(default)]
    pub groups: Vec<ElectiveGroup>,
}

impl ElectiveDefinition {
    #[must_use]
    pub fn new(id: &str, name: &str, credits: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            credits,
            ..Self::default()
        }
    }

    /// Label shown in flag messages: `[code] name`, falling back to the
    /// positional default when the name is blank.
    #[must_use]
    pub fn display_label(&self, index: usize) -> String {
        let name = if self.name.trim().is_empty() {
            format!("Definition {}", index + 1)
        } else {
            self.name.clone()
        };
        if self.code.trim().is_empty() {
            name
        } else {
            format!("[{}] {}", self.code, name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ElectiveGroup {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub module_ids: Vec<String>,
}

impl ElectiveGroup {
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn display_label(&self, index: usize) -> String {
        if self.name.trim().is_empty() {
            format!("Group {}", index + 1)
        } else {
            self.name.clone()
        }
    }
}
