use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// One delivery version of the programme (e.g. full-time, part-time, online),
/// with its own cohort sizing, delivery pattern, and stage structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ProgrammeVersion {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub target_cohort_size: u32,
    #[serde(default)]
    pub number_of_groups: u32,
    #[serde(default)]
    pub delivery_modality: Option<Modality>,
    /// Pattern per modality; only the pattern for the selected modality is
    /// required to total 100%.
    #[serde(default)]
    pub delivery_patterns: BTreeMap<Modality, DeliveryPattern>,
    #[serde(default)]
    pub online_proctored_exams: ProctoredExams,
    #[serde(default)]
    pub online_proctored_exams_notes: String,
    #[serde(default)]
    pub stages: Vec<Stage>,
}

impl ProgrammeVersion {
    #[must_use]
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            ..Self::default()
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Modality {
    #[serde(rename = "f2f")]
    F2f,
    #[serde(rename = "blended")]
    Blended,
    #[serde(rename = "online")]
    Online,
}

impl Modality {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::F2f => "f2f",
            Self::Blended => "blended",
            Self::Online => "online",
        }
    }
}

impl Display for Modality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How contact time splits across delivery channels, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct DeliveryPattern {
    #[serde(default)]
    pub sync_online_pct: f64,
    #[serde(default)]
    pub async_directed_pct: f64,
    #[serde(default)]
    pub on_campus_pct: f64,
}

impl DeliveryPattern {
    #[must_use]
    pub const fn new(sync_online_pct: f64, async_directed_pct: f64, on_campus_pct: f64) -> Self {
        Self {
            sync_online_pct,
            async_directed_pct,
            on_campus_pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum ProctoredExams {
    #[default]
    #[serde(rename = "TBC")]
    Tbc,
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

impl ProctoredExams {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tbc => "TBC",
            Self::Yes => "YES",
            Self::No => "NO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct Stage {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sequence: u32,
    #[serde(default)]
    pub credits_target: f64,
    #[serde(default)]
    pub modules: Vec<StageModuleRef>,
    #[serde(default)]
    pub exit_award: ExitAward,
}

impl Stage {
    #[must_use]
    pub fn new(id: &str, name: &str, sequence: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            sequence,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn display_name(&self, index: usize) -> String {
        if self.name.trim().is_empty() {
            format!("Stage {}", index + 1)
        } else {
            self.name.clone()
        }
    }

    pub fn remove_module(&mut self, module_id: &str) {
        self.modules.retain(|entry| entry.module_id != module_id);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct StageModuleRef {
    pub module_id: String,
    #[serde(default)]
    pub semester: u32,
}

impl StageModuleRef {
    #[must_use]
    pub fn new(module_id: &str, semester: u32) -> Self {
        Self {
            module_id: module_id.to_string(),
            semester,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct ExitAward {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub award_title: String,
}
