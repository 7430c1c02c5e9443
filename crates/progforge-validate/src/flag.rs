use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Blocking for gated actions (e.g. a "fully complete" export).
    Error,
    /// Advisory only.
    Warn,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
        }
    }
}

/// Wizard step keys. Clicking a rendered flag navigates to the step whose
/// key matches, so these strings are a contract with the wizard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum WizardStep {
    Identity,
    Outcomes,
    Versions,
    Stages,
    Structure,
    Electives,
    Mimlos,
    EffortHours,
    Assessments,
    ReadingLists,
    Schedule,
    Mapping,
    Traceability,
    Snapshot,
}

impl WizardStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Outcomes => "outcomes",
            Self::Versions => "versions",
            Self::Stages => "stages",
            Self::Structure => "structure",
            Self::Electives => "electives",
            Self::Mimlos => "mimlos",
            Self::EffortHours => "effort-hours",
            Self::Assessments => "assessments",
            Self::ReadingLists => "reading-lists",
            Self::Schedule => "schedule",
            Self::Mapping => "mapping",
            Self::Traceability => "traceability",
            Self::Snapshot => "snapshot",
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One validation finding. Serialized as `{"type","msg","step"}` for the
/// flags panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct Flag {
    #[serde(rename = "type")]
    pub severity: Severity,
    #[serde(rename = "msg")]
    pub message: String,
    pub step: WizardStep,
}

impl Flag {
    #[must_use]
    pub fn error(message: impl Into<String>, step: WizardStep) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            step,
        }
    }

    #[must_use]
    pub fn warn(message: impl Into<String>, step: WizardStep) -> Self {
        Self {
            severity: Severity::Warn,
            message: message.into(),
            step,
        }
    }
}
