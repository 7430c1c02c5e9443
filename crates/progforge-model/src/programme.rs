use crate::elective::ElectiveDefinition;
use crate::module::Module;
use crate::outcome::Plo;
use crate::version::ProgrammeVersion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Serialized documents at older versions are upgraded by the store crate
/// before they are decoded into this model.
pub const CURRENT_SCHEMA_VERSION: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// Root aggregate for one programme submission.
///
/// All collections default to empty and all numbers default to zero, so a
/// freshly started (or partially filled) document always decodes. Nothing
/// here is required to be internally consistent; the validation engine is
/// responsible for surfacing gaps as flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct Programme {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub award_type: String,
    #[serde(default)]
    pub award_type_is_other: bool,
    /// NFQ level 6-9; zero means not yet entered.
    #[serde(default)]
    pub nfq_level: u32,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub total_credits: f64,
    /// Parallel to `award_standard_names`, index-aligned.
    #[serde(default)]
    pub award_standard_ids: Vec<String>,
    #[serde(default)]
    pub award_standard_names: Vec<String>,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub plos: Vec<Plo>,
    /// PLO id -> MIMLO ids covering it.
    #[serde(default)]
    pub plo_to_mimlos: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub elective_definitions: Vec<ElectiveDefinition>,
    #[serde(default)]
    pub versions: Vec<ProgrammeVersion>,
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
}

fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

impl Default for Programme {
    fn default() -> Self {
        Self {
            title: String::new(),
            award_type: String::new(),
            award_type_is_other: false,
            nfq_level: 0,
            school: String::new(),
            total_credits: 0.0,
            award_standard_ids: Vec::new(),
            award_standard_names: Vec::new(),
            modules: Vec::new(),
            plos: Vec::new(),
            plo_to_mimlos: BTreeMap::new(),
            elective_definitions: Vec::new(),
            versions: Vec::new(),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }
}

impl Programme {
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            schema_version: CURRENT_SCHEMA_VERSION,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    pub fn check_invariants(&self) -> Result<(), ValidationError> {
        if self.award_standard_ids.len() != self.award_standard_names.len() {
            return Err(ValidationError(format!(
                "award standard id/name arrays must be index-aligned ({} ids, {} names)",
                self.award_standard_ids.len(),
                self.award_standard_names.len()
            )));
        }
        Ok(())
    }

    /// Removes a module and every dangling reference to it: its MIMLOs from
    /// the PLO mapping, its id from elective groups and stage module lists.
    pub fn remove_module(&mut self, module_id: &str) {
        let removed_mimlos: Vec<String> = self
            .modules
            .iter()
            .filter(|m| m.id == module_id)
            .flat_map(|m| m.mimlos.iter().map(|lo| lo.id.clone()))
            .collect();
        self.modules.retain(|m| m.id != module_id);
        for mimlo_ids in self.plo_to_mimlos.values_mut() {
            mimlo_ids.retain(|id| !removed_mimlos.contains(id));
        }
        for definition in &mut self.elective_definitions {
            for group in &mut definition.groups {
                group.module_ids.retain(|id| id != module_id);
            }
        }
        for version in &mut self.versions {
            for stage in &mut version.stages {
                stage.modules.retain(|entry| entry.module_id != module_id);
            }
        }
    }

    pub fn remove_plo(&mut self, plo_id: &str) {
        self.plos.retain(|plo| plo.id != plo_id);
        self.plo_to_mimlos.remove(plo_id);
    }

    pub fn remove_version(&mut self, version_id: &str) {
        self.versions.retain(|v| v.id != version_id);
    }

    pub fn remove_elective_definition(&mut self, definition_id: &str) {
        self.elective_definitions.retain(|d| d.id != definition_id);
    }
}
