#![forbid(unsafe_code)]
//! Programme model SSOT.
//!
//! Every record a QQI programme submission is built from lives here: the
//! `Programme` root aggregate, its modules, learning outcomes, elective
//! structure, and delivery versions. The model is plain data with serde
//! round-trip; all judgement about it belongs to `progforge-validate`.

mod elective;
mod module;
mod outcome;
mod programme;
mod version;

pub use elective::{ElectiveDefinition, ElectiveGroup};
pub use module::{Assessment, Mimlo, Module, ReadingItem};
pub use outcome::{Plo, StandardMapping};
pub use programme::{Programme, ValidationError, CURRENT_SCHEMA_VERSION};
pub use version::{
    DeliveryPattern, ExitAward, Modality, ProctoredExams, ProgrammeVersion, Stage, StageModuleRef,
};

pub const CRATE_NAME: &str = "progforge-model";
