#![forbid(unsafe_code)]
//! Validation and completion scoring for programme definitions.
//!
//! Two independent signals are computed from the same `Programme` record:
//!
//! - [`validate_programme`] walks the whole aggregate and emits an ordered
//!   list of [`Flag`]s (severity, verbatim message, owning wizard step);
//! - [`completion_percent`] counts ten coarse readiness checks into a 0-100
//!   score.
//!
//! The two rule sets deliberately diverge: a programme can score 100% and
//! still carry warning flags. Both functions are pure and non-mutating, safe
//! to call on every edit.

mod flag;
mod helpers;
mod rules;
mod score;

pub use flag::{Flag, Severity, WizardStep};
pub use helpers::{default_pattern_for, sum_pattern, sum_stage_credits};
pub use rules::validate_programme;
pub use score::{completion_percent, COMPLETION_CHECK_COUNT};

pub const CRATE_NAME: &str = "progforge-validate";
