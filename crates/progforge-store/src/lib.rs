#![forbid(unsafe_code)]
//! File-backed persistence for programme definitions.
//!
//! Documents are stored as canonical (key-sorted, pretty) JSON. Loading runs
//! the schema migration chain on the raw JSON value before the typed decode,
//! so documents written by any earlier schema version still open. The
//! snapshot exporter bundles the programme with its current flags and
//! completion score, gated on full completion.

mod canonical;
mod error;
mod migrate;
mod persist;
mod snapshot;

pub use canonical::canonical_json;
pub use error::StoreError;
pub use migrate::{migrate_document, EARLIEST_SCHEMA_VERSION};
pub use persist::{load_programme, save_programme};
pub use snapshot::{build_snapshot, export_snapshot, Snapshot};

pub const CRATE_NAME: &str = "progforge-store";
