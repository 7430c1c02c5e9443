use progforge_model::ValidationError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
#[non_exhaustive]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    /// Document carries a schema version newer than this build understands.
    SchemaVersion {
        found: u32,
        supported: u32,
    },
    /// Document shape this migration chain cannot repair.
    Migration(String),
    Invariant(ValidationError),
    /// Snapshot export refused: programme is not fully complete.
    ExportGate {
        completion: u8,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {}: {source}", path.display()),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::SchemaVersion { found, supported } => write!(
                f,
                "document schema version {found} is newer than supported version {supported}"
            ),
            Self::Migration(message) => write!(f, "migration failed: {message}"),
            Self::Invariant(err) => write!(f, "model invariant violated: {err}"),
            Self::ExportGate { completion } => write!(
                f,
                "snapshot export requires 100% completion (currently {completion}%)"
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Invariant(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
