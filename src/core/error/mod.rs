use std::path::PathBuf;

/// Failure of a single test copy. Never fatal to the batch.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error in {file}: top-level value must be an object")]
    NotAnObject { file: String },

    #[error("failed to serialize {workflow}: {source}")]
    Serialize {
        workflow: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to save {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CopyError {
    /// `true` when the source was loaded but the test copy could not be produced.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, CopyError::Serialize { .. } | CopyError::Write { .. })
    }
}
