use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the Papers with Code backup dataset.
///
/// Every variant is fatal to the invocation: there is no partial-load fallback.
#[derive(Debug, Error)]
pub enum DataError {
    /// The backup file could not be located at all.
    #[error("backup data not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    /// The backup file exists but could not be read.
    #[error("failed to read backup data {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backup data is not a parseable sequence of paper records.
    #[error("malformed backup data: {reason}")]
    Format {
        reason: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl DataError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        DataError::Format {
            reason: reason.into(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(source: serde_json::Error) -> Self {
        DataError::Format {
            reason: source.to_string(),
            source: Some(source),
        }
    }
}
