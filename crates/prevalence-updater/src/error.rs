//! Error types for the update pipeline.

use std::path::PathBuf;

/// All errors that can occur while refreshing the report data.
///
/// Only filesystem and serialization failures escape a run. Fetch failures
/// are reported through this type too, but the pipeline downgrades them to
/// warnings and keeps the previous data.
#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl UpdateError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used across the crate.
pub type UpdateResult<T> = Result<T, UpdateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = UpdateError::io(
            "data/report-data.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("data/report-data.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_status_message() {
        let err = UpdateError::Status {
            status: 503,
            url: "https://example.com/".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected HTTP status 503 from https://example.com/"
        );
    }
}
