use std::path::PathBuf;
use thiserror::Error;
use vesstor_scanner::ScanError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid target '{0}': {1}")]
    InvalidTarget(String, String),

    #[error("Invalid concurrency {0}: must be at least 1")]
    InvalidConcurrency(usize),

    #[error("Invalid delay {0}: must be a finite, non-negative number of seconds")]
    InvalidDelay(f64),

    #[error("SecLists not installed (expected {})", .0.display())]
    SecListsMissing(PathBuf),

    #[error("No suitable wordlist for mode '{mode}' under {}", .root.display())]
    WordlistNotFound { mode: String, root: PathBuf },

    #[error("Failed to read wordlist {}: {source}", .path.display())]
    WordlistRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write results to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Result serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
