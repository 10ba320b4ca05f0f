//! Error taxonomy for a bundling run.
//!
//! Every fallible library function returns [`BundleError`]. Only the binary
//! turns an error into a process exit status via [`BundleError::exit_code`].

use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BundleError>;

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// Missing or contradictory settings, detected before any report is read.
    #[error("{0}")]
    Config(String),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to marshal applications: {0}")]
    Json(#[from] serde_json::Error),
}

impl BundleError {
    pub fn config(msg: impl Into<String>) -> Self {
        BundleError::Config(msg.into())
    }

    /// Exit status for the CLI: `2` for configuration problems, `1` otherwise.
    ///
    /// ```
    /// use analysis_bundler::error::BundleError;
    ///
    /// assert_eq!(BundleError::config("missing list").exit_code(), 2);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            BundleError::Config(_) => 2,
            _ => 1,
        }
    }
}
