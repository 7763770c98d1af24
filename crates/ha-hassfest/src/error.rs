//! Error types for hassfest

use std::path::PathBuf;
use thiserror::Error;

/// Result type for hassfest operations
pub type HassfestResult<T> = Result<T, HassfestError>;

/// Hard failures that abort a hassfest run
///
/// Stale generated files are not errors of this kind; they are collected as
/// [`ValidationError`](crate::ValidationError)s on the run config.
#[derive(Debug, Error)]
pub enum HassfestError {
    /// The package is listed but not pinned with `==` to a version
    #[error("Requirement {package} need to be pinned \"{package}==<version>\".")]
    UnpinnedRequirement { package: String },

    /// No parseable requirement for the package was found
    #[error("Invalid {package} requirement in {file}")]
    MissingRequirement { package: String, file: String },

    /// Failed to read a file
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generation ran without the validation step filling the cache
    #[error("no generated '{key}' content cached, validation must run before generation")]
    MissingCacheEntry { key: &'static str },

    /// Plugin name not known to hassfest
    #[error("unknown plugin '{name}'")]
    UnknownPlugin { name: String },
}

impl HassfestError {
    /// Whether the error is about the pin of a requirement
    pub fn is_pin_error(&self) -> bool {
        matches!(
            self,
            HassfestError::UnpinnedRequirement { .. } | HassfestError::MissingRequirement { .. }
        )
    }
}
