//! Error types for the Ecovacs integration

use thiserror::Error;

/// Result type for Ecovacs operations
pub type EcovacsResult<T> = Result<T, EcovacsError>;

/// Errors that can occur while setting up the Ecovacs integration
#[derive(Debug, Error)]
pub enum EcovacsError {
    /// Config entry data could not be deserialized
    #[error("invalid config entry data: {0}")]
    InvalidEntryData(#[from] serde_json::Error),

    /// Self-hosted mode is missing a server override
    #[error("self-hosted mode requires '{key}' to be set")]
    MissingOverride { key: &'static str },
}
