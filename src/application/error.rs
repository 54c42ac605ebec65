//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Nothing here classifies or recovers from failures: errors from the
//! blockchain client pass through unchanged and are reported once at the
//! top level.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Blockchain(BlockchainError)  - RPC, signing and receipt failures
//! ├── Configuration(String)        - Missing or malformed settings
//! ├── Output(io::Error)            - Writing demo output failed
//! └── Serialization(serde_json::Error)
//! ```
//!
//! # Examples
//!
//! ```
//! use celo_tx_types::application::error::ApplicationError;
//! use celo_tx_types::infrastructure::blockchain::BlockchainError;
//!
//! let err = ApplicationError::configuration("PRIVATE_KEY is not set");
//! assert!(err.is_configuration());
//!
//! let err: ApplicationError = BlockchainError::timeout("no receipt").into();
//! assert!(err.to_string().contains("timeout"));
//! ```

use crate::infrastructure::blockchain::BlockchainError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Error from the blockchain client.
    #[error("blockchain error: {0}")]
    Blockchain(#[from] BlockchainError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Writing demo output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApplicationError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
