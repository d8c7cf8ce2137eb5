//! Error types for Fleetdesk

use thiserror::Error;

/// Core error type for Fleetdesk operations
#[derive(Error, Debug)]
pub enum FleetdeskError {
    #[error("Search error: {0}")]
    Search(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Bulk action error: {0}")]
    BulkAction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Fleetdesk operations
pub type Result<T> = std::result::Result<T, FleetdeskError>;
