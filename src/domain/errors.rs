//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party SDK types.

use thiserror::Error;

/// Main rfpstore error type
///
/// This is the primary error type used throughout the crate.
#[derive(Debug, Error)]
pub enum RfpStoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cosmos DB-related errors
    #[error("Cosmos DB error: {0}")]
    CosmosDb(#[from] CosmosDbError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Cosmos DB-specific errors
///
/// Errors that occur when interacting with Azure Cosmos DB. Variants carry
/// the store's message as a string so SDK error types stay internal.
#[derive(Debug, Error)]
pub enum CosmosDbError {
    /// Failed to connect to Cosmos DB
    #[error("Failed to connect to Cosmos DB: {0}")]
    ConnectionFailed(String),

    /// Database not found
    #[error("Database not found: {0}")]
    DatabaseNotFound(String),

    /// Container not found
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    /// Failed to upsert a document
    #[error("Failed to upsert document: {0}")]
    UpsertFailed(String),

    /// Failed to query documents
    #[error("Failed to query documents: {0}")]
    QueryFailed(String),

    /// Failed to deserialize a response
    #[error("Failed to deserialize response: {0}")]
    DeserializationFailed(String),
}

impl From<std::io::Error> for RfpStoreError {
    fn from(err: std::io::Error) -> Self {
        RfpStoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RfpStoreError {
    fn from(err: serde_json::Error) -> Self {
        RfpStoreError::Serialization(err.to_string())
    }
}
