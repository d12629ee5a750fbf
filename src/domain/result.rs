//! Result type alias for rfpstore

use super::errors::RfpStoreError;

/// Result type alias for rfpstore operations
///
/// Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, RfpStoreError>;
