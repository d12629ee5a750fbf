//! Domain models and types for rfpstore.
//!
//! The domain layer provides:
//! - The [`StaffingExtract`] document model and its builder
//! - The strongly-typed [`ExtractId`] identifier
//! - Error types ([`RfpStoreError`], [`CosmosDbError`])
//! - The [`Result`] type alias

pub mod errors;
pub mod extract;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{CosmosDbError, RfpStoreError};
pub use extract::{
    StaffingExtract, StaffingExtractBuilder, DOC_TYPE_STAFFING_EXTRACT, STATUS_EXTRACTED,
};
pub use ids::ExtractId;
pub use result::Result;
