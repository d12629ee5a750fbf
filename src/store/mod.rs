//! Staffing extract storage
//!
//! The [`ExtractRepository`] trait defines the two repository operations;
//! [`ExtractStore`] is the Azure Cosmos DB implementation.

pub mod cosmos;
pub mod traits;

pub use cosmos::ExtractStore;
pub use traits::ExtractRepository;
