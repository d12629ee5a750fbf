//! Repository abstraction for staffing extracts
//!
//! The trait is the seam between the pipeline and the backing store; tests
//! exercise the repository contract against an in-memory implementation.

use crate::domain::{Result, StaffingExtract};
use async_trait::async_trait;

/// Repository for staffing extract documents
#[async_trait]
pub trait ExtractRepository: Send + Sync {
    /// Insert or replace an extract, keyed by its `id`
    ///
    /// Returns the stored representation as given back by the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    async fn upsert_extract(&self, extract: StaffingExtract) -> Result<StaffingExtract>;

    /// Fetch all extracts whose status is [`STATUS_EXTRACTED`]
    ///
    /// The full result set is materialized before returning; result order is
    /// not guaranteed.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// [`STATUS_EXTRACTED`]: crate::domain::STATUS_EXTRACTED
    async fn find_extracted(&self) -> Result<Vec<StaffingExtract>>;
}
