//! Staffing extract domain model
//!
//! This module defines the document type stored in Cosmos DB: the structured
//! data extracted from an RFP (request for proposal) during staffing analysis.

use super::ids::ExtractId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Document type discriminator for staffing extracts
///
/// Application-level convention, not enforced by the store.
pub const DOC_TYPE_STAFFING_EXTRACT: &str = "rfp_staffing_extract";

/// Status value a freshly extracted document carries
///
/// The read path filters on this exact value.
pub const STATUS_EXTRACTED: &str = "rfp_extracted";

/// An RFP staffing extract document
///
/// The schemaless store accepts any JSON object; this type pins down the
/// fields the pipeline relies on and carries everything else in `extra`.
/// On reads, `extra` also absorbs Cosmos system fields (`_rid`, `_ts`, ...).
///
/// # Examples
///
/// ```
/// use rfpstore::domain::extract::StaffingExtract;
/// use rfpstore::domain::ids::ExtractId;
///
/// let extract = StaffingExtract::builder()
///     .id(ExtractId::generate())
///     .required_roles("2x Solution Architect")
///     .build()
///     .unwrap();
/// assert_eq!(extract.status, "rfp_extracted");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingExtract {
    /// Document id, unique within the container (upsert key)
    pub id: ExtractId,

    /// Document type discriminator
    pub doc_type: String,

    /// Pipeline status, filtered on by the read path
    pub status: String,

    /// When the extract was produced
    pub extract_date: DateTime<Utc>,

    /// Source blob names the extract was derived from
    #[serde(default)]
    pub blob_names: String,

    /// Roles the RFP calls for
    #[serde(default)]
    pub required_roles: String,

    /// Requirements per role
    #[serde(default)]
    pub role_requirements: String,

    /// Resume/CV requirements
    #[serde(default)]
    pub resume_requirements: String,

    /// Any additional fields, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StaffingExtract {
    /// Creates a new builder for constructing a StaffingExtract
    pub fn builder() -> StaffingExtractBuilder {
        StaffingExtractBuilder::default()
    }
}

/// Builder for constructing StaffingExtract instances
#[derive(Debug, Default)]
pub struct StaffingExtractBuilder {
    id: Option<ExtractId>,
    doc_type: Option<String>,
    status: Option<String>,
    extract_date: Option<DateTime<Utc>>,
    blob_names: String,
    required_roles: String,
    role_requirements: String,
    resume_requirements: String,
    extra: Map<String, Value>,
}

impl StaffingExtractBuilder {
    /// Creates a new StaffingExtractBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document id
    pub fn id(mut self, id: ExtractId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the document type (defaults to [`DOC_TYPE_STAFFING_EXTRACT`])
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    /// Sets the status (defaults to [`STATUS_EXTRACTED`])
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the extract date (defaults to now)
    pub fn extract_date(mut self, extract_date: DateTime<Utc>) -> Self {
        self.extract_date = Some(extract_date);
        self
    }

    /// Sets the source blob names
    pub fn blob_names(mut self, blob_names: impl Into<String>) -> Self {
        self.blob_names = blob_names.into();
        self
    }

    /// Sets the required roles
    pub fn required_roles(mut self, required_roles: impl Into<String>) -> Self {
        self.required_roles = required_roles.into();
        self
    }

    /// Sets the role requirements
    pub fn role_requirements(mut self, role_requirements: impl Into<String>) -> Self {
        self.role_requirements = role_requirements.into();
        self
    }

    /// Sets the resume requirements
    pub fn resume_requirements(mut self, resume_requirements: impl Into<String>) -> Self {
        self.resume_requirements = resume_requirements.into();
        self
    }

    /// Adds an arbitrary extra field
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Builds the StaffingExtract
    ///
    /// # Errors
    ///
    /// Returns an error if the document id is missing
    pub fn build(self) -> Result<StaffingExtract, String> {
        Ok(StaffingExtract {
            id: self.id.ok_or("id is required")?,
            doc_type: self
                .doc_type
                .unwrap_or_else(|| DOC_TYPE_STAFFING_EXTRACT.to_string()),
            status: self.status.unwrap_or_else(|| STATUS_EXTRACTED.to_string()),
            extract_date: self.extract_date.unwrap_or_else(Utc::now),
            blob_names: self.blob_names,
            required_roles: self.required_roles,
            role_requirements: self.role_requirements,
            resume_requirements: self.resume_requirements,
            extra: self.extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_defaults() {
        let extract = StaffingExtract::builder()
            .id(ExtractId::new("extract-1").unwrap())
            .build()
            .unwrap();

        assert_eq!(extract.doc_type, DOC_TYPE_STAFFING_EXTRACT);
        assert_eq!(extract.status, STATUS_EXTRACTED);
        assert!(extract.blob_names.is_empty());
        assert!(extract.extra.is_empty());
    }

    #[test]
    fn test_builder_requires_id() {
        let result = StaffingExtract::builder().build();
        assert_eq!(result.unwrap_err(), "id is required");
    }

    #[test]
    fn test_builder_overrides() {
        let extract = StaffingExtract::builder()
            .id(ExtractId::new("extract-1").unwrap())
            .status("rfp_matched")
            .required_roles("1x Data Engineer")
            .field("source_system", json!("procurement"))
            .build()
            .unwrap();

        assert_eq!(extract.status, "rfp_matched");
        assert_eq!(extract.required_roles, "1x Data Engineer");
        assert_eq!(extract.extra["source_system"], json!("procurement"));
    }

    #[test]
    fn test_serde_flattens_extra_fields() {
        let extract = StaffingExtract::builder()
            .id(ExtractId::new("extract-1").unwrap())
            .field("score", json!(0.92))
            .build()
            .unwrap();

        let value = serde_json::to_value(&extract).unwrap();
        assert_eq!(value["id"], json!("extract-1"));
        assert_eq!(value["score"], json!(0.92));
        // Flattened, not nested under "extra"
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn test_deserialize_absorbs_system_fields() {
        let json = r#"{
            "id": "extract-1",
            "doc_type": "rfp_staffing_extract",
            "status": "rfp_extracted",
            "extract_date": "2026-08-25T12:00:00Z",
            "_rid": "abc==",
            "_ts": 1756123200
        }"#;

        let extract: StaffingExtract = serde_json::from_str(json).unwrap();
        assert_eq!(extract.id.as_str(), "extract-1");
        assert!(extract.blob_names.is_empty());
        assert_eq!(extract.extra["_rid"], json!("abc=="));
    }
}
