//! Extension traits defining the core abstraction for every stored record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema identity of an extension kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupVersionKind {
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
    pub plural: &'static str,
    pub singular: &'static str,
}

/// Metadata carried by every extension.
///
/// `name` is the identity of the record and never changes after creation.
/// A present `deletion_timestamp` marks the record as soft-deleted; the store
/// may still return it until it is physically purged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    #[serde(default = "Utc::now")]
    pub creation_timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Metadata for a new record created now
    pub fn named(name: impl Into<String>) -> Self {
        Self::created_at(name, Utc::now())
    }

    /// Metadata with an explicit creation timestamp
    pub fn created_at(name: impl Into<String>, creation_timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            labels: None,
            annotations: None,
            version: None,
            creation_timestamp,
            deletion_timestamp: None,
        }
    }

    /// Add a label, creating the label map on first use
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a label value
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(key))
            .map(String::as_str)
    }
}

/// Base trait for every record kept in an extension store.
///
/// Provides the schema identity of the kind plus access to the shared
/// [`Metadata`]. Kind-specific data lives on the implementing type.
pub trait Extension: Clone + Send + Sync + 'static {
    /// Schema identity of this kind
    fn gvk() -> GroupVersionKind;

    /// Shared metadata
    fn metadata(&self) -> &Metadata;

    /// Mutable access for the store (name generation, versioning)
    fn metadata_mut(&mut self) -> &mut Metadata;

    // === Utility Methods ===

    /// Identity of the record
    fn name(&self) -> &str {
        &self.metadata().name
    }

    /// Creation timestamp
    fn creation_timestamp(&self) -> DateTime<Utc> {
        self.metadata().creation_timestamp
    }

    /// Check if the record has been soft-deleted
    fn is_deleted(&self) -> bool {
        self.metadata().deletion_timestamp.is_some()
    }
}
