//! # Schema Identity
//!
//! `SchemaId` is the public handle a client uses in upload, download and
//! validate calls. `SchemaRecord` is the persisted row behind it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client-supplied schema identifier.
///
/// Opaque to the service: any string the transport layer routes to us is a
/// valid identifier. Uniqueness is the store's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaId(String);

impl SchemaId {
    /// Wrap a client-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SchemaId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SchemaId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for SchemaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SchemaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored schema document.
///
/// Immutable once created: there is no update path, only create and read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRecord {
    /// System-generated storage key. Not exposed to clients.
    pub id: Uuid,
    /// Client-facing unique handle.
    pub schema_id: SchemaId,
    /// Raw schema text, byte-for-byte as uploaded.
    pub schema: String,
    pub created_at: DateTime<Utc>,
}

impl SchemaRecord {
    /// Build a fresh record with a new storage key and the current time.
    pub fn new(schema_id: SchemaId, schema: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            schema_id,
            schema: schema.into(),
            created_at: Utc::now(),
        }
    }
}
