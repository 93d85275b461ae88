//! # Response Envelope
//!
//! Every schema endpoint answers with the same JSON shape:
//!
//! ```json
//! {"action": "validateSchema", "id": "config-schema", "status": "error", "message": "..."}
//! ```
//!
//! `message` appears only on errors, `payload` only on a successful download.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use jvs_core::SchemaId;

/// Operation a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    UploadSchema,
    DownloadSchema,
    ValidateSchema,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UploadSchema => "uploadSchema",
            Self::DownloadSchema => "downloadSchema",
            Self::ValidateSchema => "validateSchema",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// JSON body of every schema endpoint response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub action: Action,
    pub id: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Envelope {
    pub fn success(action: Action, schema_id: &SchemaId) -> Self {
        Self {
            action,
            id: schema_id.to_string(),
            status: Status::Success,
            message: None,
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn error(action: Action, schema_id: &SchemaId, message: impl Into<String>) -> Self {
        Self {
            action,
            id: schema_id.to_string(),
            status: Status::Error,
            message: Some(message.into()),
            payload: None,
        }
    }
}
