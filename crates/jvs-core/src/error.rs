//! # Error Types: Validation Service Error Kinds
//!
//! Every failure the validation service reports is one of the variants of
//! [`ServiceError`]. Each variant carries the underlying message so callers
//! have enough detail for diagnostics; the transport layer decides what a
//! client gets to see.
//!
//! ## Design
//!
//! - A duplicate schema identifier is `AlreadyExists`, never `CreateSchema`.
//! - A missing schema is `NotFound`, never `DownloadSchema`.
//! - A stored schema that does not compile is `ValidateSchema`; a payload
//!   that breaks the schema's constraints is `ValidationFailed`. The two are
//!   different kinds, not just different messages.

use thiserror::Error;

/// Error returned by the validation service operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Input is not well-formed JSON.
    #[error("invalid json: {0}")]
    InvalidJson(String),

    /// A schema with the same identifier already exists.
    #[error("schema already exists: {0}")]
    AlreadyExists(String),

    /// The store failed to create the schema for a reason other than a
    /// uniqueness collision.
    #[error("could not create schema: {0}")]
    CreateSchema(String),

    /// No schema is stored under the identifier.
    #[error("schema not found: {0}")]
    NotFound(String),

    /// The store failed to read the schema for a reason other than a
    /// missing row.
    #[error("could not download schema: {0}")]
    DownloadSchema(String),

    /// The stored schema text could not be compiled into a validator.
    #[error("could not compile schema: {0}")]
    ValidateSchema(String),

    /// The payload violates one or more schema constraints.
    #[error("validation failed: {0}")]
    ValidationFailed(String),
}

/// Discriminant of [`ServiceError`], for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidJson,
    AlreadyExists,
    CreateSchema,
    NotFound,
    DownloadSchema,
    ValidateSchema,
    ValidationFailed,
}

impl ErrorKind {
    /// Machine-readable code, e.g. `"ALREADY_EXISTS"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "INVALID_JSON",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::CreateSchema => "CREATE_SCHEMA",
            Self::NotFound => "NOT_FOUND",
            Self::DownloadSchema => "DOWNLOAD_SCHEMA",
            Self::ValidateSchema => "VALIDATE_SCHEMA",
            Self::ValidationFailed => "VALIDATION_FAILED",
        }
    }

    /// Short description without any underlying detail.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid json",
            Self::AlreadyExists => "schema already exists",
            Self::CreateSchema => "could not create schema",
            Self::NotFound => "schema not found",
            Self::DownloadSchema => "could not download schema",
            Self::ValidateSchema => "could not compile schema",
            Self::ValidationFailed => "validation failed",
        }
    }

    /// Whether the caller can recover by changing its input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidJson | Self::AlreadyExists | Self::NotFound | Self::ValidationFailed
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ServiceError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidJson(_) => ErrorKind::InvalidJson,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::CreateSchema(_) => ErrorKind::CreateSchema,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::DownloadSchema(_) => ErrorKind::DownloadSchema,
            Self::ValidateSchema(_) => ErrorKind::ValidateSchema,
            Self::ValidationFailed(_) => ErrorKind::ValidationFailed,
        }
    }

    /// The wrapped underlying message.
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidJson(m)
            | Self::AlreadyExists(m)
            | Self::CreateSchema(m)
            | Self::NotFound(m)
            | Self::DownloadSchema(m)
            | Self::ValidateSchema(m)
            | Self::ValidationFailed(m) => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            ServiceError::InvalidJson("x".into()).kind(),
            ErrorKind::InvalidJson
        );
        assert_eq!(
            ServiceError::AlreadyExists("x".into()).kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            ServiceError::CreateSchema("x".into()).kind(),
            ErrorKind::CreateSchema
        );
        assert_eq!(ServiceError::NotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            ServiceError::DownloadSchema("x".into()).kind(),
            ErrorKind::DownloadSchema
        );
        assert_eq!(
            ServiceError::ValidateSchema("x".into()).kind(),
            ErrorKind::ValidateSchema
        );
        assert_eq!(
            ServiceError::ValidationFailed("x".into()).kind(),
            ErrorKind::ValidationFailed
        );
    }

    #[test]
    fn compile_failure_and_payload_failure_are_distinct_kinds() {
        let compile = ServiceError::ValidateSchema("same text".into());
        let payload = ServiceError::ValidationFailed("same text".into());
        assert_ne!(compile.kind(), payload.kind());
        assert!(!compile.kind().is_client_error());
        assert!(payload.kind().is_client_error());
    }

    #[test]
    fn display_wraps_underlying_message() {
        let err = ServiceError::CreateSchema("connection reset".into());
        assert_eq!(err.to_string(), "could not create schema: connection reset");
        assert_eq!(err.detail(), "connection reset");
    }

    #[test]
    fn client_error_classification() {
        assert!(ErrorKind::InvalidJson.is_client_error());
        assert!(ErrorKind::AlreadyExists.is_client_error());
        assert!(ErrorKind::NotFound.is_client_error());
        assert!(!ErrorKind::CreateSchema.is_client_error());
        assert!(!ErrorKind::DownloadSchema.is_client_error());
    }

    #[test]
    fn kind_displays_as_code() {
        assert_eq!(ErrorKind::ValidationFailed.as_str(), "VALIDATION_FAILED");
        assert_eq!(ErrorKind::AlreadyExists.to_string(), "ALREADY_EXISTS");
    }
}
