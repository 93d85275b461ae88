//! # Request Body Decoding
//!
//! Bodies are taken as raw bytes and decoded here rather than through
//! `axum::Json`, so that malformed input is reported as `InvalidJson` inside
//! the response envelope and no `Content-Type` header is required.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use jvs_core::ServiceError;
use serde_json::{Map, Value};

/// Unwrap the buffered body, reporting an unreadable or oversized body as
/// `InvalidJson` so it is rendered in the response envelope.
pub fn body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, ServiceError> {
    body.map_err(|rejection| ServiceError::InvalidJson(rejection.body_text()))
}

/// Decode a schema upload body as UTF-8 text.
///
/// Whether the text is JSON is the service's decision, not ours.
pub fn schema_text(body: &[u8]) -> Result<&str, ServiceError> {
    std::str::from_utf8(body).map_err(|e| ServiceError::InvalidJson(e.to_string()))
}

/// Decode a validation body, which must be a single JSON object.
pub fn json_object(body: &[u8]) -> Result<Map<String, Value>, ServiceError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ServiceError::InvalidJson(format!(
            "expected a JSON object, found {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(ServiceError::InvalidJson(e.to_string())),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jvs_core::ErrorKind;

    #[test]
    fn object_body_decodes() {
        let map = json_object(br#"{"a": null, "b": 1}"#).unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn empty_body_is_invalid_json() {
        assert_eq!(json_object(b"").unwrap_err().kind(), ErrorKind::InvalidJson);
    }

    #[test]
    fn non_object_body_is_invalid_json() {
        let err = json_object(b"[1, 2]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert!(err.to_string().contains("found array"));
    }

    #[test]
    fn schema_text_rejects_invalid_utf8() {
        assert_eq!(
            schema_text(&[0xff, 0xfe]).unwrap_err().kind(),
            ErrorKind::InvalidJson
        );
        assert_eq!(schema_text(b"{}").unwrap(), "{}");
    }
}
