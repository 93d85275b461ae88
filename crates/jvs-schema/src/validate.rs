//! # Schema Compilation & Validation
//!
//! Compiles stored JSON Schema text into reusable validators and runs
//! payloads against them.
//!
//! ## Draft Selection
//!
//! The draft is taken from the schema's own `$schema` keyword; schemas
//! without one are compiled as Draft 2020-12.
//!
//! ## Reference Resolution
//!
//! Internal `$ref`s (`#/definitions/...`, `#/$defs/...`) are resolved by the
//! jsonschema crate natively. External references are refused by
//! [`OfflineRetriever`]: a stored schema must be self-contained, and
//! validating a payload never triggers network or filesystem access.
//!
//! ## Violations
//!
//! Validation collects every failed constraint, not only the first. The
//! resulting [`ValidationViolations`] renders as a top-level message followed
//! by each cause, comma-joined.

use std::fmt;

use jsonschema::{Retrieve, Uri, ValidationOptions, Validator};
use jvs_core::SchemaId;
use serde_json::Value;
use thiserror::Error;

/// Retriever that refuses every external `$ref` target.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external reference '{}' is not resolvable", uri.as_str()).into())
    }
}

/// Error while turning schema text into a validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The schema text is not well-formed JSON.
    #[error("schema '{schema_id}' is not valid JSON: {reason}")]
    InvalidJson {
        schema_id: SchemaId,
        reason: String,
    },

    /// The JSON document is not an acceptable schema.
    #[error("schema '{schema_id}' could not be compiled: {reason}")]
    Build {
        schema_id: SchemaId,
        reason: String,
    },
}

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the offending location in the payload.
    pub instance_path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Every violation produced by one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations {
    schema_id: SchemaId,
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payload does not validate with '{}'", self.schema_id)?;
        for (i, v) in self.violations.iter().enumerate() {
            if i == 0 {
                write!(f, ": {v}")?;
            } else {
                write!(f, ", {v}")?;
            }
        }
        Ok(())
    }
}

/// Builds validators from raw schema text.
///
/// Holds no state between calls; one compiler can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaCompiler;

impl SchemaCompiler {
    pub fn new() -> Self {
        Self
    }

    fn options(&self) -> ValidationOptions {
        let mut opts = jsonschema::options();
        opts.with_retriever(OfflineRetriever);
        opts
    }

    /// Compile `schema` (raw text) into a validator identified by `schema_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::InvalidJson`] if the text does not parse, and
    /// [`CompileError::Build`] if the document is not a usable schema
    /// (unknown draft, keyword of the wrong type, unresolvable `$ref`).
    pub fn compile(
        &self,
        schema_id: &SchemaId,
        schema: &str,
    ) -> Result<CompiledSchema, CompileError> {
        let value: Value =
            serde_json::from_str(schema).map_err(|e| CompileError::InvalidJson {
                schema_id: schema_id.clone(),
                reason: e.to_string(),
            })?;

        let validator = self
            .options()
            .build(&value)
            .map_err(|e| CompileError::Build {
                schema_id: schema_id.clone(),
                reason: e.to_string(),
            })?;

        Ok(CompiledSchema {
            schema_id: schema_id.clone(),
            validator,
        })
    }
}

/// A compiled, reusable validator for one stored schema.
pub struct CompiledSchema {
    schema_id: SchemaId,
    validator: Validator,
}

impl fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("schema_id", &self.schema_id)
            .finish_non_exhaustive()
    }
}

impl CompiledSchema {
    /// Quick yes/no check without collecting violations.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Validate `instance`, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationViolations`] listing each failed constraint.
    pub fn validate(&self, instance: &Value) -> Result<(), ValidationViolations> {
        if self.is_valid(instance) {
            return Ok(());
        }

        let violations: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationViolations {
                schema_id: self.schema_id.clone(),
                violations,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SOURCE_DESTINATION: &str = r#"{
        "$schema": "http://json-schema.org/draft-04/schema#",
        "type": "object",
        "properties": {
            "source": {"type": "string"},
            "destination": {"type": "string"}
        },
        "required": ["source", "destination"]
    }"#;

    fn compile(text: &str) -> Result<CompiledSchema, CompileError> {
        SchemaCompiler::new().compile(&SchemaId::from("config-schema"), text)
    }

    #[test]
    fn test_compile_valid_schema() {
        let compiled = compile(SOURCE_DESTINATION).unwrap();
        assert_eq!(compiled.schema_id.as_str(), "config-schema");
        assert!(compiled.is_valid(&json!({"source": "a", "destination": "b"})));
    }

    #[test]
    fn test_compile_rejects_malformed_json() {
        let err = compile("-").unwrap_err();
        assert!(matches!(err, CompileError::InvalidJson { .. }), "got: {err:?}");
    }

    #[test]
    fn test_compile_rejects_invalid_keyword_type() {
        let err = compile(r#"{"type": 12}"#).unwrap_err();
        assert!(matches!(err, CompileError::Build { .. }), "got: {err:?}");
    }

    #[test]
    fn test_compile_refuses_external_refs() {
        let err = compile(r#"{"$ref": "https://example.com/other.schema.json"}"#).unwrap_err();
        match err {
            CompileError::Build { reason, .. } => {
                assert!(!reason.is_empty());
            }
            other => panic!("expected Build error, got: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_keywords_are_ignored() {
        let compiled = compile(r#"{ "valid": "json" }"#).unwrap();
        compiled.validate(&json!({"valid": "json"})).unwrap();
    }

    #[test]
    fn test_internal_refs_resolve() {
        let compiled = compile(
            r##"{
                "definitions": {"name": {"type": "string"}},
                "type": "object",
                "properties": {"name": {"$ref": "#/definitions/name"}}
            }"##,
        )
        .unwrap();
        assert!(compiled.is_valid(&json!({"name": "x"})));
        assert!(!compiled.is_valid(&json!({"name": 1})));
    }

    #[test]
    fn test_validate_collects_every_violation() {
        let compiled = compile(SOURCE_DESTINATION).unwrap();
        let violations = compiled.validate(&json!({"source": 1})).unwrap_err();
        assert_eq!(violations.len(), 2, "violations: {violations}");

        let message = violations.to_string();
        assert!(message.starts_with("payload does not validate with 'config-schema'"));
        assert!(message.contains("destination"));
        assert!(message.contains("/source"));
        assert!(message.contains(", "));
    }

    #[test]
    fn test_violation_display_format() {
        let v = Violation {
            instance_path: "/chunks".to_string(),
            message: r#""size" is a required property"#.to_string(),
        };
        assert_eq!(v.to_string(), r#"/chunks: "size" is a required property"#);
    }

    #[test]
    fn test_violation_display_root() {
        let v = Violation {
            instance_path: String::new(),
            message: r#""destination" is a required property"#.to_string(),
        };
        assert!(v.to_string().starts_with("(root): "));
    }
}
