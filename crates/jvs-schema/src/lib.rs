//! # jvs-schema: Schema Compilation & Payload Validation
//!
//! Everything between a stored schema document and a pass/fail answer for a
//! payload.
//!
//! ## Payload Normalization (`normalize`)
//!
//! [`strip_nulls`] removes every null-valued key from a JSON object tree
//! before validation, so that `"field": null` and an absent field look the
//! same to `required`.
//!
//! ## Compilation (`validate`)
//!
//! [`SchemaCompiler`] turns raw schema text into a [`CompiledSchema`]. Every
//! failed constraint is collected into [`ValidationViolations`] instead of
//! stopping at the first one.
//!
//! ## Service (`service`)
//!
//! [`ValidationService`] orchestrates the store, the normalizer and the
//! compiler behind the three operations exposed to the transport layer.
//!
//! ## Crate Policy
//!
//! - Depends only on `jvs-core` internally.
//! - Stored schemas are compiled offline: external `$ref` targets are never
//!   fetched.

pub mod normalize;
pub mod service;
pub mod validate;

pub use normalize::strip_nulls;
pub use service::ValidationService;
pub use validate::{CompileError, CompiledSchema, SchemaCompiler, ValidationViolations, Violation};
