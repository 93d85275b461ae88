//! # jvs-core: Foundational Types for the JSON Validation Service
//!
//! Defines the vocabulary shared by every other crate in the workspace:
//! schema identifiers and records, the error kinds the validation service
//! reports, and the narrow storage capability the service is written against.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** Client-supplied schema handles are `SchemaId`,
//!    storage keys are `SchemaRecord::id`. No bare strings cross crate
//!    boundaries as identifiers.
//!
//! 2. **Storage errors are translated at the storage boundary.** A
//!    `SchemaStore` implementation reports `StoreError::AlreadyExists` and
//!    `StoreError::NotFound` itself; callers never inspect driver errors.
//!
//! 3. **One error kind per failure class.** `ServiceError` has exactly one
//!    variant per kind, and `ErrorKind` is the `Copy` tag callers match on.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jvs-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod memory;
pub mod schema;
pub mod store;

pub use error::{ErrorKind, ServiceError};
pub use memory::MemoryStore;
pub use schema::{SchemaId, SchemaRecord};
pub use store::{SchemaStore, StoreError};
