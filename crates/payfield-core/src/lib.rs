//! Core contracts and validation for payment identifier fields.
//!
//! This crate defines the canonical schemas for the legacy and new identifier
//! formats and the validator shared by every surface that accepts raw field
//! values.

pub mod error;
pub mod field;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use field::{CharClass, FieldKind, FormatVariant};
pub use schema::{FieldSchema, all_field_schemas, field_schema, verify_registry};
pub use validation::{ValidationOutcome, Violation, ViolationCode, validate};

/// Current contract version for serialized validation artifacts.
pub const SCHEMA_VERSION: &str = "0.1";
