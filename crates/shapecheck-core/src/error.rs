//! Schema construction errors
//!
//! These are programmer errors raised when a schema is built, never at
//! validation time. Expected rule violations are reported through
//! [`crate::ValidationResult`] instead.

/// Malformed schema construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("union requires at least one member")]
    EmptyUnion,

    #[error("intersection requires at least one member")]
    EmptyIntersection,
}
