//! shapecheck core
//!
//! Core domain model with stable, versioned types.
//! Never rename issue codes - they are part of the public API.

pub mod config;
pub mod error;
pub mod issue;
pub mod report;
pub mod schema;

pub use config::{Config, ConfigError, UnionReport, ValidateOptions};
pub use error::SchemaError;
pub use issue::{IssueCode, IssuePath, PathSegment, ValidationIssue, ValidationResult};
pub use report::{ReportVersion, ValidationReport};
pub use schema::{
    array, boolean, intersection, number, object, string, tuple, union, ArraySchema,
    BooleanSchema, IntersectionSchema, NumberSchema, ObjectSchema, Presence, Schema, SchemaKind,
    StringSchema, TupleSchema, UnionSchema,
};
