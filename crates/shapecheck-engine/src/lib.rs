//! shapecheck engine - schema evaluation
//!
//! This crate implements the evaluation contract for shapecheck schemas:
//! - Primitive, composite, and combinator validation
//! - Intersection output merging
//! - Predicate (`is_valid`) and strict (`parse`) calling styles
//! - An async veneer over the synchronous core

pub mod adapter;
pub mod format;
mod merge;
pub mod validate;

pub use adapter::{
    is_valid, is_valid_with, parse, parse_with, validate_async, validate_async_with, ValidationError,
};
pub use validate::{validate, validate_with, Validator};
