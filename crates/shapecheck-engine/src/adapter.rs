//! Calling styles layered over the core validator
//!
//! The core always returns a [`ValidationResult`]. Callers that prefer a
//! boolean (`is_valid`) or a `Result` that fails on the first bad input
//! (`parse`) use these thin adapters; neither changes what is accepted.

use serde_json::Value;
use shapecheck_core::{IssueCode, ValidateOptions, ValidationIssue, ValidationResult};

use crate::validate::Validator;

/// Failure of a strict [`parse`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("validation failed with {}", summarize(.issues))]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn codes(&self) -> Vec<IssueCode> {
        self.issues.iter().map(|issue| issue.code).collect()
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    let details: Vec<String> = issues
        .iter()
        .map(|issue| format!("{}: {}", issue.path, issue.message))
        .collect();
    format!("{} issue(s): {}", issues.len(), details.join("; "))
}

/// Predicate style: `true` iff the input is accepted
pub fn is_valid<V: Validator + ?Sized>(validator: &V, input: &Value) -> bool {
    is_valid_with(validator, input, &ValidateOptions::default())
}

/// [`is_valid`] with explicit options
pub fn is_valid_with<V: Validator + ?Sized>(validator: &V, input: &Value, options: &ValidateOptions) -> bool {
    validator.validate_with(input, options).is_success()
}

/// Strict style: the accepted value, or a [`ValidationError`]
pub fn parse<V: Validator + ?Sized>(validator: &V, input: &Value) -> Result<Value, ValidationError> {
    parse_with(validator, input, &ValidateOptions::default())
}

/// [`parse`] with explicit options
pub fn parse_with<V: Validator + ?Sized>(
    validator: &V,
    input: &Value,
    options: &ValidateOptions,
) -> Result<Value, ValidationError> {
    match validator.validate_with(input, options) {
        ValidationResult::Success(value) => Ok(value),
        ValidationResult::Failure(issues) => Err(ValidationError { issues }),
    }
}

/// Async veneer: yields once to the scheduler, then runs exactly one
/// synchronous evaluation.
pub async fn validate_async<V: Validator + ?Sized>(validator: &V, input: &Value) -> ValidationResult {
    validate_async_with(validator, input, &ValidateOptions::default()).await
}

/// [`validate_async`] with explicit options
pub async fn validate_async_with<V: Validator + ?Sized>(
    validator: &V,
    input: &Value,
    options: &ValidateOptions,
) -> ValidationResult {
    tokio::task::yield_now().await;
    validator.validate_with(input, options)
}
