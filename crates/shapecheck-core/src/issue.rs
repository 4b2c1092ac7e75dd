//! Validation issues and results
//!
//! IMPORTANT: Issue codes are versioned and stable.
//! NEVER rename or remove codes - they are part of the public API.
//! Add new codes with new names only.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Issue code registry (v1)
///
/// These codes are STABLE and VERSIONED.
/// Do NOT rename or remove codes - only add new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Runtime type of the input does not match the schema kind
    TypeMismatch,

    /// Value has the right type but the wrong format (e.g. email)
    FormatMismatch,

    /// A required object field is absent
    MissingField,

    /// Array or string length is outside the declared bounds
    LengthOutOfRange,

    /// Tuple input length differs from the number of positions
    LengthMismatch,

    /// No union member accepted the input
    NoUnionMemberMatched,

    /// Number is below the declared minimum
    TooSmall,

    /// Number is above the declared maximum
    TooBig,

    /// Intersection members produced outputs that cannot be merged
    IntersectionConflict,
}

impl IssueCode {
    /// Get the issue code as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::FormatMismatch => "format_mismatch",
            Self::MissingField => "missing_field",
            Self::LengthOutOfRange => "length_out_of_range",
            Self::LengthMismatch => "length_mismatch",
            Self::NoUnionMemberMatched => "no_union_member_matched",
            Self::TooSmall => "too_small",
            Self::TooBig => "too_big",
            Self::IntersectionConflict => "intersection_conflict",
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One step from a value to a nested value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object field name
    Key(String),

    /// Array or tuple position
    Index(usize),
}

/// Location of an issue within a nested value
///
/// Rendered with a `$` root marker, e.g. `$`, `$.name`, `$.items[0].id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuePath(Vec<PathSegment>);

impl IssuePath {
    /// The root of the validated value
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from segments
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    /// Path to a named field below this one
    pub fn key(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(name.into()));
        Self(segments)
    }

    /// Path to a position below this one
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for IssuePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// A single reported problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Stable issue code
    pub code: IssueCode,

    /// Where the problem is
    pub path: IssuePath,

    /// Human-readable message
    pub message: String,

    /// What the schema expected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,

    /// What the input contained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,

    /// Issues reported by each union member, in member order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub union_errors: Vec<Vec<ValidationIssue>>,
}

impl ValidationIssue {
    /// Create a new issue with minimal fields
    pub fn new(code: IssueCode, path: IssuePath, message: impl Into<String>) -> Self {
        Self {
            code,
            path,
            message: message.into(),
            expected: None,
            received: None,
            union_errors: Vec::new(),
        }
    }

    /// Set expected/received values
    pub fn with_comparison(mut self, expected: impl Into<String>, received: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.received = Some(received.into());
        self
    }

    /// Attach per-member union issues
    pub fn with_union_errors(mut self, union_errors: Vec<Vec<ValidationIssue>>) -> Self {
        self.union_errors = union_errors;
        self
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.message, self.code)
    }
}

/// Outcome of a validation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ValidationResult {
    /// The accepted, possibly normalized value
    Success(Value),

    /// One or more issues
    Failure(Vec<ValidationIssue>),
}

impl ValidationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Accepted value, if any
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Reported issues (empty on success)
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(issues) => issues,
        }
    }

    /// Issue codes in report order
    pub fn codes(&self) -> Vec<IssueCode> {
        self.issues().iter().map(|issue| issue.code).collect()
    }

    pub fn into_result(self) -> Result<Value, Vec<ValidationIssue>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(issues) => Err(issues),
        }
    }
}

/// Short name for the runtime type of a JSON value
pub fn type_name(value: &Value) -> &'static str {
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
    use pretty_assertions::assert_eq;

    #[test]
    fn issue_code_stability() {
        // Ensure codes are stable strings
        assert_eq!(IssueCode::TypeMismatch.as_str(), "type_mismatch");
        assert_eq!(IssueCode::NoUnionMemberMatched.as_str(), "no_union_member_matched");
        assert_eq!(
            serde_json::to_string(&IssueCode::LengthOutOfRange).unwrap(),
            "\"length_out_of_range\""
        );
    }

    #[test]
    fn path_rendering() {
        assert_eq!(IssuePath::root().to_string(), "$");
        assert_eq!(IssuePath::root().key("name").to_string(), "$.name");
        assert_eq!(
            IssuePath::root().key("items").index(0).key("id").to_string(),
            "$.items[0].id"
        );
    }

    #[test]
    fn path_serializes_as_segment_list() {
        let path = IssuePath::root().key("tags").index(2);
        assert_eq!(serde_json::to_value(&path).unwrap(), serde_json::json!(["tags", 2]));
    }

    #[test]
    fn issue_serialization() {
        let issue = ValidationIssue::new(
            IssueCode::MissingField,
            IssuePath::root().key("name"),
            "Required field 'name' is missing",
        );

        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains("missing_field"));
        assert!(!json.contains("union_errors"));
        assert_eq!(issue.to_string(), "$.name: Required field 'name' is missing (missing_field)");
    }

    #[test]
    fn result_accessors() {
        let ok = ValidationResult::Success(serde_json::json!("hi"));
        assert!(ok.is_success());
        assert!(ok.issues().is_empty());

        let failed = ValidationResult::Failure(vec![ValidationIssue::new(
            IssueCode::TypeMismatch,
            IssuePath::root(),
            "Expected string, received number",
        )]);
        assert!(failed.is_failure());
        assert_eq!(failed.value(), None);
        assert_eq!(failed.codes(), vec![IssueCode::TypeMismatch]);
    }
}
