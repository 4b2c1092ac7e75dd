//! Validation report schema (stable v1)
//!
//! This schema is STABLE and VERSIONED.
//! Breaking changes require a new version.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::issue::{ValidationIssue, ValidationResult};

/// Report schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportVersion {
    /// Major version (breaking changes)
    pub major: u32,

    /// Minor version (backward-compatible additions)
    pub minor: u32,
}

impl ReportVersion {
    /// Current report schema version
    pub const CURRENT: ReportVersion = ReportVersion { major: 1, minor: 0 };
}

impl std::fmt::Display for ReportVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Summary statistics for a report
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Whether the input was accepted
    pub valid: bool,

    /// Total number of issues
    pub total: usize,

    /// Issue counts keyed by stable issue code
    pub by_code: BTreeMap<String, usize>,
}

/// Validation report (report.json v1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Schema version
    pub version: ReportVersion,

    /// Timestamp (ISO 8601)
    pub timestamp: String,

    /// What was validated (e.g. a scenario name)
    pub subject: String,

    /// Summary statistics
    pub summary: ReportSummary,

    /// All issues
    pub issues: Vec<ValidationIssue>,

    /// Accepted value, when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl ValidationReport {
    /// Create a report from a validation result
    pub fn from_result(subject: impl Into<String>, result: &ValidationResult) -> Self {
        let issues = result.issues().to_vec();

        let mut by_code = BTreeMap::new();
        for issue in &issues {
            *by_code.entry(issue.code.as_str().to_string()).or_insert(0) += 1;
        }

        Self {
            version: ReportVersion::CURRENT,
            timestamp: chrono::Utc::now().to_rfc3339(),
            subject: subject.into(),
            summary: ReportSummary {
                valid: result.is_success(),
                total: issues.len(),
                by_code,
            },
            issues,
            value: result.value().cloned(),
        }
    }

    /// Check if the report has any issues
    pub fn has_issues(&self) -> bool {
        self.summary.total > 0
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save to file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let json = self.to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{IssueCode, IssuePath};
    use pretty_assertions::assert_eq;

    #[test]
    fn report_for_success() {
        let result = ValidationResult::Success(serde_json::json!({"name": "John"}));
        let report = ValidationReport::from_result("object", &result);

        assert_eq!(report.version, ReportVersion::CURRENT);
        assert!(report.summary.valid);
        assert!(!report.has_issues());
        assert_eq!(report.value, Some(serde_json::json!({"name": "John"})));
    }

    #[test]
    fn report_counts_by_code() {
        let result = ValidationResult::Failure(vec![
            ValidationIssue::new(IssueCode::MissingField, IssuePath::root().key("a"), "missing"),
            ValidationIssue::new(IssueCode::MissingField, IssuePath::root().key("b"), "missing"),
            ValidationIssue::new(IssueCode::TypeMismatch, IssuePath::root().key("c"), "wrong"),
        ]);
        let report = ValidationReport::from_result("object", &result);

        assert!(!report.summary.valid);
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.by_code.get("missing_field"), Some(&2));
        assert_eq!(report.summary.by_code.get("type_mismatch"), Some(&1));
    }

    #[test]
    fn report_serialization() {
        let report = ValidationReport::from_result("string", &ValidationResult::Success("hi".into()));
        let json = report.to_json().unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"issues\""));
    }
}
