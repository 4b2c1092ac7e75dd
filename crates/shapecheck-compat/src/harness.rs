//! Test harness for replaying scenarios against the engine

use serde::{Deserialize, Serialize};
use shapecheck_core::{ValidateOptions, ValidationIssue};
use shapecheck_engine::{is_valid_with, parse_with, validate_async_with};

use crate::metrics::{CaseResult, CompatMetrics, Observed};
use crate::scenario::{Case, Scenario};

/// How a caller consumes a validation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStyle {
    /// Boolean: only accept/reject is visible
    Predicate,

    /// Synchronous parse that fails with the issue list
    Strict,

    /// Awaited full result through the async veneer
    Async,
}

impl CallStyle {
    pub const ALL: [CallStyle; 3] = [CallStyle::Predicate, CallStyle::Strict, CallStyle::Async];
}

impl std::fmt::Display for CallStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Predicate => write!(f, "predicate"),
            Self::Strict => write!(f, "strict"),
            Self::Async => write!(f, "async"),
        }
    }
}

/// Replays scenarios through every calling style
pub struct CompatTestHarness {
    /// Options passed to every validation call
    options: ValidateOptions,
}

impl CompatTestHarness {
    pub fn new(options: ValidateOptions) -> Self {
        Self { options }
    }

    /// Run every case of every scenario under every calling style
    pub async fn run(&self, scenarios: &[Scenario]) -> CompatMetrics {
        let mut metrics = CompatMetrics::new();

        for scenario in scenarios {
            for case in &scenario.cases {
                for style in CallStyle::ALL {
                    let result = self.check_case(scenario, case, style).await;
                    tracing::trace!(
                        scenario = %scenario.name,
                        case = %case.label,
                        %style,
                        passed = result.passed(),
                        "case checked"
                    );
                    metrics.add_case_result(result);
                }
            }
        }

        tracing::info!(
            checks = metrics.total_checks,
            passed = metrics.passed,
            failed = metrics.failed,
            "scenario run complete"
        );

        metrics
    }

    /// Check a single case under one calling style
    async fn check_case(&self, scenario: &Scenario, case: &Case, style: CallStyle) -> CaseResult {
        let (observed, detail) = match style {
            CallStyle::Predicate => {
                if is_valid_with(&scenario.schema, &case.input, &self.options) {
                    (Observed::Accepted, None)
                } else {
                    (Observed::Rejected { codes: Vec::new() }, None)
                }
            }
            CallStyle::Strict => match parse_with(&scenario.schema, &case.input, &self.options) {
                Ok(_) => (Observed::Accepted, None),
                Err(err) => rejection(err.issues()),
            },
            CallStyle::Async => {
                let result = validate_async_with(&scenario.schema, &case.input, &self.options).await;
                if result.is_success() {
                    (Observed::Accepted, None)
                } else {
                    rejection(result.issues())
                }
            }
        };

        CaseResult {
            scenario: scenario.name.clone(),
            case: case.label.clone(),
            style,
            expected: case.expect,
            observed,
            detail,
        }
    }
}

fn rejection(issues: &[ValidationIssue]) -> (Observed, Option<String>) {
    let detail = issues.first().map(|issue| issue.to_string());
    let codes = issues.iter().map(|issue| issue.code).collect();
    (Observed::Rejected { codes }, detail)
}

impl Default for CompatTestHarness {
    fn default() -> Self {
        Self::new(ValidateOptions::default())
    }
}
