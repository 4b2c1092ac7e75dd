//! Scenario metrics collection and tracking

use serde::{Deserialize, Serialize};
use shapecheck_core::IssueCode;
use std::collections::HashMap;

use crate::harness::CallStyle;
use crate::scenario::Expectation;

/// What a calling style observed for one case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Observed {
    /// Input was accepted
    Accepted,

    /// Input was rejected; `codes` is empty when the style only sees a boolean
    Rejected { codes: Vec<IssueCode> },
}

impl Observed {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Whether this observation satisfies an expectation
    ///
    /// A rejection without codes (predicate style) satisfies any expected
    /// rejection.
    pub fn satisfies(&self, expect: Expectation) -> bool {
        match (self, expect) {
            (Self::Accepted, Expectation::Accept) => true,
            (Self::Rejected { codes }, Expectation::Reject(code)) => {
                codes.is_empty() || codes.contains(&code)
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Observed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected { codes } if codes.is_empty() => write!(f, "rejected"),
            Self::Rejected { codes } => {
                let codes: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
                write!(f, "rejected ({})", codes.join(", "))
            }
        }
    }
}

/// Result for a single case under one calling style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseResult {
    /// Scenario name (e.g., "union")
    pub scenario: String,

    /// Case label (the input as JSON)
    pub case: String,

    pub style: CallStyle,

    pub expected: Expectation,

    pub observed: Observed,

    /// First issue message, when rejected
    pub detail: Option<String>,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        self.observed.satisfies(self.expected)
    }
}

/// Aggregate metrics for a scenario run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompatMetrics {
    /// Total number of case checks (cases x calling styles)
    pub total_checks: usize,

    /// Checks whose observation matched the expectation
    pub passed: usize,

    /// Checks whose observation did not match
    pub failed: usize,

    /// Checks that observed an accepted input
    pub accepted: usize,

    /// Checks that observed a rejected input
    pub rejected: usize,

    /// Individual results in run order
    pub results: Vec<CaseResult>,

    /// Issue codes seen in rejections with counts
    pub issue_codes: HashMap<String, usize>,

    /// Failure samples (scenario -> example messages)
    pub failure_samples: HashMap<String, Vec<String>>,
}

impl CompatMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of checks that matched their expectation (0.0 to 1.0)
    pub fn pass_rate(&self) -> f64 {
        if self.total_checks == 0 {
            return 0.0;
        }
        self.passed as f64 / self.total_checks as f64
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get top N issue codes by frequency
    pub fn top_issue_codes(&self, n: usize) -> Vec<(String, usize)> {
        let mut codes: Vec<(String, usize)> = self.issue_codes.iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        codes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        codes.into_iter().take(n).collect()
    }

    /// Cases where the calling styles disagreed on accept vs reject
    pub fn style_disagreements(&self) -> Vec<(String, String)> {
        let mut seen: HashMap<(&str, &str), bool> = HashMap::new();
        let mut disagreements = Vec::new();

        for result in &self.results {
            let key = (result.scenario.as_str(), result.case.as_str());
            match seen.get(&key) {
                Some(&accepted) if accepted != result.observed.is_accepted() => {
                    disagreements.push((result.scenario.clone(), result.case.clone()));
                }
                Some(_) => {}
                None => {
                    seen.insert(key, result.observed.is_accepted());
                }
            }
        }

        disagreements
    }

    /// Add a case result and update aggregate metrics
    pub fn add_case_result(&mut self, result: CaseResult) {
        self.total_checks += 1;

        match &result.observed {
            Observed::Accepted => self.accepted += 1,
            Observed::Rejected { codes } => {
                self.rejected += 1;
                for code in codes {
                    *self.issue_codes.entry(code.as_str().to_string()).or_insert(0) += 1;
                }
            }
        }

        if result.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
            self.record_failure(&result);
        }

        self.results.push(result);
    }

    /// Record a failure sample
    fn record_failure(&mut self, result: &CaseResult) {
        let message = format!(
            "{} [{}]: expected {}, observed {}",
            result.case, result.style, result.expected, result.observed
        );

        // Store sample (up to 3 samples per scenario)
        let samples = self.failure_samples.entry(result.scenario.clone()).or_default();
        if samples.len() < 3 {
            samples.push(message);
        }
    }

    /// Results for one scenario
    pub fn scenario_results<'a>(&'a self, scenario: &'a str) -> impl Iterator<Item = &'a CaseResult> + 'a {
        self.results.iter().filter(move |r| r.scenario == scenario)
    }
}
