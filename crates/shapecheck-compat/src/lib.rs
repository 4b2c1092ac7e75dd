//! Scenario harness for the shapecheck engine
//!
//! Replays the two-library comparison table against the engine and tracks:
//! - Whether each case is accepted or rejected as documented
//! - Which issue codes the rejections carry
//! - Agreement between the predicate, strict, and async calling styles

pub mod harness;
pub mod metrics;
pub mod report;
pub mod scenario;

pub use harness::{CallStyle, CompatTestHarness};
pub use metrics::{CaseResult, CompatMetrics, Observed};
pub use report::CompatReport;
pub use scenario::{builtin_scenarios, find_scenario, Case, Expectation, Scenario};
