//! Scenario report generation

use crate::metrics::CompatMetrics;
use crate::scenario::Scenario;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Per-scenario row of the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub description: String,
    pub checks: usize,
    pub passed: usize,
}

/// Scenario run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatReport {
    /// Per-scenario rows in run order
    pub scenarios: Vec<ScenarioSummary>,

    /// Full run metrics
    pub metrics: CompatMetrics,
}

impl CompatReport {
    /// Create a new report from run metrics
    pub fn new(scenarios: &[Scenario], metrics: CompatMetrics) -> Self {
        let scenarios = scenarios
            .iter()
            .map(|scenario| {
                let results: Vec<_> = metrics.scenario_results(&scenario.name).collect();
                ScenarioSummary {
                    name: scenario.name.clone(),
                    description: scenario.description.clone(),
                    checks: results.len(),
                    passed: results.iter().filter(|r| r.passed()).count(),
                }
            })
            .collect();

        Self { scenarios, metrics }
    }

    /// Generate a human-readable terminal report
    pub fn print_terminal_report(&self) {
        println!("\n{}", "╔══════════════════════════════════════════════════════════════════╗".cyan());
        println!("{}", "║       shapecheck Scenario Report                                 ║".cyan().bold());
        println!("{}", "╚══════════════════════════════════════════════════════════════════╝".cyan());

        // Per-scenario breakdown
        println!("\n{}", "Scenarios:".bold());
        for summary in &self.scenarios {
            let mark = if summary.passed == summary.checks {
                "✓".green()
            } else {
                "✗".red()
            };
            println!(
                "  {} {:<16} {}/{}  {}",
                mark,
                summary.name.green(),
                summary.passed,
                summary.checks,
                summary.description.dimmed()
            );

            for result in self.metrics.scenario_results(&summary.name) {
                let status = if result.passed() { "ok".green() } else { "FAIL".red() };
                println!(
                    "      {:<28} {:<10} expected {:<28} observed {} [{}]",
                    result.case,
                    result.style.to_string().yellow(),
                    result.expected.to_string(),
                    result.observed,
                    status
                );
            }
        }

        // Aggregate stats
        println!("\n{}", "Aggregate Statistics:".bold());
        println!("  Total Checks:                {}", self.metrics.total_checks);
        println!("  Passed:                      {}", self.metrics.passed);
        println!("  Failed:                      {}", self.metrics.failed);
        println!("  Pass Rate:                   {:.1}%", self.metrics.pass_rate() * 100.0);

        let top_codes = self.metrics.top_issue_codes(5);
        if !top_codes.is_empty() {
            println!("  Top Issue Codes:");
            for (code, count) in top_codes {
                println!("    {} - {} occurrences", code.yellow(), count);
            }
        }

        let disagreements = self.metrics.style_disagreements();
        if !disagreements.is_empty() {
            println!("\n{}", "Calling Style Disagreements:".bold());
            for (scenario, case) in disagreements {
                println!("  {} {}", scenario.red(), case);
            }
        }

        if !self.metrics.failure_samples.is_empty() {
            println!("\n{}", "Failure Samples:".bold());
            let mut scenarios: Vec<_> = self.metrics.failure_samples.keys().collect();
            scenarios.sort();
            for scenario in scenarios {
                for sample in &self.metrics.failure_samples[scenario] {
                    println!("  {} {}", scenario.red(), sample.dimmed());
                }
            }
        }

        // Summary
        println!("\n{}", "Summary:".bold());
        if self.metrics.all_passed() {
            println!("  {} All documented behaviors reproduced", "✓".green());
        } else {
            println!("  {} {} check(s) diverged from documented behavior", "✗".red(), self.metrics.failed);
        }

        println!();
    }

    /// Export report as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export report as JSON to file
    pub fn save_json(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        let json = self.to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
