//! Report rendering for scenario results.

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;

use crate::scenarios::ScenarioResult;

pub fn generate_console_report(results: &[ScenarioResult], total_duration: Duration) {
    println!();
    println!("{}", "Scenario Results Summary".bright_cyan().bold());
    println!("{}", "========================".cyan());

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = total - passed;

    println!("Total scenarios: {total}");
    println!("Passed: {}", passed.to_string().green());
    println!("Failed: {}", failed.to_string().red());
    println!("Total time: {total_duration:?}");
    println!();

    for result in results {
        let status = if result.passed {
            "PASS".green()
        } else {
            "FAIL".red()
        };
        println!("{} {}", status, result.scenario_name.bold());
        println!("   Checks: {}", result.checks_run);
        println!("   Time: {:?}", result.duration);
        if !result.failures.is_empty() {
            println!("   Failures:");
            for failure in &result.failures {
                println!("     - {}", failure.red());
            }
        }
        println!();
    }
}

/// Render the results as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn generate_json_report(results: &[ScenarioResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[must_use]
pub fn generate_markdown_report(results: &[ScenarioResult]) -> String {
    let mut out = String::from("# Gamedash Scenario Results\n\n");

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **Total scenarios**: {total}\n"));
    out.push_str(&format!("- **Passed**: {passed}\n"));
    out.push_str(&format!("- **Failed**: {}\n\n", total - passed));

    out.push_str("## Detailed Results\n\n");
    for result in results {
        let status = if result.passed { "PASS" } else { "FAIL" };
        out.push_str(&format!("### {} {}\n\n", status, result.scenario_name));
        out.push_str(&format!("- **Checks**: {}\n", result.checks_run));
        out.push_str(&format!("- **Time**: {:?}\n", result.duration));
        if !result.failures.is_empty() {
            out.push_str("- **Failures**:\n");
            for failure in &result.failures {
                out.push_str(&format!("  - {failure}\n"));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: name.to_string(),
            passed,
            checks_run: 5,
            failures: if passed {
                Vec::new()
            } else {
                vec!["narrow fixture count failed".to_string()]
            },
            duration: Duration::from_millis(12),
        }
    }

    #[test]
    fn json_report_round_trips_through_serde() {
        let json = generate_json_report(&[result("smoke", true)]).unwrap();
        assert!(json.contains("\"scenario_name\": \"smoke\""));
        assert!(json.contains("\"passed\": true"));
    }

    #[test]
    fn markdown_report_lists_failures() {
        let md = generate_markdown_report(&[result("smoke", true), result("full-sweep", false)]);
        assert!(md.contains("### PASS smoke"));
        assert!(md.contains("### FAIL full-sweep"));
        assert!(md.contains("narrow fixture count failed"));
    }
}
