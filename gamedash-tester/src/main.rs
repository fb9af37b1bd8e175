mod reports;
mod scenarios;
mod sweeps;

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use gamedash_core::Dataset;
use log::info;

use reports::{generate_console_report, generate_json_report, generate_markdown_report};
use scenarios::{SCENARIOS, ScenarioResult, run_scenario};

#[derive(Debug, Parser)]
#[command(name = "gamedash-tester", version)]
#[command(about = "Headless QA for the gamedash dashboard core - fixtures and property sweeps")]
struct Args {
    /// Dataset to load (CSV with the dashboard's fixed schema)
    #[arg(long, default_value = "gamedash-web/static/assets/data/games.csv")]
    dataset: PathBuf,

    /// Scenarios to run (comma-separated), or "all"
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds for the randomized sweeps (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Iterations per seed for the randomized sweeps
    #[arg(long, default_value_t = 100)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Optional path to write a json/markdown report instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_scenarios {
        println!("Available scenarios:");
        for (key, description) in SCENARIOS {
            println!("  {key:20} - {description}");
        }
        return Ok(());
    }

    println!("{}", "Gamedash Tester".bright_cyan().bold());
    println!("{}", "===============".cyan());

    let dataset = load_dataset(&args.dataset)?;
    info!(
        "dataset {} loaded with {} records",
        args.dataset.display(),
        dataset.len()
    );

    let seeds = parse_seeds(&args.seeds)?;
    let start_time = Instant::now();

    let mut results: Vec<ScenarioResult> = Vec::new();
    for name in expand_scenarios(&args.scenarios) {
        if args.verbose {
            println!("Running {}...", name.bold());
        }
        let result = run_scenario(&name, &dataset, &seeds, args.iterations)?;
        if args.verbose {
            println!(
                "  {} checks, {} failures",
                result.checks_run,
                result.failures.len()
            );
        }
        results.push(result);
    }

    write_report(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let file =
        File::open(path).with_context(|| format!("cannot open dataset {}", path.display()))?;
    Dataset::from_csv_reader(file)
        .with_context(|| format!("cannot load dataset {}", path.display()))
}

fn parse_seeds(seeds_arg: &str) -> Result<Vec<u64>> {
    split_csv(seeds_arg)
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed {token:?}"))
        })
        .collect()
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.contains(&"all".to_string()) {
        scenarios.retain(|s| s != "all");
        scenarios.extend(SCENARIOS.iter().map(|(key, _)| (*key).to_string()));
    }
    scenarios.dedup();
    scenarios
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn write_report(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let rendered = match args.report.as_str() {
        "json" => Some(generate_json_report(results)?),
        "markdown" => Some(generate_markdown_report(results)),
        _ => {
            generate_console_report(results, start_time.elapsed());
            None
        }
    };
    if let Some(content) = rendered {
        match &args.output {
            Some(path) => {
                let mut file = File::create(path)
                    .with_context(|| format!("cannot write report to {}", path.display()))?;
                file.write_all(content.as_bytes())?;
            }
            None => println!("{content}"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_empties() {
        assert_eq!(split_csv("smoke, full-sweep ,"), ["smoke", "full-sweep"]);
    }

    #[test]
    fn all_expands_to_the_full_catalog() {
        let expanded = expand_scenarios("all");
        for (key, _) in SCENARIOS {
            assert!(expanded.contains(&key.to_string()));
        }
    }

    #[test]
    fn seeds_parse_or_fail_loudly() {
        assert_eq!(parse_seeds("1337,42").unwrap(), [1337, 42]);
        assert!(parse_seeds("not-a-seed").is_err());
    }
}
