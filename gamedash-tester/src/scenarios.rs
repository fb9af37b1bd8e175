//! Scenario catalog: named check suites the CLI can run.

use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use gamedash_core::{
    Dataset, GameRecord, Selection, YearRange, aggregate_by_year_platform, count,
};
use serde::Serialize;

use crate::sweeps::{self, SweepOutcome};

/// Scenario keys and the one-line descriptions `--list-scenarios` prints.
pub const SCENARIOS: [(&str, &str); 3] = [
    ("smoke", "contract fixtures plus a sanity pass over the loaded dataset"),
    (
        "filter-properties",
        "seeded random selections checked against the filter contract",
    ),
    (
        "full-sweep",
        "exhaustive genre x rating sweep; subset sizes must partition the dataset",
    ),
];

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub checks_run: usize,
    pub failures: Vec<String>,
    pub duration: Duration,
}

impl ScenarioResult {
    fn from_outcome(name: &str, outcome: SweepOutcome, started: Instant) -> Self {
        Self {
            scenario_name: name.to_string(),
            passed: outcome.failures.is_empty(),
            checks_run: outcome.checks_run,
            failures: outcome.failures,
            duration: started.elapsed(),
        }
    }
}

/// Run one scenario by key.
///
/// # Errors
///
/// Returns an error for an unknown scenario key.
pub fn run_scenario(
    name: &str,
    dataset: &Dataset,
    seeds: &[u64],
    iterations: usize,
) -> Result<ScenarioResult> {
    let started = Instant::now();
    let outcome = match name {
        "smoke" => smoke(dataset),
        "filter-properties" => sweeps::property_sweep(dataset, seeds, iterations),
        "full-sweep" => sweeps::partition_sweep(dataset),
        _ => bail!("unknown scenario {name:?}; try --list-scenarios"),
    };
    Ok(ScenarioResult::from_outcome(name, outcome, started))
}

fn fixture(genre: &str, rating: &str, platform: &str, year: u16, critic: f32, user: f32) -> GameRecord {
    GameRecord {
        genre: genre.to_string(),
        rating: rating.to_string(),
        platform: platform.to_string(),
        year,
        critic_score: critic,
        user_score: user,
    }
}

/// The fixed dashboard-contract fixtures plus dataset sanity checks.
fn smoke(dataset: &Dataset) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();
    let contract = Dataset::from_records(vec![
        fixture("RPG", "E", "PC", 2001, 80.0, 7.5),
        fixture("RPG", "E", "PC", 2003, 85.0, 8.0),
        fixture("Action", "M", "PS2", 2001, 90.0, 9.0),
    ]);

    // Single genre and rating over 2000-2002 narrows to the one 2001 RPG.
    let narrow = Selection::new(YearRange::new(2000, 2002))
        .with_genre("RPG")
        .with_rating("E");
    let subset = contract.filter(&narrow);
    outcome.check(count(&subset) == 1, || "narrow fixture count failed".to_string());
    outcome.check(
        subset.first().is_some_and(|r| r.year == 2001 && r.platform == "PC"),
        || "narrow fixture record identity failed".to_string(),
    );
    let groups = aggregate_by_year_platform(&subset);
    outcome.check(
        groups.len() == 1
            && groups[0].year == 2001
            && groups[0].platform == "PC"
            && groups[0].count == 1,
        || "narrow fixture aggregation failed".to_string(),
    );

    // No genre selected shows nothing, even with a rating picked.
    let no_genre = Selection::new(YearRange::new(2000, 2010)).with_rating("E");
    outcome.check(contract.filter(&no_genre).is_empty(), || {
        "empty genre selection failed".to_string()
    });

    // Everything selected covers all three records and all three groups.
    let wide = Selection::new(YearRange::new(2000, 2010))
        .with_genre("RPG")
        .with_genre("Action")
        .with_rating("E")
        .with_rating("M");
    let wide_subset = contract.filter(&wide);
    outcome.check(count(&wide_subset) == 3, || "wide fixture count failed".to_string());
    let wide_groups: Vec<(u16, String, usize)> = aggregate_by_year_platform(&wide_subset)
        .into_iter()
        .map(|g| (g.year, g.platform, g.count))
        .collect();
    outcome.check(
        wide_groups
            == [
                (2001, "PC".to_string(), 1),
                (2001, "PS2".to_string(), 1),
                (2003, "PC".to_string(), 1),
            ],
        || "wide fixture aggregation failed".to_string(),
    );

    // Sanity over the dataset the CLI actually loaded.
    outcome.check(!dataset.is_empty(), || "loaded dataset is empty".to_string());
    outcome.check(
        !dataset.genres().is_empty() && !dataset.ratings().is_empty(),
        || "loaded dataset has empty catalogs".to_string(),
    );
    let span = dataset.year_span();
    outcome.check(
        dataset.records().iter().all(|r| span.contains(r.year)),
        || "year span misses a record".to_string(),
    );
    outcome
}
