//! Randomized and exhaustive property sweeps over a loaded dataset.

use gamedash_core::{
    Dataset, Selection, YearRange, aggregate_by_year_platform, count, score_pairs,
};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Outcome of one sweep: how many property checks ran and which failed.
#[derive(Debug, Default)]
pub struct SweepOutcome {
    pub checks_run: usize,
    pub failures: Vec<String>,
}

impl SweepOutcome {
    pub(crate) fn check(&mut self, ok: bool, failure: impl FnOnce() -> String) {
        self.checks_run += 1;
        if !ok {
            self.failures.push(failure());
        }
    }
}

/// Draw a random selection over the dataset's catalogs.
///
/// Deliberately skews toward interesting shapes: most draws pick a few
/// genres and ratings, and roughly one in ten clears a dropdown entirely to
/// exercise the show-nothing branch.
pub fn random_selection(rng: &mut ChaCha8Rng, dataset: &Dataset) -> Selection {
    let span = dataset.year_span();
    let a = rng.gen_range(span.min()..=span.max());
    let b = rng.gen_range(span.min()..=span.max());
    let mut selection = Selection::new(YearRange::new(a, b));

    for genre in dataset.genres() {
        if rng.gen_bool(0.4) {
            selection.genres.insert(genre.clone());
        }
    }
    for rating in dataset.ratings() {
        if rng.gen_bool(0.5) {
            selection.ratings.insert(rating.clone());
        }
    }
    if rng.gen_bool(0.1) {
        selection.genres.clear();
    }
    if rng.gen_bool(0.1) {
        selection.ratings.clear();
    }
    selection
}

/// Check one selection against the filter and aggregation contract.
pub fn check_selection(dataset: &Dataset, selection: &Selection, outcome: &mut SweepOutcome) {
    let subset = dataset.filter(selection);

    if !selection.has_selection() {
        outcome.check(subset.is_empty(), || {
            format!("empty selection produced {} records: {selection:?}", subset.len())
        });
        return;
    }

    outcome.check(
        subset.iter().all(|record| selection.matches(record)),
        || format!("record outside the selection predicate: {selection:?}"),
    );
    outcome.check(count(&subset) == subset.len(), || {
        format!("count disagrees with subset length for {selection:?}")
    });

    let total: usize = aggregate_by_year_platform(&subset).iter().map(|g| g.count).sum();
    outcome.check(total == subset.len(), || {
        format!(
            "aggregation counts sum to {total}, subset has {}: {selection:?}",
            subset.len()
        )
    });
    outcome.check(score_pairs(&subset).len() == subset.len(), || {
        format!("score pairs do not cover the subset for {selection:?}")
    });

    // Pure function: a second application must agree with the first.
    outcome.check(dataset.filter(selection) == subset, || {
        format!("filter is not deterministic for {selection:?}")
    });
}

/// Seeded random-selection sweep.
pub fn property_sweep(dataset: &Dataset, seeds: &[u64], iterations: usize) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();
    for &seed in seeds {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..iterations {
            let selection = random_selection(&mut rng, dataset);
            check_selection(dataset, &selection, &mut outcome);
        }
    }
    outcome
}

/// Exhaustive single-genre x single-rating sweep over the full year span.
///
/// Every record carries exactly one genre and one rating, so the subset
/// sizes across all pairs must partition the dataset.
pub fn partition_sweep(dataset: &Dataset) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();
    let span = dataset.year_span();
    let mut covered = 0_usize;

    for genre in dataset.genres() {
        for rating in dataset.ratings() {
            let selection = Selection::new(span)
                .with_genre(genre.clone())
                .with_rating(rating.clone());
            let subset = dataset.filter(&selection);
            outcome.check(
                subset.iter().all(|record| selection.matches(record)),
                || format!("record outside the {genre}/{rating} cell"),
            );
            covered += subset.len();
        }
    }
    outcome.check(covered == dataset.len(), || {
        format!(
            "genre x rating cells cover {covered} records, dataset has {}",
            dataset.len()
        )
    });
    outcome
}
