//! Derived views over a filtered subset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::GameRecord;

/// One `(year, platform)` group of the distribution aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformYearCount {
    pub year: u16,
    pub platform: String,
    pub count: usize,
}

/// One critic/user score pair, tagged with genre for chart coloring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    pub user_score: f32,
    pub critic_score: f32,
    pub genre: String,
}

/// Group a subset by `(year, platform)` and count each group.
///
/// Rows come back sorted ascending by year, then platform. An empty subset
/// produces an empty vec, the signal to render no chart at all.
#[must_use]
pub fn aggregate_by_year_platform(subset: &[&GameRecord]) -> Vec<PlatformYearCount> {
    let mut groups: BTreeMap<(u16, &str), usize> = BTreeMap::new();
    for record in subset {
        *groups.entry((record.year, record.platform.as_str())).or_insert(0) += 1;
    }
    groups
        .into_iter()
        .map(|((year, platform), count)| PlatformYearCount {
            year,
            platform: platform.to_string(),
            count,
        })
        .collect()
}

/// Project the score pairs of a subset, in subset order.
#[must_use]
pub fn score_pairs(subset: &[&GameRecord]) -> Vec<ScorePair> {
    subset
        .iter()
        .map(|record| ScorePair {
            user_score: record.user_score,
            critic_score: record.critic_score,
            genre: record.genre.clone(),
        })
        .collect()
}

/// Cardinality of a subset, for the count sentence.
#[must_use]
pub fn count(subset: &[&GameRecord]) -> usize {
    subset.len()
}
