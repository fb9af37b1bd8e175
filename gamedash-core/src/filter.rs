//! The selection filter shared by every dashboard output.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::record::GameRecord;

/// Inclusive `[min, max]` release-year window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    min: u16,
    max: u16,
}

impl YearRange {
    /// Build a range from two ends given in either order.
    #[must_use]
    pub const fn new(a: u16, b: u16) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    #[must_use]
    pub const fn min(&self) -> u16 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Inclusive on both ends.
    #[must_use]
    pub const fn contains(&self, year: u16) -> bool {
        self.min <= year && year <= self.max
    }

    /// Clamp `year` into the range.
    #[must_use]
    pub const fn clamp(&self, year: u16) -> u16 {
        if year < self.min {
            self.min
        } else if year > self.max {
            self.max
        } else {
            year
        }
    }
}

/// The user's current dropdown and slider choices.
///
/// Genre and rating selections are proper sets of category labels. A single
/// pick is inserted as a one-element set, never split into tokens, so
/// multi-word labels like `"Role-Playing"` filter correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub genres: BTreeSet<String>,
    pub ratings: BTreeSet<String>,
    pub years: YearRange,
}

impl Selection {
    /// Start with nothing selected over the given year window.
    #[must_use]
    pub fn new(years: YearRange) -> Self {
        Self {
            genres: BTreeSet::new(),
            ratings: BTreeSet::new(),
            years,
        }
    }

    /// Add one genre to the selection.
    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.insert(genre.into());
        self
    }

    /// Add one rating to the selection.
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.ratings.insert(rating.into());
        self
    }

    /// Whether both dropdowns have at least one value chosen.
    ///
    /// An empty genre or rating dropdown is a deliberate "show nothing"
    /// state, not "show all".
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.genres.is_empty() && !self.ratings.is_empty()
    }

    /// Whether a single record passes the filter predicate.
    #[must_use]
    pub fn matches(&self, record: &GameRecord) -> bool {
        self.genres.contains(&record.genre)
            && self.ratings.contains(&record.rating)
            && self.years.contains(record.year)
    }
}

impl Dataset {
    /// Apply a selection to the full record set.
    ///
    /// Returns the empty subset when either dropdown has nothing selected;
    /// otherwise exactly the records whose genre and rating are selected and
    /// whose release year lies in the inclusive window. Matching records
    /// keep their dataset order.
    #[must_use]
    pub fn filter(&self, selection: &Selection) -> Vec<&GameRecord> {
        if !selection.has_selection() {
            return Vec::new();
        }
        self.records()
            .iter()
            .filter(|record| selection.matches(record))
            .collect()
    }
}
