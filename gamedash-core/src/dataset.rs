//! Dataset loading and the immutable record store.

use std::collections::BTreeSet;
use std::io::Read;

use log::info;
use thiserror::Error;

use crate::filter::YearRange;
use crate::record::{GameRecord, RawRow};

const DEFAULT_DATASET: &str = include_str!("../../gamedash-web/static/assets/data/games.csv");

/// Columns the loader refuses to run without.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Genre",
    "Rating",
    "Platform",
    "Year_of_Release",
    "Critic_Score",
    "User_Score",
];

/// Fatal dataset problems. Row-level defects are a cleaning concern and are
/// dropped silently instead.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset header is missing required column {0:?}")]
    MissingColumn(&'static str),
    #[error("dataset contains no usable records after cleaning")]
    Empty,
    #[error("dataset could not be read: {0}")]
    Csv(#[from] csv::Error),
}

/// The full record set, loaded once at startup and immutable afterwards,
/// plus the catalog data the UI builds its controls from.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<GameRecord>,
    genres: Vec<String>,
    ratings: Vec<String>,
    years: Vec<u16>,
}

impl Dataset {
    /// Load and clean a dataset from CSV bytes.
    ///
    /// Rows missing a required field, carrying a `"tbd"` user score, or
    /// released before [`crate::MIN_YEAR`] are dropped. Extra columns are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be read, lacks a required
    /// column, or if cleaning leaves no records at all.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        let mut dropped = 0_usize;
        for row in csv_reader.deserialize::<RawRow>() {
            match row.map(RawRow::clean) {
                Ok(Some(record)) => records.push(record),
                // Partial or malformed rows are data defects, not errors.
                Ok(None) | Err(_) => dropped += 1,
            }
        }
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        info!(
            "dataset loaded: {} records kept, {} dropped",
            records.len(),
            dropped
        );
        Ok(Self::from_records(records))
    }

    /// Load and clean a dataset from an in-memory CSV string.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Dataset::from_csv_reader`].
    pub fn from_csv_str(data: &str) -> Result<Self, DatasetError> {
        Self::from_csv_reader(data.as_bytes())
    }

    /// Load the dataset asset shipped with the web app.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Dataset::from_csv_reader`].
    pub fn load_from_static() -> Result<Self, DatasetError> {
        Self::from_csv_str(DEFAULT_DATASET)
    }

    /// Build a dataset from already-clean records (useful for tests).
    #[must_use]
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        let genres: BTreeSet<&str> = records.iter().map(|r| r.genre.as_str()).collect();
        let ratings: BTreeSet<&str> = records.iter().map(|r| r.rating.as_str()).collect();
        let years: BTreeSet<u16> = records.iter().map(|r| r.year).collect();
        Self {
            genres: genres.into_iter().map(str::to_string).collect(),
            ratings: ratings.into_iter().map(str::to_string).collect(),
            years: years.into_iter().collect(),
            records,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct genres, sorted, for the genre dropdown.
    #[must_use]
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Distinct ratings, sorted, for the rating dropdown.
    #[must_use]
    pub fn ratings(&self) -> &[String] {
        &self.ratings
    }

    /// Distinct release years, ascending, for the slider marks.
    #[must_use]
    pub fn years(&self) -> &[u16] {
        &self.years
    }

    /// Inclusive span of release years present in the dataset.
    #[must_use]
    pub fn year_span(&self) -> YearRange {
        match (self.years.first(), self.years.last()) {
            (Some(&min), Some(&max)) => YearRange::new(min, max),
            // Unreachable after a successful load; keep a sane fallback.
            _ => YearRange::new(crate::MIN_YEAR, crate::MIN_YEAR),
        }
    }
}
