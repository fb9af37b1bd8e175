//! Gamedash core
//!
//! Platform-agnostic data logic for the gamedash dashboard: loading and
//! cleaning the games dataset, applying the user's genre/rating/year
//! selection, and deriving the rows the charts are built from. This crate
//! has no UI or platform-specific dependencies.

pub mod aggregate;
pub mod dataset;
pub mod filter;
pub mod record;

// Re-export commonly used types
pub use aggregate::{PlatformYearCount, ScorePair, aggregate_by_year_platform, count, score_pairs};
pub use dataset::{Dataset, DatasetError, REQUIRED_COLUMNS};
pub use filter::{Selection, YearRange};
pub use record::{GameRecord, MIN_YEAR, RawRow};
