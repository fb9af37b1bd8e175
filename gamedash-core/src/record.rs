use serde::{Deserialize, Serialize};

/// Earliest release year the loader keeps.
pub const MIN_YEAR: u16 = 2000;

/// One cleaned row of the games dataset.
///
/// Only the loader constructs these; every field is present and `year` is
/// at least [`MIN_YEAR`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub genre: String,
    pub rating: String,
    pub platform: String,
    pub year: u16,
    pub critic_score: f32,
    pub user_score: f32,
}

/// Serde image of one raw CSV row.
///
/// Every field is optional so partial rows deserialize instead of erroring;
/// [`RawRow::clean`] decides whether the row survives. Columns outside this
/// set (Name, Publisher, sales figures) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Rating")]
    pub rating: Option<String>,
    #[serde(rename = "Platform")]
    pub platform: Option<String>,
    #[serde(rename = "Year_of_Release")]
    pub year_of_release: Option<f64>,
    #[serde(rename = "Critic_Score")]
    pub critic_score: Option<f64>,
    // Kept textual: the source data uses "tbd" for unrated games.
    #[serde(rename = "User_Score")]
    pub user_score: Option<String>,
}

impl RawRow {
    /// Promote a raw row to a clean record.
    ///
    /// Returns `None` when any required field is absent or unparsable, when
    /// `User_Score` is the `"tbd"` sentinel, or when the release year
    /// predates [`MIN_YEAR`]. Fractional years (`"2006.0"`) are truncated to
    /// the integer year.
    #[must_use]
    pub fn clean(self) -> Option<GameRecord> {
        let genre = non_empty(self.genre)?;
        let rating = non_empty(self.rating)?;
        let platform = non_empty(self.platform)?;
        let year = normalize_year(self.year_of_release?)?;
        let critic_score = self.critic_score? as f32;
        let user_score = non_empty(self.user_score)?.trim().parse::<f32>().ok()?;
        Some(GameRecord {
            genre,
            rating,
            platform,
            year,
            critic_score,
            user_score,
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

fn normalize_year(raw: f64) -> Option<u16> {
    if !raw.is_finite() {
        return None;
    }
    let year = u16::try_from(raw.trunc() as i64).ok()?;
    (year >= MIN_YEAR).then_some(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> RawRow {
        RawRow {
            genre: Some("Role-Playing".to_string()),
            rating: Some("E".to_string()),
            platform: Some("PC".to_string()),
            year_of_release: Some(2006.0),
            critic_score: Some(85.0),
            user_score: Some("8.2".to_string()),
        }
    }

    #[test]
    fn clean_keeps_a_full_row() {
        let record = full_row().clean().expect("row is complete");
        assert_eq!(record.genre, "Role-Playing");
        assert_eq!(record.year, 2006);
        assert!((record.user_score - 8.2).abs() < f32::EPSILON);
    }

    #[test]
    fn clean_truncates_fractional_years() {
        let mut row = full_row();
        row.year_of_release = Some(2003.0 + 0.9);
        assert_eq!(row.clean().map(|r| r.year), Some(2003));
    }

    #[test]
    fn clean_drops_rows_missing_any_required_field() {
        let strips: [fn(&mut RawRow); 6] = [
            |r| r.genre = None,
            |r| r.rating = Some("  ".to_string()),
            |r| r.platform = None,
            |r| r.year_of_release = None,
            |r| r.critic_score = None,
            |r| r.user_score = None,
        ];
        for strip in strips {
            let mut row = full_row();
            strip(&mut row);
            assert!(row.clean().is_none());
        }
    }

    #[test]
    fn clean_drops_tbd_user_scores() {
        let mut row = full_row();
        row.user_score = Some("tbd".to_string());
        assert!(row.clean().is_none());
    }

    #[test]
    fn clean_drops_years_before_cutoff() {
        let mut row = full_row();
        row.year_of_release = Some(1999.0);
        assert!(row.clone().clean().is_none());
        row.year_of_release = Some(2000.0);
        assert_eq!(row.clean().map(|r| r.year), Some(MIN_YEAR));
    }
}
