//! Presentation adapter: pure builders that turn aggregation rows into the
//! chart specifications the SVG components render. Kept free of Yew so they
//! can be tested natively.

use std::collections::BTreeSet;

use gamedash_core::{PlatformYearCount, ScorePair, YearRange};

/// Plotly-style categorical palette, cycled when a chart has more series
/// than colors.
pub const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Color for the `index`-th series of a chart.
#[must_use]
pub const fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Default slider position on first load: from the earliest year up to 2002,
/// clamped into the dataset's span.
#[must_use]
pub fn initial_year_range(span: YearRange) -> YearRange {
    YearRange::new(span.min(), span.clamp(2002))
}

/// The count sentence under the dropdowns. Rendered even when nothing is
/// selected, reporting zero.
#[must_use]
pub fn count_sentence(games: usize) -> String {
    format!("The number of selected games is {games}")
}

/// One platform's counts across the chart's year axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSeries {
    pub platform: String,
    pub counts: Vec<usize>,
}

/// Spec for the stacked-area distribution chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Sorted year axis; every series has one count per entry.
    pub years: Vec<u16>,
    /// One series per platform, sorted by platform name.
    pub series: Vec<PlatformSeries>,
}

impl AreaChartSpec {
    /// Tallest stacked column, the top of the y axis.
    #[must_use]
    pub fn stacked_max(&self) -> usize {
        (0..self.years.len())
            .map(|i| self.series.iter().map(|s| s.counts[i]).sum())
            .max()
            .unwrap_or(0)
    }
}

/// Pivot `(year, platform, count)` rows into per-platform series over a
/// shared year axis, zero-filling years a platform has no games in.
///
/// Returns `None` for an empty aggregation: the caller renders nothing
/// rather than an empty-axis chart.
#[must_use]
pub fn area_chart(rows: &[PlatformYearCount]) -> Option<AreaChartSpec> {
    if rows.is_empty() {
        return None;
    }
    let years: Vec<u16> = rows.iter().map(|r| r.year).collect::<BTreeSet<_>>().into_iter().collect();
    let platforms: Vec<&str> = rows
        .iter()
        .map(|r| r.platform.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let series = platforms
        .into_iter()
        .map(|platform| PlatformSeries {
            platform: platform.to_string(),
            counts: years
                .iter()
                .map(|&year| {
                    rows.iter()
                        .find(|r| r.year == year && r.platform == platform)
                        .map_or(0, |r| r.count)
                })
                .collect(),
        })
        .collect();

    Some(AreaChartSpec {
        title: "Games distribution by year of release and platform".to_string(),
        x_label: "Year of release".to_string(),
        y_label: "Number of games".to_string(),
        years,
        series,
    })
}

/// One dot of the scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub user_score: f32,
    pub critic_score: f32,
    /// Index into the spec's legend (and the palette).
    pub genre: usize,
}

/// Spec for the critic-vs-user score scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
    /// Genres in first-appearance order; point color follows legend index.
    pub legend: Vec<String>,
}

/// Project score pairs into scatter points, assigning each genre a stable
/// legend slot in first-appearance order. `None` when the subset is empty.
#[must_use]
pub fn scatter_chart(pairs: &[ScorePair]) -> Option<ScatterChartSpec> {
    if pairs.is_empty() {
        return None;
    }
    let mut legend: Vec<String> = Vec::new();
    let points = pairs
        .iter()
        .map(|pair| {
            let genre = match legend.iter().position(|g| *g == pair.genre) {
                Some(slot) => slot,
                None => {
                    legend.push(pair.genre.clone());
                    legend.len() - 1
                }
            };
            ScatterPoint {
                user_score: pair.user_score,
                critic_score: pair.critic_score,
                genre,
            }
        })
        .collect();

    Some(ScatterChartSpec {
        title: "Critics and users scores".to_string(),
        x_label: "User score".to_string(),
        y_label: "Critic score".to_string(),
        points,
        legend,
    })
}
