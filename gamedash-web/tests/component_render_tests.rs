//! SSR renders of the individual dashboard components.

use std::collections::BTreeSet;

use futures::executor::block_on;
use gamedash_core::{PlatformYearCount, ScorePair, YearRange};
use gamedash_web::charts;
use gamedash_web::components::charts::area::{AreaChart, AreaChartProps};
use gamedash_web::components::charts::scatter::{ScatterChart, ScatterChartProps};
use gamedash_web::components::multi_select::{MultiSelect, MultiSelectProps};
use gamedash_web::components::year_slider::{YearSlider, YearSliderProps};
use yew::{AttrValue, Callback, LocalServerRenderer};

fn row(year: u16, platform: &str, count: usize) -> PlatformYearCount {
    PlatformYearCount {
        year,
        platform: platform.to_string(),
        count,
    }
}

fn pair(user: f32, critic: f32, genre: &str) -> ScorePair {
    ScorePair {
        user_score: user,
        critic_score: critic,
        genre: genre.to_string(),
    }
}

#[test]
fn area_chart_legend_lists_every_platform() {
    let spec = charts::area_chart(&[
        row(2001, "PC", 1),
        row(2002, "Wii", 3),
        row(2002, "X360", 2),
    ])
    .expect("non-empty rows");
    let html = block_on(
        LocalServerRenderer::<AreaChart>::with_props(AreaChartProps { spec }).render(),
    );
    for platform in ["PC", "Wii", "X360"] {
        assert!(html.contains(platform), "legend missing {platform}");
    }
    assert_eq!(html.matches("<polygon").count(), 3);
    assert!(html.contains("Year of release"));
    assert!(html.contains("Number of games"));
}

#[test]
fn scatter_chart_renders_axis_labels_and_points() {
    let spec =
        charts::scatter_chart(&[pair(8.0, 85.0, "RPG"), pair(3.4, 88.0, "Shooter")])
            .expect("non-empty pairs");
    let html = block_on(
        LocalServerRenderer::<ScatterChart>::with_props(ScatterChartProps { spec }).render(),
    );
    assert_eq!(html.matches("<circle").count(), 2);
    assert!(html.contains("User score"));
    assert!(html.contains("Critic score"));
}

#[test]
fn multi_select_marks_options_only_when_selected() {
    let props = |selected: BTreeSet<String>| MultiSelectProps {
        label: AttrValue::from("Rating"),
        placeholder: AttrValue::from("Select a rating type"),
        options: vec![
            AttrValue::from("E"),
            AttrValue::from("M"),
            AttrValue::from("T"),
        ],
        selected,
        on_toggle: Callback::noop(),
    };
    let unselected = block_on(
        LocalServerRenderer::<MultiSelect>::with_props(props(BTreeSet::new())).render(),
    );
    assert!(!unselected.contains("checked"));

    let selected = block_on(
        LocalServerRenderer::<MultiSelect>::with_props(props(BTreeSet::from(["M".to_string()])))
            .render(),
    );
    assert!(selected.contains("checked"));
}

#[test]
fn year_slider_renders_one_mark_per_year() {
    let props = YearSliderProps {
        span: YearRange::new(2000, 2003),
        marks: vec![2000, 2001, 2002, 2003],
        value: YearRange::new(2000, 2002),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<YearSlider>::with_props(props).render());
    assert_eq!(html.matches("class=\"mark\"").count(), 4);
}
