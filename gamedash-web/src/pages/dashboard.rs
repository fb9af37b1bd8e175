use std::collections::BTreeSet;
use std::rc::Rc;

use gamedash_core::{Dataset, Selection, YearRange, aggregate_by_year_platform, count, score_pairs};
use yew::prelude::*;

use crate::charts;
use crate::components::charts::area::AreaChart;
use crate::components::charts::scatter::ScatterChart;
use crate::components::count_banner::CountBanner;
use crate::components::multi_select::MultiSelect;
use crate::components::year_slider::YearSlider;

#[derive(Properties, Clone)]
pub struct DashboardPageProps {
    pub dataset: Rc<Dataset>,
    pub genres: BTreeSet<String>,
    pub ratings: BTreeSet<String>,
    pub years: YearRange,
    pub on_genre_toggle: Callback<String>,
    pub on_rating_toggle: Callback<String>,
    pub on_years_change: Callback<YearRange>,
}

impl PartialEq for DashboardPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dataset, &other.dataset)
            && self.genres == other.genres
            && self.ratings == other.ratings
            && self.years == other.years
    }
}

/// The dashboard: controls on top, count sentence, the two charts, and the
/// year slider. Every render recomputes filter, aggregations, and chart
/// specs from scratch; the dataset itself never changes.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let selection = Selection {
        genres: props.genres.clone(),
        ratings: props.ratings.clone(),
        years: props.years,
    };
    let subset = props.dataset.filter(&selection);
    let games = count(&subset);
    let area = charts::area_chart(&aggregate_by_year_platform(&subset));
    let scatter = charts::scatter_chart(&score_pairs(&subset));

    let genre_options: Vec<AttrValue> = props
        .dataset
        .genres()
        .iter()
        .map(|g| AttrValue::from(g.clone()))
        .collect();
    let rating_options: Vec<AttrValue> = props
        .dataset
        .ratings()
        .iter()
        .map(|r| AttrValue::from(r.clone()))
        .collect();

    html! {
        <section class="dashboard" data-testid="dashboard">
            <div class="controls">
                <MultiSelect
                    label="Genre"
                    placeholder="Select a genre"
                    options={genre_options}
                    selected={props.genres.clone()}
                    on_toggle={props.on_genre_toggle.clone()}
                />
                <MultiSelect
                    label="Rating"
                    placeholder="Select a rating type"
                    options={rating_options}
                    selected={props.ratings.clone()}
                    on_toggle={props.on_rating_toggle.clone()}
                />
            </div>
            <CountBanner {games} />
            <div class="charts">
                {
                    // An empty subset renders no chart at all, not empty axes.
                    match area {
                        Some(spec) => html! { <AreaChart {spec} /> },
                        None => Html::default(),
                    }
                }
                {
                    match scatter {
                        Some(spec) => html! { <ScatterChart {spec} /> },
                        None => Html::default(),
                    }
                }
            </div>
            <YearSlider
                span={props.dataset.year_span()}
                marks={props.dataset.years().to_vec()}
                value={props.years}
                on_change={props.on_years_change.clone()}
            />
        </section>
    }
}
