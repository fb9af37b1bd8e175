//! SSR renders of the dashboard page across selection states.

use std::rc::Rc;

use futures::executor::block_on;
use gamedash_core::{Dataset, GameRecord, YearRange};
use gamedash_web::pages::dashboard::{DashboardPage, DashboardPageProps};
use yew::{Callback, LocalServerRenderer};

fn record(genre: &str, rating: &str, platform: &str, year: u16) -> GameRecord {
    GameRecord {
        genre: genre.to_string(),
        rating: rating.to_string(),
        platform: platform.to_string(),
        year,
        critic_score: 85.0,
        user_score: 8.0,
    }
}

fn contract_dataset() -> Rc<Dataset> {
    Rc::new(Dataset::from_records(vec![
        record("RPG", "E", "PC", 2001),
        record("RPG", "E", "PC", 2003),
        record("Action", "M", "PS2", 2001),
    ]))
}

fn props(
    dataset: Rc<Dataset>,
    genres: &[&str],
    ratings: &[&str],
    years: YearRange,
) -> DashboardPageProps {
    DashboardPageProps {
        dataset,
        genres: genres.iter().map(|g| (*g).to_string()).collect(),
        ratings: ratings.iter().map(|r| (*r).to_string()).collect(),
        years,
        on_genre_toggle: Callback::noop(),
        on_rating_toggle: Callback::noop(),
        on_years_change: Callback::noop(),
    }
}

fn render(props: DashboardPageProps) -> String {
    block_on(LocalServerRenderer::<DashboardPage>::with_props(props).render())
}

#[test]
fn no_selection_renders_zero_count_and_no_charts() {
    let html = render(props(
        contract_dataset(),
        &[],
        &[],
        YearRange::new(2000, 2010),
    ));
    assert!(html.contains("The number of selected games is 0"));
    assert!(!html.contains("<svg"));
    // The controls stay usable regardless.
    assert!(html.contains("Select a genre"));
    assert!(html.contains("Select a rating type"));
}

#[test]
fn rating_only_selection_still_renders_nothing() {
    let html = render(props(
        contract_dataset(),
        &[],
        &["E"],
        YearRange::new(2000, 2010),
    ));
    assert!(html.contains("The number of selected games is 0"));
    assert!(!html.contains("<svg"));
}

#[test]
fn narrow_selection_renders_both_charts_and_the_count() {
    let html = render(props(
        contract_dataset(),
        &["RPG"],
        &["E"],
        YearRange::new(2000, 2002),
    ));
    assert!(html.contains("The number of selected games is 1"));
    assert!(html.contains("Games distribution by year of release and platform"));
    assert!(html.contains("Critics and users scores"));
    assert_eq!(html.matches("<svg").count(), 2);
}

#[test]
fn wide_selection_covers_every_contract_record() {
    let html = render(props(
        contract_dataset(),
        &["RPG", "Action"],
        &["E", "M"],
        YearRange::new(2000, 2010),
    ));
    assert!(html.contains("The number of selected games is 3"));
    assert!(html.contains("data-platform=\"PC\""));
    assert!(html.contains("data-platform=\"PS2\""));
}

#[test]
fn dashboard_renders_dropdowns_from_the_dataset_catalog() {
    let dataset = Rc::new(Dataset::load_from_static().expect("shipped dataset loads"));
    let span = dataset.year_span();
    let html = render(props(dataset.clone(), &[], &[], span));
    for genre in dataset.genres() {
        assert!(html.contains(genre.as_str()), "missing genre option {genre}");
    }
    for rating in dataset.ratings() {
        assert!(html.contains(rating.as_str()), "missing rating option {rating}");
    }
}

#[test]
fn year_slider_reflects_the_selected_window() {
    let html = render(props(
        contract_dataset(),
        &["RPG"],
        &["E"],
        YearRange::new(2001, 2003),
    ));
    assert!(html.contains("2001 - 2003"));
}

#[test]
fn selection_outside_the_year_window_is_empty() {
    let dataset = Rc::new(Dataset::from_records(vec![record("RPG", "E", "PC", 2005)]));
    let html = render(props(dataset, &["RPG"], &["E"], YearRange::new(2000, 2004)));
    assert!(html.contains("The number of selected games is 0"));
    assert!(!html.contains("<svg"));
}

#[test]
fn selected_genres_render_checked() {
    let html = render(props(
        contract_dataset(),
        &["RPG"],
        &["E"],
        YearRange::new(2000, 2010),
    ));
    assert!(html.contains("checked"));
}
