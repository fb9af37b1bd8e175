use yew::prelude::*;

use crate::app::state::AppState;
use crate::pages::dashboard::DashboardPage;

/// Compose the full app shell around the dashboard.
pub fn render_app(state: &AppState) -> Html {
    html! {
        <>
            <crate::components::header::Header />
            <main id="main" role="main">
                { render_dashboard(state) }
            </main>
            <crate::components::footer::Footer />
        </>
    }
}

fn render_dashboard(state: &AppState) -> Html {
    if let Some(message) = state.load_error.as_ref() {
        return html! {
            <div class="load-error" role="alert">
                <h2>{ "The dashboard could not start" }</h2>
                <p>{ message.clone() }</p>
            </div>
        };
    }
    let (Some(dataset), Some(years)) = (state.dataset.as_ref(), *state.years) else {
        return html! { <p class="loading">{ "Loading the games dataset..." }</p> };
    };

    let on_genre_toggle = {
        let genres = state.genres.clone();
        Callback::from(move |value: String| {
            let mut next = (*genres).clone();
            if !next.remove(&value) {
                next.insert(value);
            }
            genres.set(next);
        })
    };
    let on_rating_toggle = {
        let ratings = state.ratings.clone();
        Callback::from(move |value: String| {
            let mut next = (*ratings).clone();
            if !next.remove(&value) {
                next.insert(value);
            }
            ratings.set(next);
        })
    };
    let on_years_change = {
        let years = state.years.clone();
        Callback::from(move |range| years.set(Some(range)))
    };

    html! {
        <DashboardPage
            dataset={dataset.clone()}
            genres={(*state.genres).clone()}
            ratings={(*state.ratings).clone()}
            {years}
            {on_genre_toggle}
            {on_rating_toggle}
            {on_years_change}
        />
    }
}
