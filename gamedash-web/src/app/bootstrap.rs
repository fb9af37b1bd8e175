use std::collections::BTreeSet;
use std::rc::Rc;

use gamedash_core::{Dataset, YearRange};
use yew::prelude::*;

use crate::app::state::AppState;
use crate::charts::initial_year_range;

#[derive(Clone)]
struct BootstrapHandles {
    dataset: UseStateHandle<Option<Rc<Dataset>>>,
    load_error: UseStateHandle<Option<String>>,
    genres: UseStateHandle<BTreeSet<String>>,
    ratings: UseStateHandle<BTreeSet<String>>,
    years: UseStateHandle<Option<YearRange>>,
}

fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        dataset: app_state.dataset.clone(),
        load_error: app_state.load_error.clone(),
        genres: app_state.genres.clone(),
        ratings: app_state.ratings.clone(),
        years: app_state.years.clone(),
    }
}

/// Parse the embedded dataset asset and seed the reactive state.
///
/// Runs exactly once per app lifetime; a structural dataset problem is fatal
/// for the dashboard, which then renders the error instead of controls.
fn bootstrap_load(handles: &BootstrapHandles) {
    match Dataset::load_from_static() {
        Ok(dataset) => {
            let dataset = Rc::new(dataset);
            handles.genres.set(BTreeSet::new());
            handles.ratings.set(BTreeSet::new());
            handles.years.set(Some(initial_year_range(dataset.year_span())));
            handles.dataset.set(Some(dataset));
        }
        Err(err) => {
            log::error!("dataset failed to load: {err}");
            handles.load_error.set(Some(err.to_string()));
        }
    }
}

#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        bootstrap_load(&handles);
        || {}
    });
}
