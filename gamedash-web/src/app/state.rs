use std::collections::BTreeSet;
use std::rc::Rc;

use gamedash_core::{Dataset, YearRange};
use yew::prelude::*;

/// Everything the dashboard tracks across interactions: the immutable
/// dataset (once loaded) and the three reactive inputs.
#[derive(Clone)]
pub struct AppState {
    pub dataset: UseStateHandle<Option<Rc<Dataset>>>,
    pub load_error: UseStateHandle<Option<String>>,
    pub genres: UseStateHandle<BTreeSet<String>>,
    pub ratings: UseStateHandle<BTreeSet<String>>,
    pub years: UseStateHandle<Option<YearRange>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        dataset: use_state(|| None),
        load_error: use_state(|| None),
        genres: use_state(BTreeSet::new),
        ratings: use_state(BTreeSet::new),
        years: use_state(|| None),
    }
}
