#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let navigator = use_navigator();
    let render = {
        let app_state = app_state.clone();
        move |route: Route| match route {
            Route::Home => view::render_app(&app_state),
            Route::NotFound => {
                let navigator = navigator.clone();
                let on_go_home = Callback::from(move |()| {
                    if let Some(nav) = &navigator {
                        nav.push(&Route::Home);
                    }
                });
                html! { <crate::pages::not_found::NotFound {on_go_home} /> }
            }
        }
    };

    html! { <Switch<Route> render={render} /> }
}
