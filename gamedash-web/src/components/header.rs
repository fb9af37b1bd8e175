use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="dashboard-header">
            <h1>{ "Games dashboard" }</h1>
            <p class="intro">
                { "The dashboard reflects different games characteristics. \
                   To get started and view games distribution select genre and rating below." }
            </p>
        </header>
    }
}
