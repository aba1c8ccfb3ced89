use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::LandingDisplay;
use crate::routes::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="wrap">
            <LandingDisplay />
            <nav class="nav" aria-label="Store information">
                <Link<Route> to={Route::Policies} classes="chip">{ "Store policies" }</Link<Route>>
            </nav>
        </main>
    }
}
