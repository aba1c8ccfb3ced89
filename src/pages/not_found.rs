use gloo::console::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_effect_with((), |_| {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        warn!(format!("no page for {path:?}"));
        || ()
    });

    html! {
        <main class="wrap">
            <h1 class="h1">{ "Page not found" }</h1>
            <p class="sub">{ "That page doesn't exist or has moved." }</p>
            <Link<Route> to={Route::Home} classes="chip">{ "Back home" }</Link<Route>>
        </main>
    }
}
