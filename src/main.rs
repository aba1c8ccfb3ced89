use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod counter;
mod motion;
mod pages;
mod policies;
mod routes;

use routes::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    gloo::console::log!(format!("{} v{}", config::SITE_NAME, env!("CARGO_PKG_VERSION")));
    yew::Renderer::<App>::new().render();
}
