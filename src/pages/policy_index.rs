use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SITE_NAME;
use crate::policies::POLICY_LINKS;
use crate::routes::Route;

#[function_component(PolicyIndex)]
pub fn policy_index() -> Html {
    html! {
        <main class="wrap">
            <header class="hero">
                <div class="badge">{ SITE_NAME }</div>
                <h1 class="h1">{ "Policies" }</h1>
            </header>
            <ul class="policy-list">
                { for POLICY_LINKS.iter().map(|link| html! {
                    <li key={link.destination()}>
                        <Link<Route> to={link.route}>{ link.label }</Link<Route>>
                    </li>
                })}
            </ul>
        </main>
    }
}
