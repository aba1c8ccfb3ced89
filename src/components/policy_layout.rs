use gloo::console::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{POLICIES_UPDATED, SITE_NAME};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct PolicyLayoutProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

pub fn document_title(page: &str) -> String {
    format!("{page} | {SITE_NAME}")
}

// Runs once per page mount; a missing window/document only costs us the title.
fn prepare_page(title: &str) {
    let Some(window) = web_sys::window() else {
        warn!("policy page mounted without a window");
        return;
    };
    window.scroll_to_with_x_and_y(0.0, 0.0);
    match window.document() {
        Some(doc) => doc.set_title(&document_title(title)),
        None => warn!("policy page mounted without a document"),
    }
}

/// Shared frame for the policy documents: heading, revision line, back link.
#[function_component(PolicyLayout)]
pub fn policy_layout(props: &PolicyLayoutProps) -> Html {
    {
        let title = props.title.clone();
        use_effect_with(title, |title| {
            prepare_page(title);
            || ()
        });
    }

    html! {
        <main class="wrap policy">
            <header class="card-h">
                <h1 class="h1">{ props.title.clone() }</h1>
                <p class="sub">{ format!("Last updated: {POLICIES_UPDATED}") }</p>
            </header>
            <article class="card-b">
                { props.children.clone() }
            </article>
            <footer class="footer">
                <Link<Route> to={Route::Policies} classes="chip">{ "← All policies" }</Link<Route>>
            </footer>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct PolicySectionProps {
    pub heading: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(PolicySection)]
pub fn policy_section(props: &PolicySectionProps) -> Html {
    html! {
        <section class="policy-section">
            <h2 class="card-t">{ props.heading.clone() }</h2>
            { props.children.clone() }
        </section>
    }
}
