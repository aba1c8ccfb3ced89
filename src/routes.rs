use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    Home, NotFound, PolicyIndex, PrivacyPolicy, RefundPolicy, ReturnPolicy, ShippingPolicy,
    TermsAndConditions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/policies")]
    Policies,
    #[at("/terms-and-conditions")]
    Terms,
    #[at("/privacy-policy")]
    Privacy,
    #[at("/refund-policy")]
    Refund,
    #[at("/return-policy")]
    Return,
    #[at("/shipping-policy")]
    Shipping,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Policies => html! { <PolicyIndex /> },
        Route::Terms => html! { <TermsAndConditions /> },
        Route::Privacy => html! { <PrivacyPolicy /> },
        Route::Refund => html! { <RefundPolicy /> },
        Route::Return => html! { <ReturnPolicy /> },
        Route::Shipping => html! { <ShippingPolicy /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 8] = [
        Route::Home,
        Route::Policies,
        Route::Terms,
        Route::Privacy,
        Route::Refund,
        Route::Return,
        Route::Shipping,
        Route::NotFound,
    ];

    #[test]
    fn paths_match_site_map() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Policies.to_path(), "/policies");
        assert_eq!(Route::Terms.to_path(), "/terms-and-conditions");
        assert_eq!(Route::Privacy.to_path(), "/privacy-policy");
        assert_eq!(Route::Refund.to_path(), "/refund-policy");
        assert_eq!(Route::Return.to_path(), "/return-policy");
        assert_eq!(Route::Shipping.to_path(), "/shipping-policy");
    }

    #[test]
    fn every_path_recognizes_back_to_its_route() {
        for route in ALL {
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::recognize("/no-such-policy"), Some(Route::NotFound));
    }
}
