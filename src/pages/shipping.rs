use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{PolicyLayout, PolicySection};
use crate::routes::Route;

/// Where the "see our other policies" link in the shipping text points.
pub const INDEX_CROSS_LINK: Route = Route::Policies;

#[function_component(ShippingPolicy)]
pub fn shipping_policy() -> Html {
    html! {
        <PolicyLayout title="Shipping Policy">
            <PolicySection heading="Processing time">
                <p>{ "Orders ship within 2 business days. Orders placed on weekends or holidays ship the next business day." }</p>
            </PolicySection>
            <PolicySection heading="Rates and delivery">
                <ul>
                    <li>{ "Standard (5-7 business days): free on orders over $50, otherwise $6" }</li>
                    <li>{ "Express (2-3 business days): $15" }</li>
                </ul>
            </PolicySection>
            <PolicySection heading="Lost or damaged parcels">
                <p>
                    { "If a parcel arrives damaged or never arrives, contact us and we'll make it right. See our " }
                    <Link<Route> to={INDEX_CROSS_LINK}>{ "store policies" }</Link<Route>>
                    { " for refund and return details." }
                </p>
            </PolicySection>
        </PolicyLayout>
    }
}
