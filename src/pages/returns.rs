use yew::prelude::*;

use crate::components::{PolicyLayout, PolicySection};
use crate::config::CONTACT_EMAIL;

#[function_component(ReturnPolicy)]
pub fn return_policy() -> Html {
    html! {
        <PolicyLayout title="Return Policy">
            <PolicySection heading="Starting a return">
                <p>{ "Email " }<a href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a>{ " with your order number within 30 days of delivery. We'll reply with a return label and instructions." }</p>
            </PolicySection>
            <PolicySection heading="Condition">
                <p>{ "Items must be unused, with original tags and packaging." }</p>
            </PolicySection>
            <PolicySection heading="Exchanges">
                <p>{ "To exchange an item, return it for a refund and place a new order." }</p>
            </PolicySection>
        </PolicyLayout>
    }
}
