use yew::prelude::*;

use crate::components::{PolicyLayout, PolicySection};
use crate::config::{CONTACT_EMAIL, SITE_NAME};

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <PolicyLayout title="Terms and Conditions">
            <PolicySection heading="1. Agreement">
                <p>{ format!("By using the {SITE_NAME} store you agree to these terms. If you do not agree, please do not place an order.") }</p>
            </PolicySection>
            <PolicySection heading="2. Orders and pricing">
                <ul>
                    <li>{ "Prices are listed in USD and include applicable taxes at checkout." }</li>
                    <li>{ "We may cancel an order if an item is mispriced or out of stock; you will be refunded in full." }</li>
                    <li>{ "An order is accepted once you receive a shipping confirmation." }</li>
                </ul>
            </PolicySection>
            <PolicySection heading="3. Use of the site">
                <p>{ "You agree not to misuse the site, interfere with its operation, or attempt to access it by any means other than the interface we provide." }</p>
            </PolicySection>
            <PolicySection heading="4. Liability">
                <p>{ "Products are provided as described. To the extent permitted by law, our liability is limited to the amount you paid for the product." }</p>
            </PolicySection>
            <PolicySection heading="5. Contact">
                <p>{ "Questions about these terms: " }<a href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a></p>
            </PolicySection>
        </PolicyLayout>
    }
}
