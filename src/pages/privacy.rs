use yew::prelude::*;

use crate::components::{PolicyLayout, PolicySection};
use crate::config::CONTACT_EMAIL;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <PolicyLayout title="Privacy Policy">
            <PolicySection heading="1. Information we collect">
                <ul>
                    <li>{ "Name, shipping address and email address when you place an order" }</li>
                    <li>{ "Payment details, handled directly by our payment processor" }</li>
                    <li>{ "Basic device and browser information sent with every web request" }</li>
                </ul>
            </PolicySection>
            <PolicySection heading="2. How we use it">
                <p>{ "We use your information to fulfil orders, send order updates and answer support requests. We do not sell personal information." }</p>
            </PolicySection>
            <PolicySection heading="3. Retention">
                <p>{ "Order records are kept for as long as required for tax and accounting purposes, then deleted." }</p>
            </PolicySection>
            <PolicySection heading="4. Your rights">
                <p>{ "You may ask for a copy of your data or for it to be deleted by writing to " }<a href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a>{ "." }</p>
            </PolicySection>
        </PolicyLayout>
    }
}
