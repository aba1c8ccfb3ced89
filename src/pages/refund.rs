use yew::prelude::*;

use crate::components::{PolicyLayout, PolicySection};

#[function_component(RefundPolicy)]
pub fn refund_policy() -> Html {
    html! {
        <PolicyLayout title="Refund Policy">
            <PolicySection heading="Eligibility">
                <p>{ "Refunds are issued for items returned within 30 days of delivery in their original condition, and for items that arrive damaged or defective." }</p>
            </PolicySection>
            <PolicySection heading="Processing">
                <ul>
                    <li>{ "Refunds go back to the original payment method." }</li>
                    <li>{ "We process refunds within 5 business days of receiving the return." }</li>
                    <li>{ "Original shipping charges are refunded only for damaged or incorrect items." }</li>
                </ul>
            </PolicySection>
            <PolicySection heading="Non-refundable items">
                <p>{ "Gift cards and personalised items cannot be refunded." }</p>
            </PolicySection>
        </PolicyLayout>
    }
}
