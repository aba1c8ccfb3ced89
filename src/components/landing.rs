use gloo::console::debug;
use yew::prelude::*;

use crate::config::{LANDING_SUBTITLE, LANDING_TITLE};
use crate::counter::{Counter, CounterAction};
use crate::motion::{use_entrance, DELAYED_FADE_IN, FADE_SLIDE_IN};

#[function_component(LandingDisplay)]
pub fn landing_display() -> Html {
    let counter = use_reducer(Counter::default);
    let phase = use_entrance();

    {
        let value = counter.value();
        use_effect_with(value, move |n| {
            debug!(format!("landing counter = {n}"));
            || ()
        });
    }

    let on_click = {
        let counter = counter.dispatcher();
        Callback::from(move |_: MouseEvent| counter.dispatch(CounterAction::Increment))
    };

    html! {
        <section class="landing" style={FADE_SLIDE_IN.style(phase)}>
            <h1 class="h1">{ LANDING_TITLE }</h1>
            <p class="sub" style={DELAYED_FADE_IN.style(phase)}>{ LANDING_SUBTITLE }</p>
            <button class="btn" onclick={on_click}>
                { format!("count is {}", counter.value()) }
            </button>
        </section>
    }
}
