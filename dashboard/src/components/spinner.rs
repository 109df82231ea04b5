use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    /// Held back this long so loads that finish quickly never flash it.
    #[prop_or(300)]
    pub delay_ms: u32,
}

#[function_component]
pub fn Spinner(props: &SpinnerProps) -> Html {
    let show = use_state(|| false);

    {
        let show = show.clone();
        use_effect_with_deps(
            move |delay| {
                let t = Timeout::new(*delay, move || {
                    show.set(true);
                });
                move || {
                    t.cancel();
                }
            },
            props.delay_ms,
        );
    }

    if *show {
        html! { <span class="loader"></span> }
    } else {
        html! {}
    }
}
