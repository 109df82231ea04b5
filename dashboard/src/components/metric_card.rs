use yew::prelude::*;

use crate::hooks::{use_animated_counter, use_reveal_on_scroll};

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub label: AttrValue,
    /// Target percentage the counter ramps up to.
    pub value: u32,
}

#[function_component]
pub fn MetricCard(props: &MetricCardProps) -> Html {
    let node = use_node_ref();
    use_reveal_on_scroll(node.clone());
    let shown = use_animated_counter(props.value);

    html! {
        <div class="metric-card" ref={node}>
            <h2>{ format!("{shown}%") }</h2>
            <span class="metric-label">{ props.label.clone() }</span>
        </div>
    }
}
