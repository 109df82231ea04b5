use yew::prelude::*;

use crate::hooks::use_reveal_on_scroll;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Content card that slides in the first time it scrolls into view.
#[function_component]
pub fn Card(props: &CardProps) -> Html {
    let node = use_node_ref();
    use_reveal_on_scroll(node.clone());

    html! {
        <div class="card" ref={node}>
            <h3 class="card-title">{ props.title.clone() }</h3>
            { props.children.clone() }
        </div>
    }
}
