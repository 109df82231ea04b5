use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod pages;
mod theme;
mod utils;

use components::ToastHost;

#[derive(Clone, Routable, PartialEq)]
enum BaseRoute {
    #[at("/")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn main() {
    yew::Renderer::<Root>::new().render();
}

#[function_component]
fn Root() -> Html {
    // Everything is constructed from here down; nothing hangs off a global.
    html! {
        <BrowserRouter>
            <ToastHost>
                <Switch<BaseRoute> render={switch} /> // <- must be child of <BrowserRouter>
            </ToastHost>
        </BrowserRouter>
    }
}

fn switch(routes: BaseRoute) -> Html {
    match routes {
        BaseRoute::Dashboard => html! {
            <pages::Dashboard/>
        },
        BaseRoute::NotFound => html! { <h1>{"404"}</h1> },
    }
}
