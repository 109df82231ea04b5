use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::use_click_away;

use crate::components::{SidebarHandle, Toast, ToastContext};
use crate::hooks::use_sidebar_state;

// Popup sits just past the sidebar's two fixed widths.
const POPUP_LEFT_COLLAPSED: &str = "80px";
const POPUP_LEFT_EXPANDED: &str = "155px";

/// Avatar at the bottom of the sidebar plus its floating menu. The menu
/// follows the sidebar's width as it collapses and expands.
#[function_component]
pub fn ProfileMenu() -> Html {
    let open = use_state(|| false);
    let node = use_node_ref();
    let toasts = use_context::<ToastContext>().unwrap_or_default();
    let sidebar = use_context::<Option<SidebarHandle>>().flatten();
    let state = use_sidebar_state(sidebar);

    {
        let open = open.clone();
        use_click_away(node.clone(), move |_: web_sys::Event| {
            open.set(false);
        });
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            open.set(!*open);
        })
    };

    let on_settings = {
        let toasts = toasts.clone();
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toasts.show(Toast::info("Opening Settings..."));
            open.set(false);
        })
    };

    let on_sign_out = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toasts.show(Toast::warning("Signing out..."));
            // TODO: point this at the login page once one exists
            Timeout::new(1_500, || {
                gloo::console::log!("Redirecting to login...");
            })
            .forget();
            open.set(false);
        })
    };

    let left = if state.collapsed {
        POPUP_LEFT_COLLAPSED
    } else {
        POPUP_LEFT_EXPANDED
    };

    html! {
        <div class="profile" ref={node}>
            <div id="profileAvatar" class="profile-avatar" onclick={toggle}>
                <span class="avatar-initials">{"JD"}</span>
            </div>
            if *open {
                <div id="profilePopup" class="profile-popup show slide-in-up" style={format!("left: {left};")}>
                    <div class="profile-popup-header">
                        <span class="profile-name">{"Jordan Doe"}</span>
                        <span class="profile-role">{"Administrator"}</span>
                    </div>
                    <a href="#" class="profile-menu-item" onclick={on_settings}>
                        <span>{"Settings"}</span>
                    </a>
                    <a href="#" class="profile-menu-item" onclick={on_sign_out}>
                        <span>{"Sign out"}</span>
                    </a>
                </div>
            }
        </div>
    }
}
