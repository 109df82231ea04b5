use yew::prelude::*;

use crate::theme::{Language, Theme};
use crate::utils;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub language: Language,
    pub on_switch_language: Callback<Language>,
}

/// Topbar: the sidebar trigger (wired by the widget, not here), the date
/// line, and the theme/language controls.
#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let today = utils::format_date(&js_sys::Date::new_0());

    html! {
        <header class="topbar">
            <button id="sidebarToggle" class="sidebar-toggle" title="Toggle sidebar">{"☰"}</button>
            <div class="topbar-date">{ today }</div>
            <div class="topbar-controls">
                <div class="language-switch">
                    {
                        for Language::ALL.iter().copied().map(|lang| {
                            let onclick = props.on_switch_language.reform(move |_: MouseEvent| lang);
                            html! {
                                <span
                                    key={lang.code()}
                                    class={classes!("language-option", (props.language == lang).then_some("active"))}
                                    {onclick}
                                >
                                    { lang.label() }
                                </span>
                            }
                        })
                    }
                </div>
                <button
                    id="themeToggle"
                    class={classes!("theme-toggle", (props.theme == Theme::Dark).then_some("dark-mode"))}
                    onclick={props.on_toggle_theme.clone()}
                >
                    { if props.theme == Theme::Dark { "🌙" } else { "☀" } }
                </button>
            </div>
        </header>
    }
}
