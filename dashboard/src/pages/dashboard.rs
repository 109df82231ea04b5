use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::components::{
    Card, Header, MetricCard, Sidebar, SidebarHandle, Spinner, Toast, ToastContext, NAV_ITEMS,
};
use crate::theme::{Language, Theme};
use crate::utils::{self, DashboardData};

/// The dashboard shell: owns theme, language, navigation and loading state,
/// builds the sidebar widget, and hands the widget to whatever asks for it.
#[function_component]
pub fn Dashboard() -> Html {
    let theme = use_state(|| Theme::Light);
    let language = use_state(|| Language::En);
    let active_nav = use_state(|| 0_usize);
    let data = use_state(|| None::<DashboardData>);
    let sidebar = use_state(|| None::<SidebarHandle>);
    let toasts = use_context::<ToastContext>().unwrap_or_default();

    // Build the widget once the markup below is in the document, then share
    // it by context.
    {
        let sidebar = sidebar.clone();
        use_effect_once(move || {
            let widget = slide::Sidebar::new(slide::SidebarOptions::default());
            widget.subscribe(|event| match event {
                slide::SidebarEvent::Collapsed => gloo::console::log!("Sidebar collapsed"),
                slide::SidebarEvent::Expanded => gloo::console::log!("Sidebar expanded"),
            });
            sidebar.set(Some(SidebarHandle::new(widget)));
            || {}
        });
    }

    // A saved theme comes back through the same path a manual switch takes,
    // announcement included. No saved value, no announcement.
    {
        let theme = theme.clone();
        let toasts = toasts.clone();
        use_effect_once(move || {
            if let Some(saved) = Theme::stored() {
                saved.apply();
                saved.save();
                toasts.show(Toast::info(saved.notice()));
                theme.set(saved);
            }
            || {}
        });
    }

    // Simulated data load.
    {
        let data = data.clone();
        use_effect_once(move || {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(1_000).await;
                data.set(Some(utils::sample_metrics()));
            });
            || {}
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).other();
            next.apply();
            next.save();
            toasts.show(Toast::info(next.notice()));
            theme.set(next);
        })
    };

    let on_switch_language = {
        let language = language.clone();
        let toasts = toasts.clone();
        Callback::from(move |next: Language| {
            next.apply();
            next.save();
            toasts.show(Toast::success(next.notice()));
            language.set(next);
        })
    };

    let on_navigate = {
        let active_nav = active_nav.clone();
        Callback::from(move |index: usize| {
            if let Some(item) = NAV_ITEMS.get(index) {
                toasts.show(Toast::info(item.notice));
            }
            active_nav.set(index);
        })
    };

    html! {
        <ContextProvider<Option<SidebarHandle>> context={(*sidebar).clone()}>
            <div class={classes!("dashboard-container", data.is_none().then_some("loading"))}>
                <Sidebar active={*active_nav} on_navigate={on_navigate} />
                <main id="mainContent" class="main-content">
                    <Header
                        theme={*theme}
                        on_toggle_theme={on_toggle_theme}
                        language={*language}
                        on_switch_language={on_switch_language}
                    />
                    {
                        match &*data {
                            None => html! { <Spinner /> },
                            Some(data) => html! {
                                <>
                                    <div class="metric-grid">
                                        <MetricCard label="Attendance" value={data.attendance} />
                                        <MetricCard label="Average Score" value={data.average_score} />
                                        <MetricCard label="Activities" value={data.activities} />
                                    </div>
                                    <Card title="Today's Schedule">
                                        <p>{"No tests scheduled for today."}</p>
                                    </Card>
                                    <Card title="Reports">
                                        <p>{"Weekly summaries are generated every Monday."}</p>
                                    </Card>
                                </>
                            },
                        }
                    }
                </main>
            </div>
        </ContextProvider<Option<SidebarHandle>>>
    }
}
