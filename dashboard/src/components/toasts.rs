use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays up before dismissing itself.
const TOAST_TIMEOUT_MS: u32 = 3_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "alert-info",
            ToastLevel::Success => "alert-success",
            ToastLevel::Warning => "alert-warning",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Warning,
        }
    }
}

/// Handed down by context so any component can announce something.
#[derive(Clone, PartialEq, Default)]
pub struct ToastContext {
    show: Callback<Toast>,
}

impl ToastContext {
    pub fn show(&self, toast: Toast) {
        self.show.emit(toast);
    }
}

#[derive(Clone, PartialEq)]
struct ActiveToast {
    id: usize,
    toast: Toast,
}

enum ToastsAction {
    Push(ActiveToast),
    Dismiss(usize),
}

#[derive(Default, PartialEq)]
struct Toasts {
    items: Vec<ActiveToast>,
}

impl Reducible for Toasts {
    type Action = ToastsAction;

    fn reduce(self: Rc<Self>, action: ToastsAction) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastsAction::Push(toast) => items.push(toast),
            // dismissing twice (timeout after manual close) is a no-op
            ToastsAction::Dismiss(id) => items.retain(|t| t.id != id),
        }
        Rc::new(Toasts { items })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn ToastHost(props: &ToastHostProps) -> Html {
    let toasts = use_reducer(Toasts::default);
    let next_id = use_mut_ref(|| 0_usize);

    let show = {
        let toasts = toasts.clone();
        let next_id = next_id.clone();
        Callback::from(move |toast: Toast| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            toasts.dispatch(ToastsAction::Push(ActiveToast { id, toast }));

            let toasts = toasts.clone();
            Timeout::new(TOAST_TIMEOUT_MS, move || {
                toasts.dispatch(ToastsAction::Dismiss(id));
            })
            .forget();
        })
    };

    let dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: usize| toasts.dispatch(ToastsAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastContext> context={ToastContext { show }}>
            { props.children.clone() }
            <div class="toast-stack">
                {
                    for toasts.items.iter().map(|active| {
                        let id = active.id;
                        html! {
                            <div key={id} class={classes!("alert", active.toast.level.class(), "show")}>
                                { &active.toast.message }
                                <button
                                    class="btn-close"
                                    onclick={dismiss.reform(move |_| id)}
                                ></button>
                            </div>
                        }
                    })
                }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_classes_match_alert_variants() {
        assert_eq!(ToastLevel::Info.class(), "alert-info");
        assert_eq!(ToastLevel::Success.class(), "alert-success");
        assert_eq!(ToastLevel::Warning.class(), "alert-warning");
    }

    #[test]
    fn dismiss_is_idempotent() {
        let toasts = Rc::new(Toasts::default());
        let toasts = toasts.reduce(ToastsAction::Push(ActiveToast {
            id: 1,
            toast: Toast::info("hello"),
        }));
        assert_eq!(toasts.items.len(), 1);

        let toasts = toasts.reduce(ToastsAction::Dismiss(1));
        assert!(toasts.items.is_empty());
        let toasts = toasts.reduce(ToastsAction::Dismiss(1));
        assert!(toasts.items.is_empty());
    }

    #[test]
    fn unrelated_toasts_survive_a_dismiss() {
        let toasts = Rc::new(Toasts::default());
        let toasts = toasts.reduce(ToastsAction::Push(ActiveToast {
            id: 1,
            toast: Toast::info("one"),
        }));
        let toasts = toasts.reduce(ToastsAction::Push(ActiveToast {
            id: 2,
            toast: Toast::warning("two"),
        }));
        let toasts = toasts.reduce(ToastsAction::Dismiss(1));
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].id, 2);
    }
}
