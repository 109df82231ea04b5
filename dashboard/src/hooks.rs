use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::components::SidebarHandle;

/// Mirrors the sidebar widget's state into yew, re-rendering the caller on
/// every transition the widget commits.
#[hook]
pub fn use_sidebar_state(sidebar: Option<SidebarHandle>) -> slide::SidebarState {
    let state = use_state(|| {
        sidebar
            .as_ref()
            .map(|s| s.state())
            .unwrap_or_default()
    });

    {
        let state = state.clone();
        use_effect_with_deps(
            move |sidebar| {
                if let Some(sidebar) = sidebar {
                    state.set(sidebar.state());
                    let snapshot = sidebar.clone();
                    sidebar.subscribe(move |_| state.set(snapshot.state()));
                }
                || {}
            },
            sidebar,
        );
    }

    *state
}

/// Adds the `slide-in-up` class once the node scrolls into view (10%
/// visible, with a 50px bottom inset), the way the cards reveal.
#[hook]
pub fn use_reveal_on_scroll(node: NodeRef) {
    use_effect_with_deps(
        move |node| {
            let mut observer = None;
            let mut callback = None;

            if let Some(element) = node.cast::<Element>() {
                let reveal = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                    for entry in entries.iter() {
                        if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                            if entry.is_intersecting() {
                                let _ = entry.target().class_list().add_1("slide-in-up");
                            }
                        }
                    }
                });

                let mut init = IntersectionObserverInit::new();
                init.threshold(&JsValue::from(0.1))
                    .root_margin("0px 0px -50px 0px");

                match IntersectionObserver::new_with_options(reveal.as_ref().unchecked_ref(), &init)
                {
                    Ok(created) => {
                        created.observe(&element);
                        observer = Some(created);
                    }
                    Err(e) => log::error!("failed to create reveal observer: {e:?}"),
                }
                callback = Some(reveal);
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        },
        node,
    );
}

/// Percentage counter that ramps linearly from zero to `target`, one step
/// per animation frame. Returns the value to display.
#[hook]
pub fn use_animated_counter(target: u32) -> u32 {
    let current = use_state(|| 0.0_f64);

    {
        let current = current.clone();
        use_effect_with_deps(
            move |target| {
                let target = f64::from(*target);
                let pending = Rc::new(RefCell::new(None));
                current.set(0.0);
                step(current, 0.0, target, Rc::clone(&pending));
                move || {
                    // cancels whatever frame is still queued
                    pending.borrow_mut().take();
                }
            },
            target,
        );
    }

    (*current).ceil() as u32
}

fn step(
    state: UseStateHandle<f64>,
    current: f64,
    target: f64,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
) {
    match ramp_step(current, target) {
        Some(next) => {
            state.set(next);
            let handle = {
                let pending = Rc::clone(&pending);
                request_animation_frame(move |_| step(state, next, target, pending))
            };
            *pending.borrow_mut() = Some(handle);
        }
        None => state.set(target),
    }
}

// One ramp increment of a fiftieth of the target; None once the target is
// reached.
fn ramp_step(current: f64, target: f64) -> Option<f64> {
    let next = current + target / 50.0;
    (next < target).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::ramp_step;

    #[test]
    fn ramp_finishes_in_about_fifty_steps() {
        let target = 84.0;
        let mut current = 0.0;
        let mut steps = 0;
        while let Some(next) = ramp_step(current, target) {
            assert!(next > current);
            assert!(next < target);
            current = next;
            steps += 1;
            assert!(steps <= 51, "ramp never terminated");
        }
        assert!(steps >= 49);
    }

    #[test]
    fn zero_target_is_already_done() {
        assert_eq!(ramp_step(0.0, 0.0), None);
    }
}
