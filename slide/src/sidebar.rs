use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{CustomEvent, Document, Element};

use crate::events::SidebarEvent;
use crate::options::SidebarOptions;
use crate::state::{Machine, Mode, SidebarState};

/// A collapsible sidebar bound to elements in the current document.
///
/// The browser listeners it registers detach when the value is dropped, so
/// keep it alive for as long as the sidebar should react to the page.
pub struct Sidebar {
    shared: Rc<Shared>,
    _listeners: Vec<EventListener>,
}

struct Shared {
    options: SidebarOptions,
    sidebar: Option<Element>,
    main_content: Option<Element>,
    machine: RefCell<Machine>,
    observers: RefCell<Vec<Rc<dyn Fn(SidebarEvent)>>>,
}

impl Sidebar {
    /// Binds to the elements named by `options`, wires the trigger, hover
    /// and window-resize listeners, and applies the viewport rule once.
    pub fn new(options: SidebarOptions) -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        let sidebar = query(document.as_ref(), &options.sidebar_selector);
        let trigger = query(document.as_ref(), &options.trigger_selector);
        let main_content = query(document.as_ref(), &options.main_content_selector);

        if sidebar.is_none() {
            log::warn!(
                "nothing matches {}, sidebar controls are inert",
                options.sidebar_selector
            );
        }

        let shared = Rc::new(Shared {
            options,
            sidebar,
            main_content,
            machine: RefCell::new(Machine::default()),
            observers: RefCell::new(Vec::new()),
        });

        let mut listeners = Vec::new();

        if let Some(trigger) = &trigger {
            let shared = Rc::clone(&shared);
            listeners.push(EventListener::new(trigger, "click", move |_| {
                shared.toggle();
            }));
        }

        if let Some(element) = &shared.sidebar {
            let on_enter = Rc::clone(&shared);
            listeners.push(EventListener::new(element, "mouseenter", move |_| {
                on_enter.pointer_enter();
            }));
            let on_leave = Rc::clone(&shared);
            listeners.push(EventListener::new(element, "mouseleave", move |_| {
                on_leave.pointer_leave();
            }));
        }

        if let Some(window) = web_sys::window() {
            let shared = Rc::clone(&shared);
            listeners.push(EventListener::new(&window, "resize", move |_| {
                if let Some(width) = viewport_width() {
                    shared.resize(width);
                }
            }));
        }

        if let Some(width) = viewport_width() {
            shared.resize(width);
        }

        Self {
            shared,
            _listeners: listeners,
        }
    }

    /// Forces `Collapsed`. Commits (and notifies) even when already
    /// collapsed.
    pub fn collapse(&self) {
        self.shared.force(Mode::Collapsed);
    }

    /// Forces `Expanded`. Same always-commit policy as [`Self::collapse`].
    pub fn expand(&self) {
        self.shared.force(Mode::Expanded);
    }

    pub fn toggle(&self) {
        self.shared.toggle();
    }

    /// Current collapsed flag plus the fixed display-width hint.
    pub fn state(&self) -> SidebarState {
        SidebarState::new(self.shared.machine.borrow().collapsed())
    }

    /// Registers a callback invoked on every committed transition, just
    /// before the matching DOM event is dispatched. Callbacks live as long
    /// as the widget.
    pub fn subscribe(&self, observer: impl Fn(SidebarEvent) + 'static) {
        self.shared.observers.borrow_mut().push(Rc::new(observer));
    }

    /// The managed sidebar element, when the selector matched one.
    pub fn element(&self) -> Option<&Element> {
        self.shared.sidebar.as_ref()
    }

    /// The dependent content region. Its layout follows the collapsed class
    /// via CSS; the widget never mutates it.
    pub fn main_content(&self) -> Option<&Element> {
        self.shared.main_content.as_ref()
    }

    pub fn options(&self) -> &SidebarOptions {
        &self.shared.options
    }
}

impl Shared {
    fn force(&self, mode: Mode) {
        if self.sidebar.is_none() {
            return;
        }
        let mode = self.machine.borrow_mut().force(mode);
        self.commit(mode);
    }

    fn toggle(&self) {
        if self.sidebar.is_none() {
            return;
        }
        let mode = self.machine.borrow_mut().toggle();
        self.commit(mode);
    }

    fn resize(&self, width: i32) {
        if self.sidebar.is_none() {
            return;
        }
        if let Some(mode) = self.machine.borrow_mut().resize(width) {
            self.commit(mode);
        }
    }

    fn pointer_enter(&self) {
        if let Some(mode) = self.machine.borrow_mut().pointer_enter() {
            self.commit(mode);
        }
    }

    fn pointer_leave(&self) {
        if let Some(mode) = self.machine.borrow_mut().pointer_leave() {
            self.commit(mode);
        }
    }

    // Class first, then observers, then the DOM event. The machine borrow is
    // released before anything external runs, so listeners may call straight
    // back into the widget.
    fn commit(&self, mode: Mode) {
        let Some(sidebar) = &self.sidebar else { return };

        let class_list = sidebar.class_list();
        let result = match mode {
            Mode::Collapsed => class_list.add_1(&self.options.collapsed_class),
            Mode::Expanded => class_list.remove_1(&self.options.collapsed_class),
        };
        if let Err(e) = result {
            log::error!(
                "failed to update class {:?} on sidebar: {e:?}",
                self.options.collapsed_class
            );
        }

        let event = mode.event();
        let observers = self.observers.borrow().clone();
        for observer in observers {
            observer(event);
        }

        match CustomEvent::new(event.name()) {
            Ok(dom_event) => {
                let _ = sidebar.dispatch_event(&dom_event);
            }
            Err(e) => log::error!("failed to create {} event: {e:?}", event.name()),
        }
    }
}

fn query(document: Option<&Document>, selector: &str) -> Option<Element> {
    document?.query_selector(selector).ok().flatten()
}

fn viewport_width() -> Option<i32> {
    let width = web_sys::window()?.inner_width().ok()?;
    width.as_f64().map(|w| w as i32)
}
