use std::rc::Rc;

use yew::prelude::*;

use crate::components::ProfileMenu;

/// Cheap-to-clone handle for sharing the widget through context.
#[derive(Clone)]
pub struct SidebarHandle(Rc<slide::Sidebar>);

impl PartialEq for SidebarHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SidebarHandle {
    pub fn new(sidebar: slide::Sidebar) -> Self {
        Self(Rc::new(sidebar))
    }

    pub fn state(&self) -> slide::SidebarState {
        self.0.state()
    }

    pub fn subscribe(&self, observer: impl Fn(slide::SidebarEvent) + 'static) {
        self.0.subscribe(observer);
    }
}

pub struct NavItem {
    pub label: &'static str,
    /// Toast shown while the section pretends to load.
    pub notice: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        notice: "Loading Dashboard...",
    },
    NavItem {
        label: "Schedule Manager",
        notice: "Loading Schedule Manager...",
    },
    NavItem {
        label: "Employee Statistics",
        notice: "Loading Employee Statistics...",
    },
    NavItem {
        label: "Test Scheduler",
        notice: "Loading Test Scheduler...",
    },
    NavItem {
        label: "Participating Departments",
        notice: "Loading Departments...",
    },
    NavItem {
        label: "Clinic Ambulance",
        notice: "Loading Clinic Ambulance...",
    },
    NavItem {
        label: "Settings",
        notice: "Loading Settings...",
    },
    NavItem {
        label: "Reports",
        notice: "Loading Reports...",
    },
];

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: usize,
    pub on_navigate: Callback<usize>,
}

#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside id="sidebar" class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-mark">{"▣"}</span>
                <span class="brand-label">{"Scheduler"}</span>
            </div>
            <nav class="sidebar-nav">
                {
                    for NAV_ITEMS.iter().enumerate().map(|(i, item)| {
                        let onclick = props.on_navigate.reform(move |e: MouseEvent| {
                            e.prevent_default();
                            i
                        });
                        html! {
                            <a
                                href="#"
                                key={item.label}
                                class={classes!("nav-item", (props.active == i).then_some("active"))}
                                {onclick}
                            >
                                <span class="nav-label">{ item.label }</span>
                            </a>
                        }
                    })
                }
            </nav>
            <ProfileMenu />
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::NAV_ITEMS;

    #[test]
    fn every_entry_announces_loading() {
        for item in NAV_ITEMS {
            assert!(item.notice.starts_with("Loading "), "{}", item.label);
            assert!(item.notice.ends_with("..."), "{}", item.label);
        }
    }

    #[test]
    fn departments_entry_uses_the_short_name() {
        let departments = NAV_ITEMS
            .iter()
            .find(|item| item.label == "Participating Departments")
            .unwrap();
        assert_eq!(departments.notice, "Loading Departments...");
    }
}
