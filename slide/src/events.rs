/// Notification emitted on every committed transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SidebarEvent {
    Collapsed,
    Expanded,
}

impl SidebarEvent {
    /// Name of the DOM event dispatched from the sidebar element. Carries no
    /// payload; listeners call back into [`crate::Sidebar::state`] for
    /// details.
    pub fn name(self) -> &'static str {
        match self {
            SidebarEvent::Collapsed => "sidebar:collapsed",
            SidebarEvent::Expanded => "sidebar:expanded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_namespaced() {
        assert_eq!(SidebarEvent::Collapsed.name(), "sidebar:collapsed");
        assert_eq!(SidebarEvent::Expanded.name(), "sidebar:expanded");
    }
}
