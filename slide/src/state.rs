use crate::events::SidebarEvent;

/// Viewport width at or under which the sidebar is forced shut.
pub(crate) const MOBILE_BREAKPOINT: i32 = 768;

const COLLAPSED_WIDTH: &str = "70px";
const EXPANDED_WIDTH: &str = "145px";

/// Snapshot returned by [`crate::Sidebar::state`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SidebarState {
    pub collapsed: bool,
    /// Fixed per-state width hint. Informational only; actual sizing is
    /// CSS-driven.
    pub width: &'static str,
}

impl SidebarState {
    pub(crate) fn new(collapsed: bool) -> Self {
        Self {
            collapsed,
            width: if collapsed {
                COLLAPSED_WIDTH
            } else {
                EXPANDED_WIDTH
            },
        }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(false)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Mode {
    Collapsed,
    Expanded,
}

impl Mode {
    pub(crate) fn event(self) -> SidebarEvent {
        match self {
            Mode::Collapsed => SidebarEvent::Collapsed,
            Mode::Expanded => SidebarEvent::Expanded,
        }
    }
}

/// Transition rules, kept free of DOM concerns.
#[derive(Debug, Default)]
pub(crate) struct Machine {
    collapsed: bool,
    // Set while the current expansion came from hover; pointer-leave then
    // collapses again. Cleared by any forced transition.
    hover_expanded: bool,
}

impl Machine {
    pub(crate) fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Forced `collapse()`/`expand()`. Commits even when the mode is
    /// unchanged, so redundant calls still re-apply the class and re-notify.
    pub(crate) fn force(&mut self, mode: Mode) -> Mode {
        self.collapsed = mode == Mode::Collapsed;
        self.hover_expanded = false;
        mode
    }

    pub(crate) fn toggle(&mut self) -> Mode {
        let mode = if self.collapsed {
            Mode::Expanded
        } else {
            Mode::Collapsed
        };
        self.force(mode)
    }

    /// Viewport rule: at or under the breakpoint always collapse; above it,
    /// expand only a collapsed sidebar.
    pub(crate) fn resize(&mut self, width: i32) -> Option<Mode> {
        if width <= MOBILE_BREAKPOINT {
            Some(self.force(Mode::Collapsed))
        } else if self.collapsed {
            Some(self.force(Mode::Expanded))
        } else {
            None
        }
    }

    pub(crate) fn pointer_enter(&mut self) -> Option<Mode> {
        if self.collapsed {
            self.collapsed = false;
            self.hover_expanded = true;
            Some(Mode::Expanded)
        } else {
            None
        }
    }

    pub(crate) fn pointer_leave(&mut self) -> Option<Mode> {
        if self.hover_expanded {
            self.collapsed = true;
            self.hover_expanded = false;
            Some(Mode::Collapsed)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_expanded() {
        let machine = Machine::default();
        assert!(!machine.collapsed());
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut machine = Machine::default();
        let before = machine.collapsed();
        machine.toggle();
        machine.toggle();
        assert_eq!(machine.collapsed(), before);

        machine.force(Mode::Collapsed);
        machine.toggle();
        machine.toggle();
        assert!(machine.collapsed());
    }

    #[test]
    fn force_commits_redundant_transitions() {
        let mut machine = Machine::default();
        assert_eq!(machine.force(Mode::Collapsed), Mode::Collapsed);
        assert_eq!(machine.force(Mode::Collapsed), Mode::Collapsed);
        assert!(machine.collapsed());
        assert_eq!(machine.force(Mode::Expanded), Mode::Expanded);
        assert_eq!(machine.force(Mode::Expanded), Mode::Expanded);
        assert!(!machine.collapsed());
    }

    #[test]
    fn narrow_viewport_always_collapses() {
        for width in [500, MOBILE_BREAKPOINT] {
            let mut machine = Machine::default();
            assert_eq!(machine.resize(width), Some(Mode::Collapsed));
            assert!(machine.collapsed());
            // still commits when already collapsed
            assert_eq!(machine.resize(width), Some(Mode::Collapsed));
        }
    }

    #[test]
    fn wide_viewport_expands_only_a_collapsed_sidebar() {
        let mut machine = Machine::default();
        assert_eq!(machine.resize(1024), None);

        machine.force(Mode::Collapsed);
        assert_eq!(machine.resize(1024), Some(Mode::Expanded));
        assert!(!machine.collapsed());

        assert_eq!(machine.resize(MOBILE_BREAKPOINT + 1), None);
    }

    #[test]
    fn hover_expands_then_pointer_leave_collapses() {
        let mut machine = Machine::default();
        machine.force(Mode::Collapsed);

        assert_eq!(machine.pointer_enter(), Some(Mode::Expanded));
        assert!(!machine.collapsed());

        assert_eq!(machine.pointer_leave(), Some(Mode::Collapsed));
        assert!(machine.collapsed());
    }

    #[test]
    fn hover_is_ignored_while_expanded() {
        let mut machine = Machine::default();
        assert_eq!(machine.pointer_enter(), None);
        assert_eq!(machine.pointer_leave(), None);
        assert!(!machine.collapsed());
    }

    #[test]
    fn manual_expand_sticks_through_pointer_leave() {
        let mut machine = Machine::default();
        machine.force(Mode::Collapsed);
        machine.pointer_enter();

        machine.force(Mode::Expanded);
        assert_eq!(machine.pointer_leave(), None);
        assert!(!machine.collapsed());
    }

    #[test]
    fn forced_resize_clears_hover_memory() {
        let mut machine = Machine::default();
        machine.force(Mode::Collapsed);
        machine.pointer_enter();

        assert_eq!(machine.resize(500), Some(Mode::Collapsed));
        assert_eq!(machine.pointer_leave(), None);
        assert!(machine.collapsed());
    }

    #[test]
    fn state_reports_fixed_width_hints() {
        assert_eq!(SidebarState::new(true).width, "70px");
        assert_eq!(SidebarState::new(false).width, "145px");
        assert!(!SidebarState::default().collapsed);
    }
}
