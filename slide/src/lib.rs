//! Collapsible sidebar widget.
//!
//! Owns the collapsed/expanded state of a single sidebar element: flips on a
//! trigger click, auto-adapts to viewport width and pointer hover, and tells
//! listeners about every transition — through registered callbacks and
//! through `sidebar:collapsed` / `sidebar:expanded` DOM events dispatched
//! from the sidebar element itself.

mod events;
mod options;
mod sidebar;
mod state;

pub use events::SidebarEvent;
pub use options::SidebarOptions;
pub use sidebar::Sidebar;
pub use state::SidebarState;
