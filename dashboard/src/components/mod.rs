mod card;
mod header;
mod metric_card;
mod profile;
mod sidebar;
mod spinner;
mod toasts;

pub use card::Card;
pub use header::Header;
pub use metric_card::MetricCard;
pub use profile::ProfileMenu;
pub use sidebar::{Sidebar, SidebarHandle, NAV_ITEMS};
pub use spinner::Spinner;
pub use toasts::{Toast, ToastContext, ToastHost, ToastLevel};
