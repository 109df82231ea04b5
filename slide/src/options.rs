/// Which elements the widget binds to and which class marks "collapsed".
///
/// Selectors are resolved once, at construction. A selector that matches
/// nothing does not fail construction; the behavior depending on that
/// element is simply disabled.
///
/// Override individual fields with struct update syntax:
///
/// ```
/// use slide::SidebarOptions;
///
/// let options = SidebarOptions {
///     collapsed_class: "closed".to_owned(),
///     ..Default::default()
/// };
/// assert_eq!(options.sidebar_selector, "#sidebar");
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct SidebarOptions {
    pub sidebar_selector: String,
    pub trigger_selector: String,
    pub main_content_selector: String,
    pub collapsed_class: String,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            sidebar_selector: "#sidebar".to_owned(),
            trigger_selector: "#sidebarToggle".to_owned(),
            main_content_selector: "#mainContent".to_owned(),
            collapsed_class: "collapsed".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let options = SidebarOptions {
            sidebar_selector: "#side-panel".to_owned(),
            ..Default::default()
        };
        assert_eq!(options.sidebar_selector, "#side-panel");
        assert_eq!(options.trigger_selector, "#sidebarToggle");
        assert_eq!(options.main_content_selector, "#mainContent");
        assert_eq!(options.collapsed_class, "collapsed");
    }
}
