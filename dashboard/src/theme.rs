use gloo_storage::Storage;
use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "preferredTheme";
pub const LANGUAGE_KEY: &str = "preferredLanguage";

/// Page-wide color scheme, marked by the `dark-theme` class on `<body>`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn other(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn notice(self) -> &'static str {
        match self {
            Theme::Light => "Switched to Light Theme",
            Theme::Dark => "Switched to Dark Theme",
        }
    }

    /// The saved preference, if any.
    pub fn stored() -> Option<Self> {
        gloo_storage::LocalStorage::get(THEME_KEY).ok()
    }

    pub fn save(self) {
        if let Err(e) = gloo_storage::LocalStorage::set(THEME_KEY, self) {
            log::error!("failed to save theme preference: {e:?}");
        }
    }

    /// Sets or clears the body class. Controls inside the component tree
    /// render their own classes from state instead.
    pub fn apply(self) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        let Some(body) = body else { return };

        let result = match self {
            Theme::Dark => body.class_list().add_1("dark-theme"),
            Theme::Light => body.class_list().remove_1("dark-theme"),
        };
        if let Err(e) = result {
            log::error!("failed to apply theme class: {e:?}");
        }
    }
}

/// Interface language; also drives the document direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ar => "ع",
        }
    }

    pub fn notice(self) -> &'static str {
        match self {
            Language::En => "Switched to English",
            Language::Ar => "تم التبديل إلى العربية",
        }
    }

    pub fn save(self) {
        if let Err(e) = gloo_storage::LocalStorage::set(LANGUAGE_KEY, self) {
            log::error!("failed to save language preference: {e:?}");
        }
    }

    /// Rewrites `dir` and `lang` on the document element.
    pub fn apply(self) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        let Some(root) = root else { return };

        if let Err(e) = root.set_attribute("dir", self.dir()) {
            log::error!("failed to set document direction: {e:?}");
        }
        if let Err(e) = root.set_attribute("lang", self.code()) {
            log::error!("failed to set document language: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_persists_as_plain_strings() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"dark\"").unwrap(),
            Theme::Dark
        );
    }

    #[test]
    fn other_is_an_involution() {
        assert_eq!(Theme::Light.other(), Theme::Dark);
        assert_eq!(Theme::Light.other().other(), Theme::Light);
    }

    #[test]
    fn language_persists_as_plain_strings() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::Ar.code(), "ar");
    }

    #[test]
    fn notices_name_the_new_state() {
        assert_eq!(Theme::Dark.notice(), "Switched to Dark Theme");
        assert_eq!(Language::En.notice(), "Switched to English");
        assert_eq!(Language::Ar.notice(), "تم التبديل إلى العربية");
    }
}
