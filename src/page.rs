//! Page Selection
//!
//! Each HTML page mounts the same bundle; `<body data-page>` picks the view.

use crate::config::{AUTH_PAGE, EXPLORE_PAGE, HOME_PAGE, NOTIFICATIONS_PAGE, PROFILE_PAGE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Explore,
    Profile,
    Notifications,
    Auth,
}

impl Page {
    /// Value of the `data-page` attribute
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Page::Home),
            "explore" => Some(Page::Explore),
            "profile" => Some(Page::Profile),
            "notifications" => Some(Page::Notifications),
            "auth" => Some(Page::Auth),
            _ => None,
        }
    }

    /// Fallback when the attribute is missing: last path segment
    pub fn from_path(path: &str) -> Option<Self> {
        let file = path.rsplit('/').next().unwrap_or_default();
        match file {
            "" => Some(Page::Home),
            f if f == HOME_PAGE => Some(Page::Home),
            f if f == EXPLORE_PAGE => Some(Page::Explore),
            f if f == PROFILE_PAGE => Some(Page::Profile),
            f if f == NOTIFICATIONS_PAGE => Some(Page::Notifications),
            f if f == AUTH_PAGE => Some(Page::Auth),
            _ => None,
        }
    }

    pub fn resolve(data_page: Option<&str>, path: &str) -> Option<Self> {
        match data_page {
            Some(name) => Self::from_name(name),
            None => Self::from_path(path),
        }
    }

    /// Page of the current document
    pub fn current() -> Option<Self> {
        let document = leptos::prelude::document();
        let data_page = document.body().and_then(|body| body.get_attribute("data-page"));
        let path = document
            .location()
            .and_then(|location| location.pathname().ok())
            .unwrap_or_default();
        Self::resolve(data_page.as_deref(), &path)
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Page::Home => HOME_PAGE,
            Page::Explore => EXPLORE_PAGE,
            Page::Profile => PROFILE_PAGE,
            Page::Notifications => NOTIFICATIONS_PAGE,
            Page::Auth => AUTH_PAGE,
        }
    }

    pub fn requires_auth(self) -> bool {
        matches!(self, Page::Home | Page::Profile | Page::Notifications)
    }
}

/// Full page navigation (`window.location.href = ...`)
pub fn navigate(page: Page) {
    if let Err(e) = leptos::prelude::window().location().set_href(page.file_name()) {
        log::warn!("[PAGE] Failed to navigate to {}: {:?}", page.file_name(), e);
    }
}

pub fn alert(message: &str) {
    if let Err(e) = leptos::prelude::window().alert_with_message(message) {
        log::warn!("[PAGE] Failed to show alert: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Page::from_name("home"), Some(Page::Home));
        assert_eq!(Page::from_name("notifications"), Some(Page::Notifications));
        assert_eq!(Page::from_name("Home"), None);
        assert_eq!(Page::from_name("settings"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path("/forum/index.html"), Some(Page::Home));
        assert_eq!(Page::from_path("/forum/auth.html"), Some(Page::Auth));
        assert_eq!(Page::from_path("/explore.html"), Some(Page::Explore));
        assert_eq!(Page::from_path("/about.html"), None);
    }

    #[test]
    fn test_data_attribute_wins_over_path() {
        assert_eq!(Page::resolve(Some("profile"), "/auth.html"), Some(Page::Profile));
        assert_eq!(Page::resolve(Some("unknown"), "/auth.html"), None);
        assert_eq!(Page::resolve(None, "/notifications.html"), Some(Page::Notifications));
    }

    #[test]
    fn test_auth_requirements() {
        assert!(Page::Home.requires_auth());
        assert!(Page::Profile.requires_auth());
        assert!(Page::Notifications.requires_auth());
        assert!(!Page::Explore.requires_auth());
        assert!(!Page::Auth.requires_auth());
    }

    #[test]
    fn test_file_names_round_trip_through_path() {
        for page in [Page::Home, Page::Explore, Page::Profile, Page::Notifications, Page::Auth] {
            assert_eq!(Page::from_path(page.file_name()), Some(page));
        }
    }
}
