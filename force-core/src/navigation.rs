//! Named destinations of the application.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    Guide,
    Pricing,
    SignUp,
    Onboarding,
    Dashboard,
    Contact,
    Terms,
    Privacy,
    Login,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Self::Home,
        Self::Guide,
        Self::Pricing,
        Self::SignUp,
        Self::Onboarding,
        Self::Dashboard,
        Self::Contact,
        Self::Terms,
        Self::Privacy,
        Self::Login,
    ];

    /// Links shown in the navigation bar, left to right.
    pub const NAV_LINKS: [Route; 3] = [Self::Home, Self::Guide, Self::Pricing];

    /// Target of the navigation bar's call-to-action button.
    pub const CALL_TO_ACTION: Route = Self::SignUp;

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Guide => "/guide",
            Self::Pricing => "/pricing",
            Self::SignUp => "/signup",
            Self::Onboarding => "/onboarding",
            Self::Dashboard => "/dashboard",
            Self::Contact => "/contact",
            Self::Terms => "/terms",
            Self::Privacy => "/privacy",
            Self::Login => "/login",
        }
    }

    /// Resolves a path, ignoring a trailing slash. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Label used for navigation links and window titles.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Guide => "Guide",
            Self::Pricing => "Pricing",
            Self::SignUp => "Get Started",
            Self::Onboarding => "Onboarding",
            Self::Dashboard => "Dashboard",
            Self::Contact => "Contact",
            Self::Terms => "Terms of Service",
            Self::Privacy => "Privacy Policy",
            Self::Login => "Log in",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_route_resolves_from_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn from_path_ignores_trailing_slash() {
        assert_eq!(Route::from_path("/signup/"), Some(Route::SignUp));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/billing"), None);
    }

    #[test]
    fn navbar_links_then_call_to_action() {
        let titles: Vec<_> = Route::NAV_LINKS.iter().map(Route::title).collect();

        assert_eq!(titles, vec!["Home", "Guide", "Pricing"]);
        assert_eq!(Route::CALL_TO_ACTION.title(), "Get Started");
    }

    #[test]
    fn display_is_path() {
        assert_eq!(Route::Dashboard.to_string(), "/dashboard");
    }
}
