//! Navigation targets and redirects between the auth pages.

use std::fmt;
use std::time::Duration;
use url::Url;

pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const FORGOT_PASSWORD: &str = "/forgot-password";
    pub const DASHBOARD: &str = "/dashboard";
}

/// Query parameter carrying the username to pre-fill on the login page.
pub const USERNAME_QUERY: &str = "username";

// locations are relative, so they are resolved against a placeholder origin
const BASE: &str = "http://localhost/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login { username: Option<String> },
    Register,
    ForgotPassword,
    Dashboard,
}

impl Route {
    #[must_use]
    pub const fn login() -> Self {
        Route::Login { username: None }
    }

    #[must_use]
    pub fn login_with_username(username: impl Into<String>) -> Self {
        Route::Login {
            username: Some(username.into()),
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Route::Login { .. } => paths::LOGIN,
            Route::Register => paths::REGISTER,
            Route::ForgotPassword => paths::FORGOT_PASSWORD,
            Route::Dashboard => paths::DASHBOARD,
        }
    }

    /// Parses a relative location such as `/login?username=john123`.
    /// Returns `None` for unknown paths.
    #[must_use]
    pub fn parse(location: &str) -> Option<Self> {
        let base = Url::parse(BASE).ok()?;
        let url = base.join(location).ok()?;
        let path = url.path().trim_end_matches('/');

        match path {
            "" | paths::LOGIN => {
                let username = url
                    .query_pairs()
                    .find(|(key, _)| key == USERNAME_QUERY)
                    .map(|(_, value)| value.into_owned())
                    .filter(|value| !value.is_empty());
                Some(Route::Login { username })
            }
            paths::REGISTER => Some(Route::Register),
            paths::FORGOT_PASSWORD => Some(Route::ForgotPassword),
            paths::DASHBOARD => Some(Route::Dashboard),
            _ => None,
        }
    }

    /// Relative location including the pre-fill query, if any.
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Route::Login {
                username: Some(username),
            } => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair(USERNAME_QUERY, username)
                    .finish();
                format!("{}?{query}", paths::LOGIN)
            }
            _ => self.path().to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.location())
    }
}

/// Navigation performed after a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub after: Duration,
}

impl Redirect {
    #[must_use]
    pub const fn new(to: Route, after: Duration) -> Self {
        Self { to, after }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/register"), Some(Route::Register));
        assert_eq!(Route::parse("/forgot-password"), Some(Route::ForgotPassword));
        assert_eq!(Route::parse("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(Route::parse("/login"), Some(Route::login()));
        assert_eq!(Route::parse("/"), Some(Route::login()));
        assert_eq!(Route::parse("/admin"), None);
    }

    #[test]
    fn login_location_round_trips_username() {
        let route = Route::login_with_username("john_123");
        assert_eq!(route.location(), "/login?username=john_123");
        assert_eq!(Route::parse(&route.location()), Some(route));
    }

    #[test]
    fn login_location_encodes_query() {
        let route = Route::login_with_username("a b&c");
        assert_eq!(route.location(), "/login?username=a+b%26c");
        assert_eq!(Route::parse(&route.location()), Some(route));
    }

    #[test]
    fn empty_username_query_is_ignored() {
        assert_eq!(Route::parse("/login?username="), Some(Route::login()));
    }

    #[test]
    fn display_uses_location() {
        assert_eq!(Route::Dashboard.to_string(), "/dashboard");
    }
}
