//! # Router
//!
//! Static path table. Every path maps to exactly one screen; unknown paths
//! resolve to `None` and the app shows the dashboard instead.

use std::fmt;

/// One screen of the dashboard, addressed by path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    CreateToken,
    AutoTrading,
    TokenDetails(String),
}

/// Row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub title: &'static str,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { pattern: "/", title: "Dashboard" },
    RouteEntry { pattern: "/create", title: "Create Token" },
    RouteEntry { pattern: "/trading", title: "Auto Trading" },
    RouteEntry { pattern: "/token/{id}", title: "Token Details" },
];

const TOKEN_PREFIX: &str = "/token/";

impl Route {
    /// Resolve a path. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let path = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match path {
            "/" => Some(Route::Dashboard),
            "/create" => Some(Route::CreateToken),
            "/trading" => Some(Route::AutoTrading),
            _ => {
                let id = path.strip_prefix(TOKEN_PREFIX)?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Route::TokenDetails(id.to_string()))
            }
        }
    }

    /// Resolve a path, falling back to the dashboard.
    pub fn parse_or_default(path: &str) -> Route {
        Route::parse(path).unwrap_or_else(|| {
            tracing::debug!(path = %path, "Unknown route, showing dashboard");
            Route::Dashboard
        })
    }

    pub fn path(&self) -> String {
        match self {
            Route::TokenDetails(id) => format!("{}{}", TOKEN_PREFIX, id),
            other => other.entry().pattern.to_string(),
        }
    }

    pub fn entry(&self) -> &'static RouteEntry {
        let index = match self {
            Route::Dashboard => 0,
            Route::CreateToken => 1,
            Route::AutoTrading => 2,
            Route::TokenDetails(_) => 3,
        };
        &ROUTES[index]
    }

    pub fn title(&self) -> &'static str {
        self.entry().title
    }

    /// Routes reachable from the nav bar.
    pub fn nav_items() -> [Route; 3] {
        [Route::Dashboard, Route::CreateToken, Route::AutoTrading]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Dashboard));
        assert_eq!(Route::parse(""), Some(Route::Dashboard));
        assert_eq!(Route::parse("/create"), Some(Route::CreateToken));
        assert_eq!(Route::parse("/trading/"), Some(Route::AutoTrading));
        assert_eq!(Route::parse("/token/abc-123"), Some(Route::TokenDetails("abc-123".to_string())));
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/token/"), None);
        assert_eq!(Route::parse("/token/a/b"), None);
        assert_eq!(Route::parse_or_default("/nowhere"), Route::Dashboard);
    }

    #[test]
    fn test_path_round_trips() {
        for route in [
            Route::Dashboard,
            Route::CreateToken,
            Route::AutoTrading,
            Route::TokenDetails("t1".to_string()),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(Route::Dashboard.title(), "Dashboard");
        assert_eq!(Route::TokenDetails("x".to_string()).title(), "Token Details");
        assert_eq!(ROUTES.len(), 4);
    }
}
