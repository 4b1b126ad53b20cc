use std::fmt;
use tracing::info;

/// Client-side route path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn home() -> Self {
        Self::new("/")
    }

    pub fn settings() -> Self {
        Self::new("/settings")
    }

    pub fn email() -> Self {
        Self::new("/email")
    }

    pub fn messages(handle: &str) -> Self {
        Self(format!("/messages/{}", handle))
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::home()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait Navigator {
    fn push(&mut self, route: Route);
}

/// In-process router keeping the navigation history.
#[derive(Debug)]
pub struct Router {
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            history: vec![Route::home()],
        }
    }
}

impl Router {
    pub fn current(&self) -> &Route {
        // history always holds the initial route
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }
}

impl Navigator for Router {
    fn push(&mut self, route: Route) {
        info!(route = %route, "navigate");
        self.history.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::home().path(), "/");
        assert_eq!(Route::settings().path(), "/settings");
        assert_eq!(Route::email().path(), "/email");
        assert_eq!(Route::messages("alice").to_string(), "/messages/alice");
    }

    #[test]
    fn test_push_and_back() {
        let mut router = Router::default();
        assert_eq!(router.current(), &Route::home());
        router.push(Route::settings());
        assert_eq!(router.current(), &Route::settings());
        assert!(router.back());
        assert!(!router.back());
        assert_eq!(router.history().len(), 1);
    }
}
