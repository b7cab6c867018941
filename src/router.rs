use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub name: String,
}

impl Route {
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn default_table() -> Vec<Self> {
        vec![Self::new("/", "alarms"), Self::new("/about", "about")]
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
    current: usize,
}

impl Router {
    /// an empty table falls back to the default routes
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        let routes = if routes.is_empty() {
            log::warn!("empty routing table, using the default routes");
            Route::default_table()
        } else {
            routes
        };
        Self { routes, current: 0 }
    }

    pub fn navigate(&mut self, path: &str) -> Result<&Route> {
        let index = self
            .routes
            .iter()
            .position(|route| route.path == path)
            .ok_or_else(|| Error::UnknownRoute(path.to_string()))?;
        self.current = index;
        log::debug!("navigated to {path}");
        Ok(&self.routes[index])
    }

    #[must_use]
    pub fn current(&self) -> &Route {
        &self.routes[self.current]
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
