//! Registry of routes reachable without a bearer token.
//!
//! Every route is protected unless it is listed here. Entries may be
//! concrete paths (`/auth/login`) or route templates (`/customers/{id}`).

use axum::http::Method;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct PublicRoutes {
    routes: HashSet<(Method, String)>,
    groups: Vec<String>,
}

impl PublicRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a single method + route template public.
    pub fn route(mut self, method: Method, path: impl Into<String>) -> Self {
        self.routes.insert((method, normalize(path.into())));
        self
    }

    /// Marks every route under `prefix` public, whatever the method.
    ///
    /// Matching is per path segment: `/health` covers `/health` and
    /// `/health/ready` but not `/healthz`.
    pub fn group(mut self, prefix: impl Into<String>) -> Self {
        self.groups.push(normalize(prefix.into()));
        self
    }

    pub fn is_public(&self, method: &Method, path: &str) -> bool {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };

        if self.routes.contains(&(method.clone(), path.to_string())) {
            return true;
        }

        self.groups.iter().any(|prefix| {
            prefix == "/"
                || path == prefix
                || path
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

fn normalize(path: String) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PublicRoutes {
        PublicRoutes::new()
            .route(Method::POST, "/auth/login")
            .route(Method::POST, "/customers")
            .group("/health")
    }

    #[test]
    fn test_route_entry_is_method_specific() {
        let public = registry();
        assert!(public.is_public(&Method::POST, "/customers"));
        assert!(!public.is_public(&Method::GET, "/customers"));
        assert!(!public.is_public(&Method::POST, "/customers/{id}"));
    }

    #[test]
    fn test_group_is_segment_aware() {
        let public = registry();
        assert!(public.is_public(&Method::GET, "/health"));
        assert!(public.is_public(&Method::GET, "/health/ready"));
        assert!(public.is_public(&Method::POST, "/health/ready"));
        assert!(!public.is_public(&Method::GET, "/healthz"));
    }

    #[test]
    fn test_trailing_slashes_are_ignored() {
        let public = PublicRoutes::new()
            .route(Method::POST, "auth/login/")
            .group("/health/");
        assert!(public.is_public(&Method::POST, "/auth/login"));
        assert!(public.is_public(&Method::POST, "/auth/login/"));
        assert!(public.is_public(&Method::GET, "/health/ready"));
    }

    #[test]
    fn test_empty_registry_protects_everything() {
        let public = PublicRoutes::new();
        assert!(!public.is_public(&Method::GET, "/"));
        assert!(!public.is_public(&Method::POST, "/auth/login"));
    }
}
