//! Declarative route table with per-route authorization metadata

use crate::error::RouteTableError;
use std::collections::HashSet;

/// Authorization requirements attached to a route
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    /// Reachable by anyone
    pub const fn public() -> Self {
        Self {
            requires_auth: false,
            requires_admin: false,
        }
    }

    /// Requires a stored token
    pub const fn authenticated() -> Self {
        Self {
            requires_auth: true,
            requires_admin: false,
        }
    }

    /// Requires a stored token carrying the admin role
    pub const fn admin() -> Self {
        Self {
            requires_auth: true,
            requires_admin: true,
        }
    }

    pub const fn is_public(&self) -> bool {
        !self.requires_auth && !self.requires_admin
    }
}

/// One entry of the route table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor<V> {
    pub path: &'static str,
    pub name: &'static str,
    pub view: V,
    pub meta: RouteMeta,
}

impl<V> RouteDescriptor<V> {
    pub const fn new(path: &'static str, name: &'static str, view: V, meta: RouteMeta) -> Self {
        Self {
            path,
            name,
            view,
            meta,
        }
    }
}

/// Ordered, validated set of routes
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    routes: Vec<RouteDescriptor<V>>,
}

impl<V> RouteTable<V> {
    /// Validate and build a table
    ///
    /// Paths must be non-empty, start with `/` and be unique; names must be
    /// unique; an admin route must also require authentication.
    pub fn new(routes: Vec<RouteDescriptor<V>>) -> Result<Self, RouteTableError> {
        if routes.is_empty() {
            return Err(RouteTableError::Empty);
        }

        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath {
                    path: route.path.to_string(),
                });
            }
            if !paths.insert(route.path) {
                return Err(RouteTableError::DuplicatePath {
                    path: route.path.to_string(),
                });
            }
            if !names.insert(route.name) {
                return Err(RouteTableError::DuplicateName {
                    name: route.name.to_string(),
                });
            }
            if route.meta.requires_admin && !route.meta.requires_auth {
                return Err(RouteTableError::AdminWithoutAuth {
                    name: route.name.to_string(),
                });
            }
        }

        Ok(Self { routes })
    }

    /// Find the route for a location, ignoring any query string or fragment
    pub fn resolve(&self, location: &str) -> Option<&RouteDescriptor<V>> {
        let path = strip_query(location);
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor<V>> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor<V>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<V: PartialEq> RouteTable<V> {
    pub fn by_view(&self, view: &V) -> Option<&RouteDescriptor<V>> {
        self.routes.iter().find(|route| &route.view == view)
    }
}

fn strip_query(location: &str) -> &str {
    location
        .split(['?', '#'])
        .next()
        .unwrap_or(location)
}
