//! Navigation guard evaluated before every route transition

use crate::clock::Clock;
use crate::config::ExpiredTokenPolicy;
use crate::routes::{RouteDescriptor, RouteMeta, RouteTable};
use crate::storage::KeyValueStorage;
use crate::store::TokenStore;

/// Query parameter carrying the originally requested path to the login page
pub const REDIRECT_QUERY_PARAM: &str = "redirect";

/// Outcome of a guarded navigation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Proceed to the requested route
    Allow,
    /// Go to the login page, then back to `redirect` after signing in
    RedirectToLogin { redirect: String },
    /// Go to the landing page
    RedirectToLanding,
}

impl NavigationDecision {
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decides whether a navigation may proceed
///
/// The guard never fails: token problems are absorbed by the [`TokenStore`].
#[derive(Clone, Debug)]
pub struct NavigationGuard<S, C> {
    store: TokenStore<S, C>,
}

impl<S: KeyValueStorage, C: Clock> NavigationGuard<S, C> {
    pub fn new(store: TokenStore<S, C>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TokenStore<S, C> {
        &self.store
    }

    /// Decide a navigation to a route with `meta`
    ///
    /// `full_path` is the requested path including its query string; it is
    /// handed back in the login redirect unchanged.
    pub fn check(&self, meta: RouteMeta, full_path: &str) -> NavigationDecision {
        let authenticated = self.store.is_authenticated();
        if authenticated
            && self.store.config().expired_token_policy == ExpiredTokenPolicy::Ignore
            && self.store.has_token_expired()
        {
            tracing::debug!(path = %full_path, "Stored token has expired; continuing");
        }

        if meta.requires_auth && !authenticated {
            tracing::debug!(path = %full_path, "Navigation requires login");
            return NavigationDecision::RedirectToLogin {
                redirect: full_path.to_string(),
            };
        }

        if meta.requires_admin && !self.store.is_admin() {
            tracing::debug!(path = %full_path, "Navigation requires admin role");
            return NavigationDecision::RedirectToLanding;
        }

        NavigationDecision::Allow
    }

    /// Decide a navigation to a known route descriptor
    pub fn check_route<V>(
        &self,
        route: &RouteDescriptor<V>,
        full_path: &str,
    ) -> NavigationDecision {
        self.check(route.meta, full_path)
    }

    /// Resolve `full_path` in `table` and decide the navigation
    ///
    /// Paths missing from the table carry no requirements and are allowed.
    pub fn check_path<V>(&self, table: &RouteTable<V>, full_path: &str) -> NavigationDecision {
        let meta = table
            .resolve(full_path)
            .map(|route| route.meta)
            .unwrap_or_default();
        self.check(meta, full_path)
    }
}
