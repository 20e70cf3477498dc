//! Navigation guard component for routed pages

use crate::auth::{LoginQuery, use_session};
use crate::routes::Route;
use crate::storage::navigation_guard;
use portal_core::NavigationDecision;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub route: Route,
    pub children: Children,
}

/// Renders `children` only when the guard allows the current navigation
///
/// The decision is taken from local storage on every render, so a token
/// removed in another tab is noticed on the next navigation.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let navigator = use_navigator();
    let location = use_location();
    // Re-render when the session changes (login/logout/refresh)
    let _session = use_session();

    let full_path = location.as_ref().map_or_else(
        || props.route.to_path(),
        |location| requested_path(location.path(), location.query_str()),
    );

    let decision = navigation_guard().check(props.route.meta(), &full_path);

    {
        let decision = decision.clone();
        let route = props.route;
        use_effect_with(decision, move |decision| {
            let Some(navigator) = navigator else {
                tracing::warn!("Router not available, cannot redirect");
                return;
            };
            match decision {
                NavigationDecision::Allow => {}
                NavigationDecision::RedirectToLogin { redirect } => {
                    tracing::debug!(route = route.name(), %redirect, "Redirecting to login");
                    if let Err(err) =
                        navigator.replace_with_query(&Route::Login, &LoginQuery::to(redirect))
                    {
                        tracing::warn!(error = %err, "Failed to encode login redirect");
                        navigator.replace(&Route::Login);
                    }
                }
                NavigationDecision::RedirectToLanding => {
                    tracing::debug!(route = route.name(), "Not an admin, redirecting to landing");
                    navigator.replace(&Route::Landing);
                }
            }
        });
    }

    if decision.is_allowed() {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! {
            <div class="flex flex-col items-center justify-center min-h-[50vh] gap-4">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                <p class="text-base-content/70 text-sm">{"Checking authentication..."}</p>
            </div>
        }
    }
}

/// Path plus query string, as handed to the login redirect
///
/// `query` is the router's `query_str()`, which keeps its leading `?`.
fn requested_path(path: &str, query: &str) -> String {
    match query {
        "" | "?" => path.to_string(),
        query if query.starts_with('?') => format!("{path}{query}"),
        query => format!("{path}?{query}"),
    }
}
