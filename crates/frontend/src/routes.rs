//! Application routes and the authoritative route table

use crate::auth_guard::RouteGuard;
use crate::pages::{
    AboutPage, AdminPage, ContactsPage, DownloadsPage, LandingPage, LoginPage, NotFoundPage,
    PortalPage,
};
use once_cell::sync::Lazy;
use portal_core::{RouteDescriptor, RouteMeta, RouteTable};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Routable)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/login")]
    Login,
    #[at("/about")]
    About,
    #[at("/downloads")]
    Downloads,
    #[at("/contacts")]
    Contacts,
    #[at("/portal")]
    Portal,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

static ROUTE_TABLE: Lazy<RouteTable<Route>> = Lazy::new(|| {
    RouteTable::new(vec![
        RouteDescriptor::new("/", "Landing", Route::Landing, RouteMeta::public()),
        RouteDescriptor::new("/login", "Login", Route::Login, RouteMeta::public()),
        RouteDescriptor::new("/about", "About", Route::About, RouteMeta::public()),
        RouteDescriptor::new("/downloads", "Downloads", Route::Downloads, RouteMeta::public()),
        RouteDescriptor::new("/contacts", "Contacts", Route::Contacts, RouteMeta::public()),
        RouteDescriptor::new("/portal", "Portal", Route::Portal, RouteMeta::authenticated()),
        RouteDescriptor::new("/admin", "Admin", Route::Admin, RouteMeta::admin()),
        RouteDescriptor::new("/404", "NotFound", Route::NotFound, RouteMeta::public()),
    ])
    .unwrap_or_else(|err| panic!("invalid route table: {err}"))
});

/// The route table consulted by the guard on every navigation
pub fn route_table() -> &'static RouteTable<Route> {
    &ROUTE_TABLE
}

impl Route {
    /// Authorization metadata; unknown routes carry none
    pub fn meta(self) -> RouteMeta {
        route_table()
            .by_view(&self)
            .map(|route| route.meta)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        route_table()
            .by_view(&self)
            .map_or("NotFound", |route| route.name)
    }
}

/// Render a matched route behind the navigation guard
pub fn switch(route: Route) -> Html {
    let page = match route {
        Route::Landing => html! { <LandingPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Downloads => html! { <DownloadsPage /> },
        Route::Contacts => html! { <ContactsPage /> },
        Route::Portal => html! { <PortalPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <RouteGuard {route}>
            { page }
        </RouteGuard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 8] = [
        Route::Landing,
        Route::Login,
        Route::About,
        Route::Downloads,
        Route::Contacts,
        Route::Portal,
        Route::Admin,
        Route::NotFound,
    ];

    #[test]
    fn table_matches_router_paths() {
        for route in ALL {
            let descriptor = route_table().by_view(&route).expect("route in table");
            assert_eq!(descriptor.path, route.to_path());
            assert_eq!(Route::recognize(descriptor.path), Some(route));
        }
        assert_eq!(route_table().len(), ALL.len());
    }

    #[test]
    fn protected_routes() {
        assert_eq!(Route::Portal.meta(), RouteMeta::authenticated());
        assert_eq!(Route::Admin.meta(), RouteMeta::admin());
        for route in [Route::Landing, Route::Login, Route::About, Route::Downloads, Route::Contacts]
        {
            assert!(route.meta().is_public(), "{route:?}");
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
        assert_eq!(Route::NotFound.name(), "NotFound");
        assert_eq!(Route::Admin.name(), "Admin");
    }
}
