//! Top navigation bar

use crate::auth::{SessionAction, use_session};
use crate::components::ThemeToggle;
use crate::routes::Route;
use crate::toast::use_toast;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let toast = use_toast();
    let current = use_route::<Route>();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::Logout);
            toast.info("You have been signed out.");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Landing);
            }
        })
    };

    let link = |route: Route, label: &'static str| {
        let active = current == Some(route);
        html! {
            <li>
                <Link<Route> to={route} classes={classes!(active.then_some("active"))}>
                    {label}
                </Link<Route>>
            </li>
        }
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm px-4">
            <div class="flex-1">
                <Link<Route> to={Route::Landing} classes="btn btn-ghost text-xl">{"Portal"}</Link<Route>>
            </div>
            <div class="flex-none gap-2">
                <ul class="menu menu-horizontal px-1">
                    { link(Route::About, "About") }
                    { link(Route::Downloads, "Downloads") }
                    { link(Route::Contacts, "Contacts") }
                    if session.authenticated {
                        { link(Route::Portal, "Portal") }
                    }
                    if session.is_admin {
                        { link(Route::Admin, "Admin") }
                    }
                </ul>
                <ThemeToggle />
                if session.logged_in {
                    <div class="flex items-center gap-2">
                        if let Some(name) = &session.display_name {
                            <span class="text-sm opacity-80 hidden sm:inline">{name}</span>
                        }
                        <button class="btn btn-sm btn-outline" onclick={on_logout}>{"Sign Out"}</button>
                    </div>
                } else {
                    <Link<Route> to={Route::Login} classes="btn btn-sm btn-primary">{"Sign In"}</Link<Route>>
                }
            </div>
        </div>
    }
}
