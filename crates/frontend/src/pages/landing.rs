use crate::auth::use_session;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let session = use_session();

    html! {
        <div class="hero min-h-[60vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">{"Welcome"}</h1>
                    <p class="py-6">
                        {"Your gateway to downloads, documentation and account tools."}
                    </p>
                    if session.authenticated {
                        <Link<Route> to={Route::Portal} classes="btn btn-primary">{"Open your portal"}</Link<Route>>
                    } else {
                        <Link<Route> to={Route::Login} classes="btn btn-primary">{"Sign in"}</Link<Route>>
                    }
                </div>
            </div>
        </div>
    }
}
