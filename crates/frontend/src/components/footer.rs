use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().format("%Y").to_string();

    html! {
        <footer class="footer footer-center p-6 bg-base-200 text-base-content">
            <nav class="grid grid-flow-col gap-4">
                <Link<Route> to={Route::About} classes="link link-hover">{"About"}</Link<Route>>
                <Link<Route> to={Route::Downloads} classes="link link-hover">{"Downloads"}</Link<Route>>
                <Link<Route> to={Route::Contacts} classes="link link-hover">{"Contacts"}</Link<Route>>
            </nav>
            <p class="text-sm opacity-70">{format!("© {year} Portal")}</p>
        </footer>
    }
}
