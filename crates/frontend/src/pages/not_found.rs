use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] gap-4">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="opacity-70">{"This page does not exist."}</p>
            <Link<Route> to={Route::Landing} classes="btn btn-ghost">{"Back to home"}</Link<Route>>
        </div>
    }
}
