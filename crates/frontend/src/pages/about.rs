use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <section class="max-w-3xl mx-auto p-8 prose">
            <h1>{"About"}</h1>
            <p>
                {"The portal gives members a single place to sign in, fetch releases \
                  and reach the team. Administrators get an extra view of their session."}
            </p>
        </section>
    }
}
