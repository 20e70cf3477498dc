use yew::prelude::*;

#[function_component(ContactsPage)]
pub fn contacts_page() -> Html {
    html! {
        <section class="max-w-3xl mx-auto p-8">
            <h1 class="text-3xl font-bold mb-6">{"Contacts"}</h1>
            <ul class="space-y-2">
                <li>
                    <span class="font-semibold">{"Support: "}</span>
                    <a class="link" href="mailto:support@portal.example">{"support@portal.example"}</a>
                </li>
                <li>
                    <span class="font-semibold">{"Sales: "}</span>
                    <a class="link" href="mailto:sales@portal.example">{"sales@portal.example"}</a>
                </li>
            </ul>
        </section>
    }
}
