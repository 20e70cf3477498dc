//! Administrator view of the current token

use crate::storage::token_store;
use serde_json::Value;
use yew::prelude::*;

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let claims = token_store().claims();

    html! {
        <section class="max-w-3xl mx-auto p-8">
            <h1 class="text-3xl font-bold mb-6">{"Administration"}</h1>
            <h2 class="text-xl font-semibold mb-2">{"Token claims"}</h2>
            { match claims {
                Some(claims) => html! {
                    <div class="overflow-x-auto">
                        <table class="table table-zebra">
                            <thead>
                                <tr><th>{"Claim"}</th><th>{"Value"}</th></tr>
                            </thead>
                            <tbody>
                                { for claims.iter().map(|(name, value)| html! {
                                    <tr key={name.clone()}>
                                        <td class="font-mono">{name}</td>
                                        <td class="font-mono break-all">{display_value(value)}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                },
                None => html! {
                    <p class="opacity-70">{"The stored token could not be decoded."}</p>
                },
            } }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_are_shown_unquoted() {
        assert_eq!(display_value(&json!("admin")), "admin");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(["a", "b"])), r#"["a","b"]"#);
    }
}
