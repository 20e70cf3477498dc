//! Email/password sign-in

use crate::auth::{LoginQuery, SessionAction, post_login_target, use_session};
use crate::routes::Route;
use crate::services::AuthApiService;
use crate::storage::token_store;
use crate::toast::use_toast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let toast = use_toast();
    let navigator = use_navigator();
    let location = use_location();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);

    let redirect = location
        .and_then(|location| location.query::<LoginQuery>().ok())
        .and_then(|query| post_login_target(query.redirect.as_deref()));

    // Nothing to ask for when the stored session is still good
    {
        let navigator = navigator.clone();
        let redirect = redirect.clone();
        use_effect_with(session.skips_login(), move |skips| {
            if *skips && let Some(navigator) = navigator {
                go_after_login(&navigator, redirect.as_deref());
            }
        });
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let session = session.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        let redirect = redirect.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let email_value = email.trim().to_string();
            let password_value = (*password).clone();
            if email_value.is_empty() || password_value.is_empty() {
                toast.error("Please enter your email and password.");
                return;
            }

            submitting.set(true);
            let submitting = submitting.clone();
            let session = session.clone();
            let toast = toast.clone();
            let password = password.clone();
            let navigator = navigator.clone();
            let redirect = redirect.clone();
            spawn_local(async move {
                match AuthApiService::default()
                    .login(&email_value, &password_value)
                    .await
                {
                    Ok(token) => {
                        session.dispatch(SessionAction::Login(token));
                        // A rejected write is reported through `session.error`
                        if token_store().is_authenticated() {
                            toast.success("Signed in successfully.");
                            if let Some(navigator) = &navigator {
                                go_after_login(navigator, redirect.as_deref());
                            }
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Login failed");
                        toast.error(err.user_message());
                        password.set(String::new());
                    }
                }
                submitting.set(false);
            });
        })
    };

    let busy = *submitting;

    html! {
        <div class="flex items-center justify-center min-h-[70vh] px-4">
            <div class="card w-full max-w-sm bg-base-100 shadow-xl">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title justify-center text-2xl mb-2">{"Sign in"}</h2>

                    if let Some(error) = &session.error {
                        <div role="alert" class="alert alert-error text-sm">
                            <span>{ format!("Could not keep you signed in: {error}") }</span>
                        </div>
                    } else if session.logged_in && session.expired {
                        <div role="alert" class="alert alert-warning text-sm">
                            <span>{"Your session has expired. Please sign in again."}</span>
                        </div>
                    }

                    <label class="form-control w-full">
                        <div class="label"><span class="label-text">{"Email"}</span></div>
                        <input
                            type="email"
                            autocomplete="username"
                            class="input input-bordered w-full"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={on_email_input}
                            disabled={busy}
                        />
                    </label>

                    <label class="form-control w-full">
                        <div class="label"><span class="label-text">{"Password"}</span></div>
                        <input
                            type="password"
                            autocomplete="current-password"
                            class="input input-bordered w-full"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            disabled={busy}
                        />
                    </label>

                    <div class="card-actions mt-4">
                        <button type="submit" class="btn btn-primary w-full" disabled={busy}>
                            if busy {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            {"Sign in"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn go_after_login(navigator: &Navigator, redirect: Option<&str>) {
    match redirect {
        // Already sanitized to a local path; keep its query string intact
        Some(target) => BrowserHistory::new().replace(target),
        None => navigator.replace(&Route::Landing),
    }
}
