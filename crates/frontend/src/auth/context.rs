//! Session context and provider
//!
//! The token itself lives in local storage and is read afresh by the route
//! guard on every navigation. This context only holds a snapshot for the UI
//! (navbar, portal header) and funnels login/logout through the token store.

use crate::config::SessionConfig;
use crate::storage::token_store;
use gloo::timers::callback::Interval;
use portal_core::{Clock, KeyValueStorage, TokenStore};
use std::rc::Rc;
use yew::prelude::*;

/// UI snapshot of the stored token
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    /// A token is stored
    pub logged_in: bool,
    /// The stored token is accepted by the navigation guard
    pub authenticated: bool,
    pub role: Option<String>,
    pub display_name: Option<String>,
    pub is_admin: bool,
    pub expired: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// Read the current state out of `store`
    pub fn snapshot<S: KeyValueStorage, C: Clock>(store: &TokenStore<S, C>) -> Self {
        let claims = store.claims();
        let display_name = claims.as_ref().and_then(|claims| {
            claims
                .name()
                .or_else(|| claims.subject())
                .map(str::to_string)
        });

        Self {
            logged_in: store.is_logged_in(),
            authenticated: store.is_authenticated(),
            role: store.user_role(),
            display_name,
            is_admin: store.is_admin(),
            expired: store.has_token_expired(),
            error: None,
        }
    }

    /// Whether the login page should move on without asking for credentials
    ///
    /// Requires a session the guard accepts, so the redirect target cannot
    /// bounce back to login. An expired token keeps the form available for
    /// signing in again.
    pub const fn skips_login(&self) -> bool {
        self.authenticated && !self.expired
    }
}

/// Session actions
pub enum SessionAction {
    /// Store a freshly issued token
    Login(String),
    /// Drop the stored token
    Logout,
    /// Re-read storage, e.g. after another tab changed it
    Refresh,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionState>;

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let store = token_store();
        let next = match action {
            SessionAction::Login(token) => match store.save_token(&token) {
                Ok(()) => {
                    tracing::info!("Signed in");
                    SessionState::snapshot(&store)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to store token");
                    Self {
                        error: Some(err.to_string()),
                        ..SessionState::snapshot(&store)
                    }
                }
            },
            SessionAction::Logout => {
                if let Err(err) = store.clear_token() {
                    tracing::warn!(error = %err, "Failed to clear token");
                }
                tracing::info!("Signed out");
                SessionState::snapshot(&store)
            }
            SessionAction::Refresh => SessionState::snapshot(&store),
        };

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(|| SessionState::snapshot(&token_store()));

    // Re-read storage periodically so expiry and cross-tab changes show up
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(SessionConfig::REFRESH_INTERVAL_MS, move || {
                session.dispatch(SessionAction::Refresh);
            });
            move || drop(interval)
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}
