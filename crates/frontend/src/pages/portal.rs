//! Signed-in user's portal

use crate::auth::use_session;
use crate::storage::token_store;
use chrono::{DateTime, Utc};
use portal_core::{Claims, ExpiryUnit};
use yew::prelude::*;

/// Expiry of `claims` as a UTC timestamp, if `exp` is present and in range
pub fn expiry_time(claims: &Claims, unit: ExpiryUnit) -> Option<DateTime<Utc>> {
    let millis = unit.to_millis(claims.expires_at()?);
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

#[function_component(PortalPage)]
pub fn portal_page() -> Html {
    let session = use_session();
    let store = token_store();
    let claims = store.claims();
    let expires = claims
        .as_ref()
        .and_then(|claims| expiry_time(claims, store.config().expiry_unit))
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let role = session.role.clone().unwrap_or_else(|| "-".to_string());
    let subject = claims
        .as_ref()
        .and_then(Claims::subject)
        .unwrap_or("-")
        .to_string();

    html! {
        <section class="max-w-3xl mx-auto p-8">
            <h1 class="text-3xl font-bold mb-6">
                { format!("Hello, {}", session.display_name.as_deref().unwrap_or("there")) }
            </h1>
            if session.expired {
                <div role="alert" class="alert alert-warning mb-6">
                    <span>{"Your session has expired. Sign in again to refresh it."}</span>
                </div>
            }
            <div class="stats stats-vertical sm:stats-horizontal shadow w-full">
                <div class="stat">
                    <div class="stat-title">{"Account"}</div>
                    <div class="stat-value text-lg">{subject}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Role"}</div>
                    <div class="stat-value text-lg">{role}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Session expires"}</div>
                    <div class="stat-value text-lg">{expires}</div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims_of(value: serde_json::Value) -> Claims {
        match value {
            serde_json::Value::Object(map) => Claims::from_map(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn expiry_in_seconds() {
        let claims = claims_of(json!({"exp": 1_700_000_000}));
        let at = expiry_time(&claims, ExpiryUnit::Seconds).unwrap();
        assert_eq!(at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn expiry_in_milliseconds() {
        let claims = claims_of(json!({"exp": 1_700_000_000_000_i64}));
        let at = expiry_time(&claims, ExpiryUnit::Milliseconds).unwrap();
        assert_eq!(at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn missing_expiry() {
        let claims = claims_of(json!({"role": "user"}));
        assert_eq!(expiry_time(&claims, ExpiryUnit::Seconds), None);
    }
}
