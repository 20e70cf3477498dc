//! Post-login redirect handling

use serde::{Deserialize, Serialize};

/// Query string of the login page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl LoginQuery {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            redirect: Some(path.into()),
        }
    }
}

/// Where to go after signing in
///
/// Only same-origin absolute paths are honoured; anything else (empty,
/// protocol-relative `//host`, full URLs, the login page itself) yields
/// `None` and the caller falls back to the landing page.
pub fn post_login_target(redirect: Option<&str>) -> Option<String> {
    let target = redirect?.trim();
    if !target.starts_with('/') || target.starts_with("//") || target.contains('\\') {
        return None;
    }

    let path = target.split(['?', '#']).next().unwrap_or(target);
    if path == "/login" || path.starts_with("/login/") {
        return None;
    }

    Some(target.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_local_paths_with_query() {
        assert_eq!(
            post_login_target(Some("/admin")),
            Some("/admin".to_string())
        );
        assert_eq!(
            post_login_target(Some("/portal?tab=files")),
            Some("/portal?tab=files".to_string())
        );
    }

    #[test]
    fn rejects_foreign_or_missing_targets() {
        assert_eq!(post_login_target(None), None);
        assert_eq!(post_login_target(Some("")), None);
        assert_eq!(post_login_target(Some("https://evil.example")), None);
        assert_eq!(post_login_target(Some("//evil.example")), None);
        assert_eq!(post_login_target(Some("/\\evil.example")), None);
        assert_eq!(post_login_target(Some("portal")), None);
    }

    #[test]
    fn does_not_loop_back_to_login() {
        assert_eq!(post_login_target(Some("/login")), None);
        assert_eq!(post_login_target(Some("/login?redirect=/admin")), None);
    }

    #[test]
    fn query_key_matches_guard_parameter() {
        let value = serde_json::to_value(LoginQuery::to("/portal")).unwrap();
        assert!(value.get(portal_core::REDIRECT_QUERY_PARAM).is_some());
    }

    #[test]
    fn query_serializes_redirect() {
        let query = LoginQuery::to("/admin");
        assert_eq!(serde_json::to_string(&query).unwrap(), r#"{"redirect":"/admin"}"#);
        assert_eq!(
            serde_json::to_string(&LoginQuery::default()).unwrap(),
            "{}"
        );
    }
}
