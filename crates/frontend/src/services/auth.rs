//! Authentication API service

use crate::config::{AppConfig, AuthConfig};
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService {
    client: reqwest::Client,
    login_url: String,
}

impl AuthApiService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            login_url: config.api_url(AuthConfig::LOGIN_PATH),
        }
    }

    /// Exchange credentials for an encoded token
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let response = self
            .client
            .post(&self.login_url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let body: LoginResponse = response.json().await?;
        if body.token.is_empty() {
            return Err(AppError::Parse("login response carried an empty token".to_string()));
        }
        Ok(body.token)
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new(&AppConfig::load())
    }
}

/// Pull `message` out of an error body, or use the raw text
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
        }) => message,
        Ok(_) => String::new(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_message() {
        assert_eq!(
            error_message(r#"{"message":"Account locked"}"#),
            "Account locked"
        );
        assert_eq!(error_message(r#"{"code":42}"#), "");
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(error_message(""), "");
    }

    #[test]
    fn login_request_shape() {
        let body = serde_json::to_value(LoginRequest {
            email: "ada@example.com",
            password: "hunter2",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "ada@example.com", "password": "hunter2"})
        );
    }

    #[test]
    fn service_targets_login_endpoint() {
        let config = AppConfig {
            api_base_url: "https://api.portal.dev".to_string(),
            guard: portal_core::GuardConfig::default(),
        };
        let service = AuthApiService::new(&config);
        assert_eq!(service.login_url, "https://api.portal.dev/auth/login");
    }
}
