//! Guard and token store configuration

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Storage key holding the encoded token
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Role claim value that unlocks admin routes
pub const DEFAULT_ADMIN_ROLE: &str = "admin";

/// Unit of the `exp` claim
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryUnit {
    /// Seconds since the Unix epoch (RFC 7519 NumericDate)
    #[default]
    Seconds,
    /// Milliseconds since the Unix epoch, compared directly with the clock
    Milliseconds,
}

impl ExpiryUnit {
    /// Convert an `exp` value into milliseconds since the epoch
    pub fn to_millis(self, exp: f64) -> f64 {
        match self {
            Self::Seconds => exp * 1000.0,
            Self::Milliseconds => exp,
        }
    }
}

impl FromStr for ExpiryUnit {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "seconds" => Ok(Self::Seconds),
            "ms" | "millis" | "milliseconds" => Ok(Self::Milliseconds),
            other => Err(format!("unknown expiry unit: {other}")),
        }
    }
}

/// What the navigation guard does with a present but expired token
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiredTokenPolicy {
    /// Record the expiry and keep treating the user as logged in
    #[default]
    Ignore,
    /// Treat an expired token as logged out for the authentication gate
    RequireLogin,
}

impl FromStr for ExpiredTokenPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "require_login" | "require-login" => Ok(Self::RequireLogin),
            other => Err(format!("unknown expired token policy: {other}")),
        }
    }
}

/// Settings shared by the token store and the navigation guard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub token_key: String,
    pub admin_role: String,
    pub expiry_unit: ExpiryUnit,
    pub expired_token_policy: ExpiredTokenPolicy,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            admin_role: DEFAULT_ADMIN_ROLE.to_string(),
            expiry_unit: ExpiryUnit::default(),
            expired_token_policy: ExpiredTokenPolicy::default(),
        }
    }
}

impl GuardConfig {
    pub fn with_expiry_unit(mut self, unit: ExpiryUnit) -> Self {
        self.expiry_unit = unit;
        self
    }

    pub fn with_expired_token_policy(mut self, policy: ExpiredTokenPolicy) -> Self {
        self.expired_token_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GuardConfig::default();
        assert_eq!(config.token_key, "token");
        assert_eq!(config.admin_role, "admin");
        assert_eq!(config.expiry_unit, ExpiryUnit::Seconds);
        assert_eq!(config.expired_token_policy, ExpiredTokenPolicy::Ignore);
    }

    #[test]
    fn test_parse_expiry_unit() {
        assert_eq!("seconds".parse::<ExpiryUnit>(), Ok(ExpiryUnit::Seconds));
        assert_eq!(" MS ".parse::<ExpiryUnit>(), Ok(ExpiryUnit::Milliseconds));
        assert!("hours".parse::<ExpiryUnit>().is_err());
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("ignore".parse::<ExpiredTokenPolicy>(), Ok(ExpiredTokenPolicy::Ignore));
        assert_eq!(
            "require-login".parse::<ExpiredTokenPolicy>(),
            Ok(ExpiredTokenPolicy::RequireLogin)
        );
        assert!("logout".parse::<ExpiredTokenPolicy>().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GuardConfig =
            serde_json::from_str(r#"{"expired_token_policy":"require_login"}"#).unwrap();
        assert_eq!(config.expired_token_policy, ExpiredTokenPolicy::RequireLogin);
        assert_eq!(config.token_key, "token");
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(ExpiryUnit::Seconds.to_millis(2.0), 2000.0);
        assert_eq!(ExpiryUnit::Milliseconds.to_millis(2.0), 2.0);
    }
}
