//! Accessor for the token held in client-side storage
//!
//! Every query reads storage afresh and decodes the token again; nothing is
//! cached. Decode failures never escape: they collapse to "no role" and
//! "expired".

use crate::clock::{Clock, SystemClock};
use crate::config::{ExpiredTokenPolicy, GuardConfig};
use crate::error::StorageResult;
use crate::storage::KeyValueStorage;
use crate::token::{Claims, decode_claims};

/// Reads and writes the single client-held token
#[derive(Clone, Debug)]
pub struct TokenStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    config: GuardConfig,
}

impl<S: KeyValueStorage> TokenStore<S, SystemClock> {
    /// Create a store on `storage` with the default configuration
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, SystemClock, GuardConfig::default())
    }
}

impl<S: KeyValueStorage, C: Clock> TokenStore<S, C> {
    pub fn with_config(storage: S, clock: C, config: GuardConfig) -> Self {
        Self {
            storage,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The raw token, if one is stored and non-empty
    pub fn token(&self) -> Option<String> {
        self.storage
            .get(&self.config.token_key)
            .filter(|token| !token.is_empty())
    }

    /// Whether a non-empty token is stored; the token is not decoded
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Overwrite the stored token without validating it
    pub fn save_token(&self, token: &str) -> StorageResult<()> {
        self.storage.set(&self.config.token_key, token)?;
        tracing::debug!(key = %self.config.token_key, "Saved token");
        Ok(())
    }

    /// Remove the stored token
    pub fn clear_token(&self) -> StorageResult<()> {
        self.storage.remove(&self.config.token_key)?;
        tracing::debug!(key = %self.config.token_key, "Cleared token");
        Ok(())
    }

    /// Decoded claims of the stored token
    pub fn claims(&self) -> Option<Claims> {
        let token = self.token()?;
        match decode_claims(&token) {
            Ok(claims) => Some(claims),
            Err(err) => {
                tracing::debug!(error = %err, "Stored token could not be decoded");
                None
            }
        }
    }

    /// The `role` claim of the stored token
    pub fn user_role(&self) -> Option<String> {
        self.claims()?.role().map(str::to_string)
    }

    /// Whether the stored token is expired
    ///
    /// True when no token is stored, when it cannot be decoded, and when its
    /// `exp` claim is missing or not a number.
    pub fn has_token_expired(&self) -> bool {
        let Some(exp) = self.claims().and_then(|claims| claims.expires_at()) else {
            return true;
        };
        let now = self.clock.now_millis() as f64;
        self.config.expiry_unit.to_millis(exp) < now
    }

    /// Whether the stored token counts as a signed-in session
    ///
    /// Under [`ExpiredTokenPolicy::RequireLogin`] an expired token does not;
    /// otherwise any stored token does.
    pub fn is_authenticated(&self) -> bool {
        if !self.is_logged_in() {
            return false;
        }
        match self.config.expired_token_policy {
            ExpiredTokenPolicy::Ignore => true,
            ExpiredTokenPolicy::RequireLogin => !self.has_token_expired(),
        }
    }

    /// Whether the stored role matches the configured admin role exactly
    pub fn is_admin(&self) -> bool {
        self.user_role().as_deref() == Some(self.config.admin_role.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::ExpiryUnit;
    use crate::storage::{MemoryStorage, MockKeyValueStorage};
    use crate::token::encode_unsigned;
    use mockall::predicate::eq;
    use serde_json::json;

    const NOW_SECS: i64 = 1_700_000_000;

    fn store_with(token: Option<&str>) -> TokenStore<MemoryStorage, FixedClock> {
        let storage = MemoryStorage::new();
        if let Some(token) = token {
            storage.set("token", token).unwrap();
        }
        TokenStore::with_config(
            storage,
            FixedClock::at_seconds(NOW_SECS),
            GuardConfig::default(),
        )
    }

    #[test]
    fn test_logged_in_only_with_non_empty_token() {
        assert!(!store_with(None).is_logged_in());
        assert!(!store_with(Some("")).is_logged_in());
        assert!(store_with(Some("garbage")).is_logged_in());
    }

    #[test]
    fn test_save_token_overwrites() {
        let store = store_with(Some("first"));
        store.save_token("second").unwrap();
        assert_eq!(store.token().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_token_logs_out() {
        let store = store_with(Some("value"));
        store.clear_token().unwrap();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_role_of_valid_token() {
        let token = encode_unsigned(&json!({ "role": "admin", "exp": NOW_SECS + 60 }));
        let store = store_with(Some(&token));

        assert_eq!(store.user_role().as_deref(), Some("admin"));
        assert!(store.is_admin());
        assert!(!store.has_token_expired());
    }

    #[test]
    fn test_malformed_token_fails_safe() {
        for token in ["garbage", "a.b", "a.!!!.c", "e30.W10.sig"] {
            let store = store_with(Some(token));
            assert!(store.is_logged_in(), "{token}");
            assert_eq!(store.user_role(), None, "{token}");
            assert!(store.has_token_expired(), "{token}");
        }
    }

    #[test]
    fn test_missing_token_is_expired_without_role() {
        let store = store_with(None);
        assert_eq!(store.user_role(), None);
        assert!(store.has_token_expired());
        assert!(!store.is_admin());
    }

    #[test]
    fn test_missing_exp_is_expired() {
        let token = encode_unsigned(&json!({ "role": "user" }));
        let store = store_with(Some(&token));
        assert_eq!(store.user_role().as_deref(), Some("user"));
        assert!(store.has_token_expired());
    }

    #[test]
    fn test_expiry_boundary_in_seconds() {
        let past = encode_unsigned(&json!({ "exp": NOW_SECS - 1 }));
        let exact = encode_unsigned(&json!({ "exp": NOW_SECS }));
        let future = encode_unsigned(&json!({ "exp": NOW_SECS + 1 }));

        assert!(store_with(Some(&past)).has_token_expired());
        assert!(!store_with(Some(&exact)).has_token_expired());
        assert!(!store_with(Some(&future)).has_token_expired());
    }

    #[test]
    fn test_expiry_in_milliseconds() {
        let storage = MemoryStorage::new();
        let token = encode_unsigned(&json!({ "exp": NOW_SECS + 60 }));
        storage.set("token", &token).unwrap();
        let store = TokenStore::with_config(
            storage,
            FixedClock::at_seconds(NOW_SECS),
            GuardConfig::default().with_expiry_unit(ExpiryUnit::Milliseconds),
        );

        // A seconds-based exp read as milliseconds lies decades in the past
        assert!(store.has_token_expired());
    }

    #[test]
    fn test_expiry_tracks_clock() {
        let clock = FixedClock::at_seconds(NOW_SECS);
        let storage = MemoryStorage::new();
        let token = encode_unsigned(&json!({ "exp": NOW_SECS + 10 }));
        storage.set("token", &token).unwrap();
        let store = TokenStore::with_config(storage, clock.clone(), GuardConfig::default());

        assert!(!store.has_token_expired());
        clock.advance_millis(11_000);
        assert!(store.has_token_expired());
    }

    #[test]
    fn test_authenticated_follows_expiry_policy() {
        let expired = encode_unsigned(&json!({ "role": "user", "exp": 1000 }));
        let fresh = encode_unsigned(&json!({ "role": "user", "exp": NOW_SECS + 60 }));
        let with_policy = |token: Option<&str>, policy| {
            let storage = MemoryStorage::new();
            if let Some(token) = token {
                storage.set("token", token).unwrap();
            }
            TokenStore::with_config(
                storage,
                FixedClock::at_seconds(NOW_SECS),
                GuardConfig::default().with_expired_token_policy(policy),
            )
        };

        assert!(with_policy(Some(&expired), ExpiredTokenPolicy::Ignore).is_authenticated());
        assert!(!with_policy(Some(&expired), ExpiredTokenPolicy::RequireLogin).is_authenticated());
        assert!(with_policy(Some(&fresh), ExpiredTokenPolicy::RequireLogin).is_authenticated());
        assert!(!with_policy(Some("junk"), ExpiredTokenPolicy::RequireLogin).is_authenticated());
        for policy in [ExpiredTokenPolicy::Ignore, ExpiredTokenPolicy::RequireLogin] {
            assert!(!with_policy(None, policy).is_authenticated());
        }
    }

    #[test]
    fn test_reads_configured_key() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_get()
            .with(eq("session"))
            .times(1)
            .returning(|_| Some("abc".to_string()));

        let config = GuardConfig {
            token_key: "session".to_string(),
            ..GuardConfig::default()
        };
        let store = TokenStore::with_config(storage, FixedClock::default(), config);
        assert!(store.is_logged_in());
    }

    #[test]
    fn test_save_propagates_storage_errors() {
        let mut storage = MockKeyValueStorage::new();
        storage
            .expect_set()
            .returning(|key, _| Err(crate::error::StorageError::write_rejected(key, "quota")));

        let store = TokenStore::with_config(storage, FixedClock::default(), GuardConfig::default());
        assert!(store.save_token("abc").is_err());
    }
}
