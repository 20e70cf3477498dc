//! Frontend configuration
//!
//! Build-time values come from `PORTAL_*` environment variables; a static
//! deployment can override them without rebuilding by defining
//! `window.PORTAL_CONFIG` before the bundle loads. Values here are public.

use portal_core::{ExpiredTokenPolicy, ExpiryUnit, GuardConfig};

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Local storage key for the encoded token
    pub const TOKEN_KEY: &'static str = portal_core::config::DEFAULT_TOKEN_KEY;

    /// Login endpoint, relative to the API base URL
    pub const LOGIN_PATH: &'static str = "/auth/login";
}

/// Session snapshot configuration
pub struct SessionConfig;

impl SessionConfig {
    /// How often the session snapshot re-reads storage, in milliseconds
    pub const REFRESH_INTERVAL_MS: u32 = 60_000; // 1 minute
}

/// Toast notification configuration
pub struct ToastConfig;

impl ToastConfig {
    /// Time a toast stays visible, in milliseconds
    pub const TIMEOUT_MS: u32 = 5_000;

    pub const CLOSE_ON_CLICK: bool = true;

    pub const PAUSE_ON_HOVER: bool = true;

    /// Tailwind classes placing the stack in the top-right corner
    pub const POSITION_CLASSES: &'static str = "fixed top-4 right-4 z-50";
}

/// Theme configuration
pub struct ThemeConfig;

impl ThemeConfig {
    /// Local storage key for the saved theme
    pub const STORAGE_KEY: &'static str = "theme";
}

/// Configuration assembled at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub guard: GuardConfig,
}

impl AppConfig {
    /// Load build-time configuration and apply runtime overrides
    pub fn load() -> Self {
        let mut config = Self::from_build_env();
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }

    fn from_build_env() -> Self {
        let guard = GuardConfig {
            token_key: AuthConfig::TOKEN_KEY.to_string(),
            ..GuardConfig::default()
        };
        let expiry_unit = option_env!("PORTAL_EXPIRY_UNIT")
            .and_then(|value| parse_or_warn::<ExpiryUnit>("PORTAL_EXPIRY_UNIT", value))
            .unwrap_or(guard.expiry_unit);
        let policy = option_env!("PORTAL_EXPIRED_TOKEN_POLICY")
            .and_then(|value| {
                parse_or_warn::<ExpiredTokenPolicy>("PORTAL_EXPIRED_TOKEN_POLICY", value)
            })
            .unwrap_or(guard.expired_token_policy);

        Self {
            api_base_url: option_env!("PORTAL_API_BASE_URL")
                .and_then(normalize_value)
                .unwrap_or_default(),
            guard: guard
                .with_expiry_unit(expiry_unit)
                .with_expired_token_policy(policy),
        }
    }

    /// API base URL, falling back to the page origin
    pub fn api_base_url(&self) -> String {
        if self.api_base_url.is_empty() {
            window_origin().unwrap_or_default()
        } else {
            self.api_base_url.trim_end_matches('/').to_string()
        }
    }

    /// Absolute URL for an API path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url(), path)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    expiry_unit: Option<ExpiryUnit>,
    expired_token_policy: Option<ExpiredTokenPolicy>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(unit) = runtime.expiry_unit {
        config.guard.expiry_unit = unit;
    }
    if let Some(policy) = runtime.expired_token_policy {
        config.guard.expired_token_policy = policy;
    }
}

fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PORTAL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        expiry_unit: read_runtime_value(&object, "expiry_unit")
            .and_then(|value| parse_or_warn("expiry_unit", &value)),
        expired_token_policy: read_runtime_value(&object, "expired_token_policy")
            .and_then(|value| parse_or_warn("expired_token_policy", &value)),
    })
}

fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_value(&value)
}

fn window_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_or_warn<T>(name: &str, value: &str) -> Option<T>
where
    T: std::str::FromStr<Err = String>,
{
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::warn!(setting = name, error = %err, "Ignoring invalid configuration value");
            None
        }
    }
}
