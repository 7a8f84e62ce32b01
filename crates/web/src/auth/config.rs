// Session configuration loaded from environment variables.
// Decision: Fall back to the historical fixed key so existing deployments keep
// their sessions, but warn loudly when it is used

use std::time::Duration;

/// Signing key used when SESSION_SECRET is not set
pub const DEFAULT_SESSION_SECRET: &str = "your_secret_key";

/// Default session lifetime: 31 days
pub const DEFAULT_SESSION_MAX_AGE: Duration = Duration::from_secs(31 * 24 * 60 * 60);

/// Session cookie configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Secret key for signing session tokens
    pub secret: String,
    /// How long an issued session stays valid
    pub max_age: Duration,
    /// Whether the cookie is marked `Secure` (HTTPS only)
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SESSION_SECRET.to_string(),
            max_age: DEFAULT_SESSION_MAX_AGE,
            secure_cookie: false,
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("SESSION_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_SECRET.to_string());

        let max_age = std::env::var("SESSION_MAX_AGE")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SESSION_MAX_AGE);

        let secure_cookie = std::env::var("COOKIE_SECURE")
            .map(|s| s.to_lowercase() == "true" || s == "1")
            .unwrap_or(false);

        let config = Self {
            secret,
            max_age,
            secure_cookie,
        };
        if config.uses_default_secret() {
            tracing::warn!(
                "SESSION_SECRET is unset or the built-in default, sessions can be forged"
            );
        }
        config
    }

    /// Whether the built-in key is in use
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SESSION_SECRET
    }
}
