// Session tokens carried in a signed cookie
// Decision: Use HS256 JWTs so the server keeps no session table
// Decision: Logout only clears the cookie; a copied token stays valid until exp

use anyhow::{Context, Result};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::config::SessionConfig;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Claims carried by a session token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject (the authenticated username)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Issues, reads and clears session cookies
#[derive(Clone)]
pub struct SessionService {
    config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionService {
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Sign a token bound to `username`
    pub fn issue_token(&self, username: &str) -> Result<String> {
        let now = Utc::now();
        let exp = Duration::from_std(self.config.max_age)
            .ok()
            .and_then(|max_age| now.checked_add_signed(max_age))
            .context("Session lifetime is out of range")?;

        let claims = SessionClaims {
            sub: username.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .context("Failed to encode session token")
    }

    /// Check signature and expiry, returning the claims
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .context("Invalid session token")?;

        Ok(token_data.claims)
    }

    /// Build the cookie that authenticates `username` (Anonymous -> Authenticated)
    pub fn start(&self, username: &str) -> Result<Cookie<'static>> {
        let token = self.issue_token(username)?;

        Ok(Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .secure(self.config.secure_cookie)
            .same_site(SameSite::Lax)
            .build())
    }

    /// Username bound to the request's session, if the cookie is present and valid
    pub fn current(&self, jar: &CookieJar) -> Option<String> {
        let cookie = jar.get(SESSION_COOKIE)?;
        match self.validate_token(cookie.value()) {
            Ok(claims) => Some(claims.sub),
            Err(e) => {
                tracing::debug!("Session cookie rejected: {:#}", e);
                None
            }
        }
    }

    /// Clear the session cookie (Authenticated -> Anonymous)
    pub fn end(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
    }
}
