// Authentication extractors
// Decision: Pages behind the gate redirect to /login instead of returning 401
// Decision: Extractors only need the SessionService, so any state that can
// hand one out works

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

use super::session::SessionService;

/// Where unauthenticated requests are sent
pub const LOGIN_PATH: &str = "/login";

/// Username of the authenticated caller.
/// Rejects with a redirect to the login page when there is no valid session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

impl CurrentUser {
    pub fn username(&self) -> &str {
        &self.0
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Arc<SessionService>: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let sessions = Arc::<SessionService>::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        match sessions.current(&jar) {
            Some(username) => Ok(CurrentUser(username)),
            None => {
                tracing::debug!(path = %parts.uri.path(), "No session, redirecting to login");
                Err(Redirect::to(LOGIN_PATH))
            }
        }
    }
}

/// Optional auth extractor - None when the caller is anonymous
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaybeUser(pub Option<String>);

#[axum::async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
    Arc<SessionService>: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let sessions = Arc::<SessionService>::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(MaybeUser(sessions.current(&jar)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionConfig;
    use axum::http::{header, Request, StatusCode};
    use axum::response::IntoResponse;

    fn sessions() -> Arc<SessionService> {
        Arc::new(SessionService::new(SessionConfig {
            secret: "middleware-test".to_string(),
            ..Default::default()
        }))
    }

    fn parts_with_cookie(cookie: Option<String>) -> Parts {
        let mut builder = Request::builder().uri("/dashboard");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_current_user_with_session() {
        let state = sessions();
        let cookie = state.start("alice").unwrap();
        let mut parts = parts_with_cookie(Some(format!("{}={}", cookie.name(), cookie.value())));

        let user = CurrentUser::from_request_parts(&mut parts, &state).await.unwrap();
        assert_eq!(user.username(), "alice");
    }

    #[tokio::test]
    async fn test_current_user_redirects_without_session() {
        let state = sessions();
        let mut parts = parts_with_cookie(None);

        let rejection = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err()
            .into_response();
        assert_eq!(rejection.status(), StatusCode::SEE_OTHER);
        assert_eq!(rejection.headers()[header::LOCATION], LOGIN_PATH);
    }

    #[tokio::test]
    async fn test_maybe_user() {
        let state = sessions();

        let mut anonymous = parts_with_cookie(None);
        let MaybeUser(user) = MaybeUser::from_request_parts(&mut anonymous, &state)
            .await
            .unwrap();
        assert_eq!(user, None);

        let cookie = state.start("bob").unwrap();
        let mut signed_in = parts_with_cookie(Some(format!("session={}", cookie.value())));
        let MaybeUser(user) = MaybeUser::from_request_parts(&mut signed_in, &state)
            .await
            .unwrap();
        assert_eq!(user.as_deref(), Some("bob"));
    }
}
