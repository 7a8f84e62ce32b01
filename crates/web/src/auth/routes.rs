// Signup, login and logout pages
// Decision: Form posts, not JSON; failures re-render the form with a message
// Decision: Signing up logs the new user in straight away

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use slidebox_core::CredentialError;

use super::middleware::LOGIN_PATH;
use crate::api::WebError;
use crate::views;
use crate::AppState;

/// Where the browser lands after signing in
const DASHBOARD_PATH: &str = "/dashboard";

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Username/password form shared by signup and login
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// Create auth routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/signup", get(signup_page).post(signup))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
        .with_state(state)
}

async fn signup_page() -> Html<String> {
    Html(views::render_signup(None))
}

async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, WebError> {
    match state
        .credentials
        .register(&form.username, &form.password)
        .await
    {
        Ok(user) => {
            let cookie = state.sessions.start(&user.username)?;
            Ok((jar.add(cookie), Redirect::to(DASHBOARD_PATH)).into_response())
        }
        Err(e @ CredentialError::AlreadyExists(_)) => {
            tracing::debug!(username = %form.username, "Signup rejected: {}", e);
            Ok(Html(views::render_signup(Some(&e.to_string()))).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn login_page() -> Html<String> {
    Html(views::render_login(None))
}

async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, WebError> {
    let Some(user) = state
        .credentials
        .authenticate(&form.username, &form.password)
        .await?
    else {
        tracing::debug!(username = %form.username, "Login failed");
        return Ok(Html(views::render_login(Some(INVALID_CREDENTIALS))).into_response());
    };

    let cookie = state.sessions.start(&user.username)?;
    tracing::info!(username = %user.username, "User logged in");
    Ok((jar.add(cookie), Redirect::to(DASHBOARD_PATH)).into_response())
}

async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    (state.sessions.end(jar), Redirect::to(LOGIN_PATH))
}
