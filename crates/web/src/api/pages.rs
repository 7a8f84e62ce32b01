// Landing and dashboard pages

use axum::{response::Html, routing::get, Router};

use crate::auth::{CurrentUser, MaybeUser};
use crate::views;
use crate::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard))
        .with_state(state)
}

async fn home(MaybeUser(user): MaybeUser) -> Html<String> {
    Html(views::render_home(user.as_deref()))
}

async fn dashboard(user: CurrentUser) -> Html<String> {
    Html(views::render_dashboard(user.username()))
}
