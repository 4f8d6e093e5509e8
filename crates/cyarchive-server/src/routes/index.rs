//! Site root.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::AppState;

/// Where the site root sends visitors.
pub const FIRST_PAGE: &str = "/page/1";

/// Root routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(redirect_to_first_page))
}

/// Redirect the root to the first listing page with a 302.
async fn redirect_to_first_page() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, FIRST_PAGE)])
}
