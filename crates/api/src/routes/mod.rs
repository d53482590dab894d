pub mod health;
pub mod project;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /test                  liveness probe
/// /projects/...          project resource (see [`project::router`])
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(handlers::health::ping))
        .nest("/projects", project::router())
}
