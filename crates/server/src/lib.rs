mod assets;
mod handlers;
mod state;

pub use state::{AppState, MediaLibrary, SharedState};

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Builds the application router: the listing page at `/` and the metadata
/// proxy at `/info` (POST only; other methods get a plain-text 405).
#[must_use]
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::list_library))
        .route(
            "/info",
            post(handlers::media_info).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
