/// API route modules
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub mod root;
pub mod users;

/// Build the application router over the given state
///
/// This is the full route table; the binary and the integration tests both
/// serve exactly this router.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        // Users
        .route("/users/", get(users::list_users))
        .route("/users/", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::delete_user))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
