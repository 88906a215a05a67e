use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/dishes", get(handlers::get_dishes))
        .route("/dishes/search", get(handlers::search))
        .route("/dishes/genre/:genre", get(handlers::get_dishes_by_genre))
        .route("/tags", get(handlers::get_tags))
        // Session selections
        .route(
            "/session",
            get(handlers::get_session).delete(handlers::reset_session),
        )
        .route("/session/liked", post(handlers::add_liked))
        .route("/session/liked/:id", delete(handlers::remove_liked))
        .route("/session/excluded", post(handlers::add_excluded))
        .route("/session/excluded/:id", delete(handlers::remove_excluded))
        .route("/session/tags/:id/toggle", post(handlers::toggle_tag))
        // Diagnosis
        .route(
            "/session/follow-up",
            get(handlers::get_follow_up).post(handlers::answer_follow_up),
        )
        .route("/suggestions", get(handlers::get_suggestions))
        .route("/share", get(handlers::get_share))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
