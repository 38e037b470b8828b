use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handlers, videos};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Video catalog
        .route("/videos", get(videos::list_videos))
        .route("/videos", post(videos::create_video))
        .route("/videos/category/{category}", get(videos::list_by_category))
        .route("/videos/{id}", get(videos::get_video))
        .route("/videos/{id}", delete(videos::delete_video))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            super::middleware::auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .route("/metrics", get(handlers::metrics_text))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(super::middleware::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
