//! Video catalog API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{error, info};

use lectern_core::{CatalogError, NewVideo, VideoRecord};

use super::middleware::CurrentUser;
use crate::state::AppState;

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/videos
///
/// List the whole catalog, newest first.
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VideoRecord>>, impl IntoResponse> {
    match state.catalog().list_all() {
        Ok(videos) => Ok(Json(videos)),
        Err(e) => {
            error!("Failed to list videos: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error fetching videos".to_string(),
                }),
            ))
        }
    }
}

/// GET /api/videos/category/{category}
///
/// List videos with an exactly matching category, newest first. An unknown
/// category is an empty array, not a 404.
pub async fn list_by_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<VideoRecord>>, impl IntoResponse> {
    match state.catalog().list_by_category(&category) {
        Ok(videos) => Ok(Json(videos)),
        Err(e) => {
            error!(category = %category, "Failed to list videos by category: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error fetching videos by category".to_string(),
                }),
            ))
        }
    }
}

/// GET /api/videos/{id}
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<VideoRecord>, impl IntoResponse> {
    match state.catalog().get(&id) {
        Ok(video) => Ok(Json(video)),
        Err(CatalogError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Video not found".to_string(),
            }),
        )),
        Err(e) => {
            error!(id = %id, "Failed to fetch video: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error fetching video".to_string(),
                }),
            ))
        }
    }
}

/// POST /api/videos
///
/// Persist a new video and return the stored record. Required-field
/// presence is the client's job; the service stores what it is given.
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Json(body): Json<NewVideo>,
) -> Result<(StatusCode, Json<VideoRecord>), impl IntoResponse> {
    match state.catalog().insert(body) {
        Ok(video) => {
            info!(
                id = %video.id,
                title = %video.title,
                by = %identity.user_id,
                "Video created"
            );
            Ok((StatusCode::CREATED, Json(video)))
        }
        Err(e) => {
            error!("Failed to create video: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error creating video".to_string(),
                }),
            ))
        }
    }
}

/// DELETE /api/videos/{id}
///
/// Hard delete. Repeating on an already-deleted id is a 404, not success.
pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, impl IntoResponse> {
    match state.catalog().delete(&id) {
        Ok(()) => {
            info!(id = %id, by = %identity.user_id, "Video deleted");
            Ok(Json(SuccessResponse {
                message: "Video deleted successfully".to_string(),
            }))
        }
        Err(CatalogError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Video not found".to_string(),
            }),
        )),
        Err(e) => {
            error!(id = %id, "Failed to delete video: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error deleting video".to_string(),
                }),
            ))
        }
    }
}
