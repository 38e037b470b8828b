//! Types for the video catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A persisted course video document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// Store-assigned identifier (UUID v4). Immutable after creation.
    pub id: String,
    /// Course title.
    pub title: String,
    /// Course description.
    pub description: String,
    /// Free-form category. Not enumerated server-side.
    pub category: String,
    /// Instructor display name. Not an identity.
    pub instructor: String,
    /// Owning user's identifier. Advisory - ownership is enforced in
    /// consumers, never by the service.
    pub instructor_id: String,
    /// Where the video is hosted. Opaque to the service.
    pub video_url: String,
    /// Assigned by the store at creation. Immutable.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by a client to create a video.
///
/// Required-presence of title/description/category/video_url is a client
/// responsibility; the store persists whatever it is given. Missing fields
/// deserialize to empty strings rather than rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub category: String,
    pub instructor: String,
    pub instructor_id: String,
    pub video_url: String,
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Video not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_record_wire_field_names() {
        let record = VideoRecord {
            id: "abc-123".to_string(),
            title: "Intro to Go".to_string(),
            description: "Basics of the Go language".to_string(),
            category: "Programming".to_string(),
            instructor: "Ada".to_string(),
            instructor_id: "user-1".to_string(),
            video_url: "https://cdn.example.com/v/abc".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"instructorId\""));
        assert!(json.contains("\"videoUrl\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("instructor_id"));

        let parsed: VideoRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_new_video_deserializes_from_client_payload() {
        let json = r#"{
            "title": "Advanced Rust",
            "description": "Lifetimes and beyond",
            "category": "Programming",
            "instructor": "Grace",
            "instructorId": "user-9",
            "videoUrl": "https://cdn.example.com/v/def"
        }"#;

        let new: NewVideo = serde_json::from_str(json).unwrap();
        assert_eq!(new.title, "Advanced Rust");
        assert_eq!(new.instructor_id, "user-9");
        assert_eq!(new.video_url, "https://cdn.example.com/v/def");
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "Video not found: abc");

        let err = CatalogError::Database("locked".to_string());
        assert_eq!(err.to_string(), "Database error: locked");
    }
}
