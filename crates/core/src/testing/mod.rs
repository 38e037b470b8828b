//! Test utilities shared across crates.

/// Canned records for exercising the query pipeline and listing surfaces.
pub mod fixtures {
    use chrono::{Duration, TimeZone, Utc};

    use crate::catalog::{NewVideo, VideoRecord};

    /// Build a record with a deterministic id and a creation time offset in
    /// minutes from a fixed base, so ordering assertions are stable.
    pub fn video(title: &str, category: &str, instructor: &str, minutes: i64) -> VideoRecord {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let slug = title.to_lowercase().replace(' ', "-");
        VideoRecord {
            id: format!("vid-{}", slug),
            title: title.to_string(),
            description: format!("About {}", title),
            category: category.to_string(),
            instructor: instructor.to_string(),
            instructor_id: format!("user-{}", instructor.to_lowercase().replace(' ', "-")),
            video_url: format!("https://cdn.example.com/videos/{}", slug),
            created_at: base + Duration::minutes(minutes),
        }
    }

    /// A small mixed catalog: two categories, three instructors.
    pub fn sample_records() -> Vec<VideoRecord> {
        vec![
            video("Intro to Go", "Programming", "Ada Lovelace", 0),
            video("Advanced Go", "Programming", "Ada Lovelace", 30),
            video("Watercolor Basics", "Art", "Grace Hopper", 10),
            video("Figure Drawing", "Art", "Alan Turing", 20),
        ]
    }

    /// Create-request payload matching [`video`].
    pub fn new_video(title: &str, category: &str) -> NewVideo {
        let slug = title.to_lowercase().replace(' ', "-");
        NewVideo {
            title: title.to_string(),
            description: format!("About {}", title),
            category: category.to_string(),
            instructor: "Ada Lovelace".to_string(),
            instructor_id: "user-ada-lovelace".to_string(),
            video_url: format!("https://cdn.example.com/videos/{}", slug),
        }
    }
}
