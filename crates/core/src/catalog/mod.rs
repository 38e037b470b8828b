//! Video catalog - the document collection behind the course listing.
//!
//! The catalog is an opaque collection of [`VideoRecord`] documents accessed
//! by primary key and by category equality. Records are created and deleted
//! whole; there is no update path.

mod sqlite;
mod types;

pub use sqlite::SqliteCatalog;
pub use types::*;

/// Trait for video catalog storage.
pub trait VideoCatalog: Send + Sync {
    /// Persist a new video.
    ///
    /// The store assigns the id and created_at timestamp; both are set
    /// exactly once and never mutated afterwards. Returns the full stored
    /// record.
    fn insert(&self, new: NewVideo) -> Result<VideoRecord, CatalogError>;

    /// Get a video by id.
    fn get(&self, id: &str) -> Result<VideoRecord, CatalogError>;

    /// List all videos, newest first.
    fn list_all(&self) -> Result<Vec<VideoRecord>, CatalogError>;

    /// List videos with an exactly matching category, newest first.
    ///
    /// An unknown category yields an empty list, not an error.
    fn list_by_category(&self, category: &str) -> Result<Vec<VideoRecord>, CatalogError>;

    /// Delete a video by id. Hard delete, no tombstone.
    ///
    /// Repeating the call on an already-deleted id is `NotFound`, not
    /// success.
    fn delete(&self, id: &str) -> Result<(), CatalogError>;
}
