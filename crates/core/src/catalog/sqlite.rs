//! SQLite-backed video catalog implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{CatalogError, NewVideo, VideoCatalog, VideoRecord};
use crate::metrics::CATALOG_OPS;

/// SQLite-backed video catalog.
pub struct SqliteCatalog {
    conn: Mutex<Connection>,
}

impl SqliteCatalog {
    /// Create a new SQLite catalog, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open(path).map_err(|e| CatalogError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite catalog (useful for testing).
    pub fn in_memory() -> Result<Self, CatalogError> {
        let conn =
            Connection::open_in_memory().map_err(|e| CatalogError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CatalogError> {
        conn.execute_batch(
            r#"
            -- Course videos (one row per record)
            CREATE TABLE IF NOT EXISTS videos (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                instructor TEXT NOT NULL,
                instructor_id TEXT NOT NULL,
                video_url TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_videos_category ON videos(category);
            CREATE INDEX IF NOT EXISTS idx_videos_created_at ON videos(created_at);
            "#,
        )
        .map_err(|e| CatalogError::Database(e.to_string()))?;
        Ok(())
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<VideoRecord> {
        let created_at_str: String = row.get(7)?;

        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(VideoRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            category: row.get(3)?,
            instructor: row.get(4)?,
            instructor_id: row.get(5)?,
            video_url: row.get(6)?,
            created_at,
        })
    }

    fn query_records<P: rusqlite::Params>(
        conn: &Connection,
        sql: &str,
        params: P,
    ) -> Result<Vec<VideoRecord>, CatalogError> {
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params, Self::row_to_record)
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| CatalogError::Database(e.to_string()))?);
        }
        Ok(records)
    }
}

const SELECT_COLUMNS: &str =
    "id, title, description, category, instructor, instructor_id, video_url, created_at";

impl VideoCatalog for SqliteCatalog {
    fn insert(&self, new: NewVideo) -> Result<VideoRecord, CatalogError> {
        let conn = self.conn.lock().unwrap();
        let record = VideoRecord {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            category: new.category,
            instructor: new.instructor,
            instructor_id: new.instructor_id,
            video_url: new.video_url,
            created_at: Utc::now(),
        };

        conn.execute(
            r#"
            INSERT INTO videos (id, title, description, category, instructor, instructor_id, video_url, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                record.id,
                record.title,
                record.description,
                record.category,
                record.instructor,
                record.instructor_id,
                record.video_url,
                record.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| {
            CATALOG_OPS.with_label_values(&["insert", "error"]).inc();
            CatalogError::Database(e.to_string())
        })?;

        CATALOG_OPS.with_label_values(&["insert", "ok"]).inc();
        Ok(record)
    }

    fn get(&self, id: &str) -> Result<VideoRecord, CatalogError> {
        let conn = self.conn.lock().unwrap();
        let sql = format!("SELECT {} FROM videos WHERE id = ?1", SELECT_COLUMNS);

        match conn.query_row(&sql, params![id], Self::row_to_record) {
            Ok(record) => {
                CATALOG_OPS.with_label_values(&["get", "ok"]).inc();
                Ok(record)
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                CATALOG_OPS.with_label_values(&["get", "not_found"]).inc();
                Err(CatalogError::NotFound(id.to_string()))
            }
            Err(e) => {
                CATALOG_OPS.with_label_values(&["get", "error"]).inc();
                Err(CatalogError::Database(e.to_string()))
            }
        }
    }

    fn list_all(&self) -> Result<Vec<VideoRecord>, CatalogError> {
        let conn = self.conn.lock().unwrap();
        // rowid breaks ties between records created within the same instant
        let sql = format!(
            "SELECT {} FROM videos ORDER BY created_at DESC, rowid DESC",
            SELECT_COLUMNS
        );

        let records = Self::query_records(&conn, &sql, params![])?;
        CATALOG_OPS.with_label_values(&["list_all", "ok"]).inc();
        Ok(records)
    }

    fn list_by_category(&self, category: &str) -> Result<Vec<VideoRecord>, CatalogError> {
        let conn = self.conn.lock().unwrap();
        let sql = format!(
            "SELECT {} FROM videos WHERE category = ?1 ORDER BY created_at DESC, rowid DESC",
            SELECT_COLUMNS
        );

        let records = Self::query_records(&conn, &sql, params![category])?;
        CATALOG_OPS
            .with_label_values(&["list_by_category", "ok"])
            .inc();
        Ok(records)
    }

    fn delete(&self, id: &str) -> Result<(), CatalogError> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn
            .execute("DELETE FROM videos WHERE id = ?1", params![id])
            .map_err(|e| {
                CATALOG_OPS.with_label_values(&["delete", "error"]).inc();
                CatalogError::Database(e.to_string())
            })?;

        if deleted == 0 {
            CATALOG_OPS
                .with_label_values(&["delete", "not_found"])
                .inc();
            return Err(CatalogError::NotFound(id.to_string()));
        }

        CATALOG_OPS.with_label_values(&["delete", "ok"]).inc();
        Ok(())
    }
}
