//! Dedup store: schema, path handling and insert-if-absent over SQLite.

use crate::{error::IngestError, models::email::email_record::EmailRecord};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::{debug, info};

const CREATE_EMAILS: &str = r#"CREATE TABLE IF NOT EXISTS emails (
    message_id TEXT PRIMARY KEY,
    subject TEXT NOT NULL,
    snippet TEXT NOT NULL,
    date TEXT NOT NULL,
    from_email TEXT NOT NULL,
    attachment_url TEXT NOT NULL,
    email_url TEXT NOT NULL
)"#;

/// Persistent table of ingested emails keyed by `message_id`.
///
/// Every operation acquires its own connection from the pool and returns it
/// before completing, so no handle outlives a single call.
#[derive(Clone)]
pub struct EmailStore {
    pool: SqlitePool,
}

impl EmailStore {
    /// Connect to `db_url` and create the schema if absent.
    pub async fn open(db_url: &str) -> Result<Self, IngestError> {
        let db_url = ensure_sqlite_path(db_url);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;
        let store = EmailStore { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the `emails` table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<(), IngestError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query(CREATE_EMAILS).execute(&mut *conn).await?;
        Ok(())
    }

    /// Whether an email with `message_id` is already stored.
    pub async fn exists(&self, message_id: &str) -> Result<bool, IngestError> {
        let mut conn = self.pool.acquire().await?;
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM emails WHERE message_id = ?")
            .bind(message_id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.is_some())
    }

    /// Store `record` unless its `message_id` is already present.
    ///
    /// Returns `false` for a skip. A concurrent writer that wins the race is
    /// caught by the primary key and also reported as a skip.
    pub async fn insert(&self, record: &EmailRecord) -> Result<bool, IngestError> {
        if record.message_id.is_empty() {
            return Err(IngestError::MalformedField("message_id"));
        }
        if self.exists(&record.message_id).await? {
            info!(
                "email with message id {} already exists, skipping save",
                record.message_id
            );
            return Ok(false);
        }

        let mut conn = self.pool.acquire().await?;
        let res = sqlx::query(
            "INSERT INTO emails (message_id, subject, snippet, date, from_email, attachment_url, email_url) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.message_id)
        .bind(&record.subject)
        .bind(&record.snippet)
        .bind(&record.date)
        .bind(&record.from_email)
        .bind(&record.attachment_url)
        .bind(&record.email_url)
        .execute(&mut *conn)
        .await;

        match res {
            Ok(_) => {
                info!("email with message id {} saved", record.message_id);
                Ok(true)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                debug!("lost insert race for {}", record.message_id);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Stored row for `message_id`, if any.
    pub async fn get(&self, message_id: &str) -> Result<Option<EmailRecord>, IngestError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, EmailRecord>(
            "SELECT message_id, subject, snippet, date, from_email, attachment_url, email_url FROM emails WHERE message_id = ?",
        )
        .bind(message_id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(row)
    }

    /// Number of stored emails.
    pub async fn count(&self) -> Result<i64, IngestError> {
        let mut conn = self.pool.acquire().await?;
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM emails")
            .fetch_one(&mut *conn)
            .await?;
        Ok(n)
    }
}

/// Ensure SQLite file and parent folder exist for a given sqlx URL.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    if !db_url.starts_with("sqlite:") {
        return db_url.to_string();
    }
    let path_part = db_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    if path_part == ":memory:" {
        return db_url.to_string();
    }
    let path_only = match path_part.split_once('?') {
        Some((p, _)) => p,
        None => path_part,
    };
    if !path_only.is_empty() {
        let p = Path::new(path_only);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(p);
    }
    db_url.to_string()
}
