//! Database row for an ingested email.

use sqlx::FromRow;

/// One email as persisted in the `emails` table.
///
/// Optional values are empty strings, never NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct EmailRecord {
    pub message_id: String,
    pub subject: String,
    pub snippet: String,
    pub date: String,
    pub from_email: String,
    pub attachment_url: String,
    pub email_url: String,
}
