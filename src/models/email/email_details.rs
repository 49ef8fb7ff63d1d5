//! Display-only fields recovered alongside a record.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailDetails {
    pub id: String,
    pub from_name: String,
    pub to_names: Vec<String>,
    pub to_emails: Vec<String>,
    pub body_plain: String,
    pub thread_id: String,
    pub labels: Vec<String>,
    pub attachment_count: String,
}
