//! Field extraction from the mailbox tool's text payload.
//!
//! The payload is scanned for literal `"key": "value"` and `"key": [..]`
//! fragments. Scanning is first-match and does not understand escapes: a
//! value containing an unescaped `"` is cut short at that quote. Missing or
//! truncated fields come back empty and never abort the other lookups.

use crate::models::email::{
    email_details::EmailDetails, email_record::EmailRecord, parsed_email::ParsedEmail,
};

/// Value of the first `"<field>": "..."` fragment, or `""` when absent.
pub fn extract_scalar(text: &str, field: &str) -> String {
    let pattern = format!("\"{field}\": \"");
    let Some(pos) = text.find(&pattern) else {
        return String::new();
    };
    let rest = &text[pos + pattern.len()..];
    match rest.find('"') {
        Some(end) => rest[..end].to_string(),
        None => String::new(),
    }
}

/// Items of the first `"<field>": [...]` fragment.
///
/// Items are split on `,` and only surrounding quotes are stripped, so
/// `["a", "b"]` yields `a` and ` "b`. An empty or unterminated list yields
/// nothing.
pub fn extract_list(text: &str, field: &str) -> Vec<String> {
    let pattern = format!("\"{field}\": [");
    let Some(pos) = text.find(&pattern) else {
        return Vec::new();
    };
    let rest = &text[pos + pattern.len()..];
    let Some(end) = rest.find(']') else {
        return Vec::new();
    };
    let span = &rest[..end];
    if span.is_empty() {
        return Vec::new();
    }
    span.split(',')
        .map(|item| item.trim_matches('"').to_string())
        .collect()
}

/// Recover the persisted record and display fields from one tool response.
pub fn parse_email(text: &str) -> ParsedEmail {
    let record = EmailRecord {
        message_id: extract_scalar(text, "message_id"),
        subject: extract_scalar(text, "subject"),
        snippet: extract_scalar(text, "raw__snippet"),
        date: extract_scalar(text, "date"),
        from_email: extract_scalar(text, "from__email"),
        attachment_url: String::new(),
        email_url: extract_scalar(text, "message_url"),
    };
    let details = EmailDetails {
        id: extract_scalar(text, "id"),
        from_name: extract_scalar(text, "from__name"),
        to_names: extract_list(text, "to__names"),
        to_emails: extract_list(text, "to__emails"),
        body_plain: extract_scalar(text, "body_plain"),
        thread_id: extract_scalar(text, "thread_id"),
        labels: extract_list(text, "labels"),
        attachment_count: extract_scalar(text, "attachment_count"),
    };
    ParsedEmail { record, details }
}
