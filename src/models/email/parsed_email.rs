//! Extractor output: the persisted record plus display fields.

use super::{email_details::EmailDetails, email_record::EmailRecord};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEmail {
    pub record: EmailRecord,
    pub details: EmailDetails,
}

impl fmt::Display for ParsedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.record;
        let d = &self.details;
        writeln!(f, "ID: {}", d.id)?;
        writeln!(f, "Subject: {}", r.subject)?;
        writeln!(f, "Snippet: {}", r.snippet)?;
        writeln!(f, "Date: {}", r.date)?;
        writeln!(f, "From: {} <{}>", d.from_name, r.from_email)?;
        writeln!(
            f,
            "To: {} <{}>",
            d.to_names.join(", "),
            d.to_emails.join(", ")
        )?;
        writeln!(f, "Message ID: {}", r.message_id)?;
        writeln!(f, "Thread ID: {}", d.thread_id)?;
        writeln!(f, "Labels: {}", d.labels.join(", "))?;
        writeln!(f, "Attachments: {}", d.attachment_count)?;
        writeln!(f, "Message URL: {}", r.email_url)?;
        write!(f, "Body (Plain): {}", d.body_plain)
    }
}
