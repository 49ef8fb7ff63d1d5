//! Terminal result of one ingestion cycle.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The tool returned no unread email.
    NoData,
    /// The email was stored for the first time.
    Ingested(String),
    /// The email was already stored; nothing was written.
    AlreadyPresent(String),
    /// The cycle stopped on an error.
    Failed(String),
}

impl CycleOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, CycleOutcome::Failed(_))
    }
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleOutcome::NoData => write!(f, "no unread emails found"),
            CycleOutcome::Ingested(id) => write!(f, "email {id} saved"),
            CycleOutcome::AlreadyPresent(id) => {
                write!(f, "email {id} already exists, skipped")
            }
            CycleOutcome::Failed(reason) => write!(f, "cycle failed: {reason}"),
        }
    }
}
