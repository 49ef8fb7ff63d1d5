//! Typed records shared by the extractor, the store and the ingestion cycle.

pub mod email;
pub mod outcome;
pub mod query;
