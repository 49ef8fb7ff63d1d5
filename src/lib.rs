//! mailtrigger library entrypoint.
//!
//! Modules:
//! - `app`: configuration, startup, one-shot run
//! - `db`: dedup store over SQLite
//! - `extract`: field extraction from tool payloads
//! - `ingest`: the poll-extract-persist cycle
//! - `mcp`: mailbox tool capability and MCP client session
//! - `models`: typed records used across layers
//! - `util`: tracing setup

pub mod app;
pub mod db;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod mcp;
pub mod models;
pub mod util;
