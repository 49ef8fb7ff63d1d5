//! Application setup and runtime.

use crate::{
  db::EmailStore, error::IngestError, ingest, mcp::McpMailbox,
  models::outcome::cycle_outcome::CycleOutcome,
};
use std::time::Duration;
use tracing::info;

/// How to reach the MCP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum McpEndpoint {
  /// Hosted server's SSE endpoint.
  Sse(String),
  /// Local bridge process speaking MCP over stdio.
  Command(Vec<String>),
}

/// Runtime configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub database_url: String,
  pub endpoint: McpEndpoint,
  pub tool: String,
  pub query_timeout: Duration,
}

impl Config {
  /// Load configuration from `MAILTRIGGER_*` variables.
  pub fn from_env() -> Result<Self, IngestError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build configuration from any key lookup, falling back to defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, IngestError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let database_url =
      lookup("MAILTRIGGER_DATABASE").unwrap_or_else(|| "sqlite://emails.db".to_string());

    // A URL wins over a bridge command when both are set.
    let url = lookup("MAILTRIGGER_MCP_URL")
      .map(|u| u.trim().to_string())
      .filter(|u| !u.is_empty());
    let endpoint = match url {
      Some(url) => McpEndpoint::Sse(url),
      None => {
        let command: Vec<String> = lookup("MAILTRIGGER_MCP_COMMAND")
          .unwrap_or_default()
          .split_whitespace()
          .map(str::to_string)
          .collect();
        if command.is_empty() {
          return Err(IngestError::Config(
            "set MAILTRIGGER_MCP_URL or MAILTRIGGER_MCP_COMMAND to reach the MCP server".into(),
          ));
        }
        McpEndpoint::Command(command)
      }
    };

    let tool = lookup("MAILTRIGGER_TOOL").unwrap_or_else(|| "gmail_find_email".to_string());

    let query_timeout = match lookup("MAILTRIGGER_QUERY_TIMEOUT_SECS") {
      None => Duration::from_secs(30),
      Some(raw) => match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
          return Err(IngestError::Config(format!(
            "MAILTRIGGER_QUERY_TIMEOUT_SECS must be a positive integer, got {raw:?}"
          )))
        }
      },
    };

    Ok(Config {
      database_url,
      endpoint,
      tool,
      query_timeout,
    })
  }
}

/// Run exactly one ingestion cycle against the configured server and store.
pub async fn run() -> Result<CycleOutcome, Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();
  info!("initializing email trigger");

  let config = Config::from_env()?;
  let store = EmailStore::open(&config.database_url).await?;
  info!("email store: {}", config.database_url);

  let mailbox = match &config.endpoint {
    McpEndpoint::Sse(url) => McpMailbox::connect_sse(url, &config.tool).await?,
    McpEndpoint::Command(command) => McpMailbox::connect(command, &config.tool).await?,
  };
  let outcome = ingest::run_cycle(&mailbox, &store, config.query_timeout).await;
  mailbox.disconnect().await;

  Ok(outcome)
}
