//! Remote mailbox tool reached over MCP.
//!
//! `MailboxTool` is the capability the ingestion cycle depends on.
//! `McpMailbox` implements it with an rmcp client session, either connected
//! straight to the hosted server's SSE endpoint or spawned through a child
//! process (for example `npx mcp-remote <server-url>`) that bridges stdio.

use crate::{error::IngestError, models::query::unread_query::UnreadQuery};
use async_trait::async_trait;
use rmcp::model::CallToolRequestParam;
use rmcp::service::RunningService;
use rmcp::transport::child_process::TokioChildProcess;
use rmcp::transport::{IntoTransport, SseTransport};
use rmcp::{RoleClient, ServiceExt};
use tracing::{debug, info};

/// Answers "find unread email" queries with zero or more text payloads.
#[async_trait]
pub trait MailboxTool: Send + Sync {
    async fn find_email(&self, query: &UnreadQuery) -> Result<Vec<String>, IngestError>;
}

/// Connected MCP session exposing the mailbox tool.
pub struct McpMailbox {
    service: RunningService<RoleClient, ()>,
    tool: String,
}

impl McpMailbox {
    /// Open an SSE session against `url` and complete the MCP handshake.
    pub async fn connect_sse(url: &str, tool: &str) -> Result<Self, IngestError> {
        let transport = SseTransport::start(url)
            .await
            .map_err(|e| IngestError::RemoteQueryFailed(format!("sse {url}: {e}")))?;
        let mailbox = Self::from_transport(transport, tool).await?;
        info!("connected to mcp server at {}", url);
        Ok(mailbox)
    }

    /// Spawn `command` and complete the MCP handshake over its stdio.
    pub async fn connect(command: &[String], tool: &str) -> Result<Self, IngestError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| IngestError::Config("empty MCP command".into()))?;

        let transport = TokioChildProcess::new(tokio::process::Command::new(program).args(args))
            .map_err(|e| IngestError::RemoteQueryFailed(format!("spawn {program}: {e}")))?;

        let mailbox = Self::from_transport(transport, tool).await?;
        info!("connected to mcp server via {}", program);
        Ok(mailbox)
    }

    /// Complete the MCP handshake over an already established transport.
    pub async fn from_transport<T, E, A>(transport: T, tool: &str) -> Result<Self, IngestError>
    where
        T: IntoTransport<RoleClient, E, A>,
        E: std::error::Error + From<std::io::Error> + Send + Sync + 'static,
    {
        let service = ()
            .serve(transport)
            .await
            .map_err(|e| IngestError::RemoteQueryFailed(format!("connect: {e}")))?;
        Ok(Self {
            service,
            tool: tool.to_string(),
        })
    }

    /// Close the session and terminate the transport.
    pub async fn disconnect(self) {
        let _ = self.service.cancel().await;
        debug!("mcp session closed");
    }
}

#[async_trait]
impl MailboxTool for McpMailbox {
    async fn find_email(&self, query: &UnreadQuery) -> Result<Vec<String>, IngestError> {
        let result = self
            .service
            .call_tool(CallToolRequestParam {
                name: self.tool.clone().into(),
                arguments: Some(query.to_arguments()),
            })
            .await
            .map_err(|e| IngestError::RemoteQueryFailed(e.to_string()))?;

        if result.is_error == Some(true) {
            let msg = result
                .content
                .first()
                .and_then(|c| c.as_text())
                .map(|t| t.text.clone())
                .unwrap_or_else(|| "unknown tool error".to_string());
            return Err(IngestError::RemoteQueryFailed(msg));
        }

        let texts: Vec<String> = result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect();
        if texts.is_empty() && !result.content.is_empty() {
            debug!(
                "{} replied with {} non-text item(s), treating as no data",
                self.tool,
                result.content.len()
            );
        }
        Ok(texts)
    }
}
