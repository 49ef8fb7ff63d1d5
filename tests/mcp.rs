use mailtrigger::{
    db::EmailStore,
    error::IngestError,
    ingest::run_cycle,
    mcp::{MailboxTool, McpMailbox},
    models::{outcome::cycle_outcome::CycleOutcome, query::unread_query::UnreadQuery},
};
use rmcp::{
    model::{CallToolRequestParam, CallToolResult, Content},
    service::RequestContext,
    RoleServer, ServerHandler,
};
use std::{
    future::Future,
    sync::{Arc, Mutex},
    time::Duration,
};

const TIMEOUT: Duration = Duration::from_secs(5);

/// In-process MCP server whose tool always answers with the same result.
#[derive(Clone)]
struct ScriptedServer {
    reply: CallToolResult,
    requests: Arc<Mutex<Vec<CallToolRequestParam>>>,
}

impl ServerHandler for ScriptedServer {
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, rmcp::Error>> + Send + '_ {
        self.requests.lock().unwrap().push(request);
        std::future::ready(Ok(self.reply.clone()))
    }
}

async fn connect_scripted(
    reply: CallToolResult,
) -> (McpMailbox, Arc<Mutex<Vec<CallToolRequestParam>>>) {
    let (client_io, server_io) = tokio::io::duplex(64 * 1024);
    let server = ScriptedServer {
        reply,
        requests: Arc::default(),
    };
    let requests = server.requests.clone();
    tokio::spawn(async move {
        if let Ok(running) = rmcp::serve_server(server, server_io).await {
            let _ = running.waiting().await;
        }
    });
    let mailbox = McpMailbox::from_transport(client_io, "gmail_find_email")
        .await
        .expect("mcp handshake");
    (mailbox, requests)
}

async fn memory_store() -> EmailStore {
    EmailStore::open("sqlite://:memory:")
        .await
        .expect("open memory sqlite")
}

#[tokio::test]
async fn error_result_fails_cycle_with_tool_message() {
    let store = memory_store().await;
    let (mailbox, _) =
        connect_scripted(CallToolResult::error(vec![Content::text("gmail quota exceeded")])).await;

    match run_cycle(&mailbox, &store, TIMEOUT).await {
        CycleOutcome::Failed(reason) => assert!(reason.contains("gmail quota exceeded")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(store.count().await.unwrap(), 0);
    mailbox.disconnect().await;
}

#[tokio::test]
async fn error_result_without_text_uses_fallback_message() {
    let (mailbox, _) = connect_scripted(CallToolResult::error(vec![])).await;

    match mailbox.find_email(&UnreadQuery::default()).await {
        Err(IngestError::RemoteQueryFailed(msg)) => assert_eq!(msg, "unknown tool error"),
        other => panic!("expected remote failure, got {other:?}"),
    }
    mailbox.disconnect().await;
}

#[tokio::test]
async fn text_results_ingest_first_payload_only() {
    let store = memory_store().await;
    let (mailbox, requests) = connect_scripted(CallToolResult::success(vec![
        Content::text(r#"{"message_id": "first", "subject": "One", "from__email": "a@b.com"}"#),
        Content::text(r#"{"message_id": "second", "subject": "Two"}"#),
    ]))
    .await;

    assert_eq!(
        run_cycle(&mailbox, &store, TIMEOUT).await,
        CycleOutcome::Ingested("first".into())
    );
    assert!(!store.exists("second").await.unwrap());

    let requests = requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].name, "gmail_find_email");
    assert_eq!(
        requests[0].arguments,
        Some(UnreadQuery::default().to_arguments())
    );
    mailbox.disconnect().await;
}

#[tokio::test]
async fn non_text_items_are_skipped() {
    let (mailbox, _) = connect_scripted(CallToolResult::success(vec![
        Content::image("aGVsbG8=", "image/png"),
        Content::text(r#""message_id": "only-text""#),
    ]))
    .await;

    let texts = mailbox.find_email(&UnreadQuery::default()).await.unwrap();
    assert_eq!(texts, vec![r#""message_id": "only-text""#.to_string()]);
    mailbox.disconnect().await;
}

#[tokio::test]
async fn image_only_reply_is_no_data() {
    let store = memory_store().await;
    let (mailbox, _) =
        connect_scripted(CallToolResult::success(vec![Content::image("aGVsbG8=", "image/png")]))
            .await;

    assert_eq!(
        run_cycle(&mailbox, &store, TIMEOUT).await,
        CycleOutcome::NoData
    );
    assert_eq!(store.count().await.unwrap(), 0);
    mailbox.disconnect().await;
}
