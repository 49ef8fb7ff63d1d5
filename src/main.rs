#[tokio::main]
async fn main() {
  // Minimal CLI: support --version/-V
  let mut args = std::env::args().skip(1);
  if let Some(arg) = args.next() {
    if arg == "--version" || arg == "-V" {
      println!("mailtrigger {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    if arg == "--help" || arg == "-h" {
      eprintln!("Usage: mailtrigger [--version]");
      eprintln!("Runs one ingestion cycle. Configure with MAILTRIGGER_MCP_URL or");
      eprintln!("MAILTRIGGER_MCP_COMMAND, MAILTRIGGER_DATABASE, MAILTRIGGER_TOOL and");
      eprintln!("MAILTRIGGER_QUERY_TIMEOUT_SECS.");
      return;
    }
  }

  match mailtrigger::app::run().await {
    Ok(outcome) => {
      println!("{outcome}");
      if outcome.is_failure() {
        std::process::exit(1);
      }
    }
    Err(e) => {
      eprintln!("error: {e}");
      std::process::exit(1);
    }
  }
}
