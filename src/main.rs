//! CLI binary entry point.
//!
//! Resolves the Ollama endpoint once, then runs the MCP server over stdio
//! (the default) or a TCP host/port pair. `--check` is a connectivity
//! diagnostic that prints to stdout and exits.

use clap::Parser;

use workshop_assistant::endpoint;
use workshop_assistant::ollama::OllamaClient;
use workshop_assistant::server::{self, McpServer};

/// Workshop Assistant MCP server.
#[derive(Parser, Debug)]
#[command(
    name = "workshop-assistant",
    about = "MCP tool server for a local Ollama runtime",
    version
)]
struct Cli {
    /// Run the server on a TCP port instead of stdio.
    #[arg(long)]
    port: Option<u16>,

    /// Host to bind to when using the TCP transport.
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Check Ollama connectivity, print the installed models, and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    workshop_assistant::init_tracing();

    let base_url = endpoint::resolve_base_url().await;
    let client = OllamaClient::new(base_url.clone())?;

    if cli.check {
        let ok = run_check(&client).await;
        std::process::exit(if ok { 0 } else { 1 });
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        pid = std::process::id(),
        ollama_url = %base_url,
        "starting Workshop Assistant MCP server"
    );

    let mcp = McpServer::new(client);
    match cli.port {
        Some(port) => server::tcp::serve(mcp, &cli.host, port).await?,
        None => server::stdio::serve(mcp).await?,
    }

    Ok(())
}

/// Connectivity check mode: report reachability and the first few models.
async fn run_check(client: &OllamaClient) -> bool {
    if !client.health_check().await {
        println!("ERROR: Cannot connect to Ollama at {}", client.base_url());
        println!("Please ensure Ollama is running (ollama serve)");
        return false;
    }

    let models = client.list_models().await;
    println!("SUCCESS: Ollama is running at {}", client.base_url());
    println!("Found {} models installed", models.len());

    if !models.is_empty() {
        println!("\nAvailable models:");
        for model in models.iter().take(5) {
            println!("  - {}", model.name);
        }
        if models.len() > 5 {
            println!("  ... and {} more", models.len() - 5);
        }
    }
    true
}
