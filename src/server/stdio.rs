//! Stdio transport: newline-delimited JSON-RPC over the process stdio.
//!
//! Stdout carries only protocol output; everything else in this crate logs
//! to stderr.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use super::service::McpServer;

/// Serve requests over stdin/stdout until stdin closes.
pub async fn serve(server: McpServer) -> std::io::Result<()> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut line = String::new();

    info!("serving on stdio transport");

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            info!("stdin closed, shutting down");
            return Ok(());
        }

        if let Some(mut response) = server.handle_line(&line).await {
            response.push('\n');
            stdout.write_all(response.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
}
