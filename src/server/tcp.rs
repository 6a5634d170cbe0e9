//! TCP transport: the stdio line protocol over client sockets.
//!
//! Each connection gets its own task and runs the same request loop as the
//! stdio transport against the shared dispatcher. Connections impose no
//! ordering on one another.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::service::McpServer;

/// Bind `host:port` and serve until the process is killed.
pub async fn serve(server: McpServer, host: &str, port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    info!(host = %host, port, "serving on TCP transport");

    let server = Arc::new(server);
    loop {
        let (socket, peer) = listener.accept().await?;
        info!(peer = %peer, "client connected");

        let server = Arc::clone(&server);
        tokio::spawn(async move {
            match handle_connection(server, socket).await {
                Ok(()) => info!(peer = %peer, "client disconnected"),
                Err(e) => warn!(peer = %peer, error = %e, "connection ended with error"),
            }
        });
    }
}

async fn handle_connection(server: Arc<McpServer>, socket: TcpStream) -> std::io::Result<()> {
    let (read_half, mut write_half) = socket.into_split();
    let mut reader = BufReader::new(read_half);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            return Ok(());
        }

        if let Some(mut response) = server.handle_line(&line).await {
            response.push('\n');
            write_half.write_all(response.as_bytes()).await?;
            write_half.flush().await?;
        }
    }
}
