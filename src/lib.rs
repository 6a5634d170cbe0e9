//! Workshop Assistant — an MCP tool server for a local Ollama runtime.
//!
//! Exposes two tools to an MCP host:
//! - `list_available_models`: the installed model catalog enriched with
//!   usage recommendations and host specs
//! - `chat_with_model`: a non-streaming chat relay with optional runtime
//!   counters
//!
//! The Ollama endpoint is resolved once at startup (environment override,
//! localhost probe, WSL host-gateway fallback) and passed explicitly into
//! the client. Nothing is cached or re-resolved after that.

pub mod endpoint;
pub mod ollama;
pub mod server;
pub mod system;
pub mod tools;

/// Initialize the tracing subscriber.
///
/// Logs go to stderr: on the stdio transport stdout carries the JSON-RPC
/// stream and must stay clean. MCP hosts capture stderr for diagnostics.
pub fn init_tracing() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("workshop_assistant=info,warn"));

    fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .init();
}
