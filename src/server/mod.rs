//! MCP server surface: JSON-RPC 2.0 over stdio or TCP.
//!
//! This module handles:
//! - JSON-RPC 2.0 message types and standard error codes
//! - Request dispatch (`initialize`, `ping`, `tools/list`, `tools/call`)
//! - The stdio transport (one JSON object per line over stdin/stdout)
//! - The TCP transport (the same line protocol over client sockets)
//!
//! Tool semantics live in [`crate::tools`]; this layer only frames and
//! routes.

pub mod service;
pub mod stdio;
pub mod tcp;
pub mod types;

// Re-exports for convenience
pub use service::McpServer;
