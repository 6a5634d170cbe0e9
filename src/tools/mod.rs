//! Tool operations exposed to the MCP host.
//!
//! Two tools: the enriched model catalog and the chat relay. Definitions
//! carry JSON Schema input schemas; implementations return plain JSON
//! values, leaving protocol framing to [`crate::server`].

pub mod chat;
pub mod list_models;

pub use chat::{chat_with_model, CHAT_WITH_MODEL};
pub use list_models::{list_available_models, LIST_AVAILABLE_MODELS};

/// Definitions of every exposed tool, in the order they are listed.
pub fn definitions() -> Vec<serde_json::Value> {
    vec![list_models::definition(), chat::definition()]
}
