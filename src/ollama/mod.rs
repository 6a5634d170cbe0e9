//! Runtime client for the Ollama HTTP API.
//!
//! This module handles all communication with the resolved endpoint:
//! - Model catalog listing (`GET /api/tags`)
//! - Non-streaming chat relay (`POST /api/chat`)
//! - Heuristic usage recommendations from model names
//!
//! Network failures never propagate to callers as errors: listing degrades
//! to an empty catalog, chat degrades to a structured failure record.

pub mod client;
pub mod errors;
pub mod recommend;
pub mod types;

// Re-exports for convenience
pub use client::OllamaClient;
pub use errors::OllamaError;
pub use types::{ChatFailure, ChatOutcome, ChatStats, ModelDescriptor};
