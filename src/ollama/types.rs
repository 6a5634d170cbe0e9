//! Wire types for the Ollama HTTP API and the shapes returned to callers.
//!
//! Raw response structs mirror the runtime's JSON; optional fields default
//! to zero or empty so a sparse response never fails deserialization.

use serde::{Deserialize, Serialize};

// ─── Model Catalog (`GET /api/tags`) ─────────────────────────────────────────

/// Raw `/api/tags` response shape.
#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<TagModel>,
}

/// Raw model entry from the tags API.
#[derive(Debug, Deserialize)]
pub struct TagModel {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub modified_at: String,
    #[serde(default)]
    pub digest: String,
    #[serde(default = "empty_details")]
    pub details: serde_json::Value,
}

fn empty_details() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// An installed model as reported by the runtime.
///
/// Produced fresh on every listing call; never persisted or cached.
#[derive(Debug, Clone, Serialize)]
pub struct ModelDescriptor {
    pub name: String,
    pub size: u64,
    pub modified_at: String,
    pub digest: String,
    pub details: serde_json::Value,
}

impl From<TagModel> for ModelDescriptor {
    fn from(raw: TagModel) -> Self {
        Self {
            name: raw.name,
            size: raw.size,
            modified_at: raw.modified_at,
            digest: raw.digest,
            details: raw.details,
        }
    }
}

// ─── Chat (`POST /api/chat`) ─────────────────────────────────────────────────

/// Message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Request body for `POST /api/chat`. Always non-streaming.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

/// Raw `/api/chat` response shape.
///
/// Timing and token counters are passed through verbatim; the runtime may
/// omit any of them.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub message: ResponseMessage,
    #[serde(default)]
    pub total_duration: u64,
    #[serde(default)]
    pub load_duration: u64,
    #[serde(default)]
    pub prompt_eval_count: u64,
    #[serde(default)]
    pub eval_count: u64,
}

/// Generated message within a chat response.
#[derive(Debug, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: String,
}

// ─── Chat Outcome ────────────────────────────────────────────────────────────

/// What a chat call hands back to the tool layer. Chat never raises.
#[derive(Debug, Clone)]
pub enum ChatOutcome {
    /// Bare response text (verbose off).
    Text(String),
    /// Structured success record with runtime counters (verbose on).
    Verbose(ChatStats),
    /// Structured failure record for any network-level failure.
    Failure(ChatFailure),
}

impl ChatOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ChatOutcome::Failure(_))
    }

    /// Convert into the JSON value handed to the MCP host. Bare text stays
    /// a bare string, with no wrapping structure.
    pub fn into_value(self) -> serde_json::Value {
        match self {
            ChatOutcome::Text(text) => serde_json::Value::String(text),
            ChatOutcome::Verbose(stats) => serde_json::to_value(stats).unwrap_or_default(),
            ChatOutcome::Failure(failure) => serde_json::to_value(failure).unwrap_or_default(),
        }
    }
}

/// Successful chat exchange with the runtime's performance counters.
#[derive(Debug, Clone, Serialize)]
pub struct ChatStats {
    pub success: bool,
    pub model: String,
    pub response: String,
    pub total_duration: u64,
    pub load_duration: u64,
    pub prompt_eval_count: u64,
    pub eval_count: u64,
}

/// Failed chat exchange: what went wrong, against which endpoint, and how
/// the caller might fix it.
#[derive(Debug, Clone, Serialize)]
pub struct ChatFailure {
    pub success: bool,
    pub error: String,
    pub model: String,
    pub ollama_url: String,
    pub hint: String,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
