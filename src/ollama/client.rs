//! HTTP client for the resolved Ollama endpoint.
//!
//! Two operations: list the model catalog and relay a chat exchange. Both
//! are single blocking requests with fixed timeouts; there are no retries,
//! no pooling beyond what reqwest does internally, and no shared state
//! besides the write-once base URL.

use std::time::Duration;

use reqwest::Client as HttpClient;

use super::errors::OllamaError;
use super::types::{
    ChatFailure, ChatMessage, ChatOutcome, ChatRequest, ChatResponse, ChatStats, ModelDescriptor,
    Role, TagsResponse,
};

// ─── Constants ───────────────────────────────────────────────────────────────

/// TCP connection timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request timeout for catalog listing and health checks.
const LIST_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request timeout for chat.
///
/// Generation against a cold model can take minutes: the runtime has to
/// load weights before the first token. A short timeout here surfaces as a
/// spurious "Ollama unreachable" failure mid-generation.
const CHAT_TIMEOUT: Duration = Duration::from_secs(300);

/// Fixed remediation hint attached to every chat failure record.
const FAILURE_HINT: &str =
    "Ensure Ollama is running and accessible. You can set OLLAMA_HOST environment variable.";

// ─── OllamaClient ────────────────────────────────────────────────────────────

/// Client for the Ollama HTTP API.
///
/// Holds the base URL resolved at startup and two pre-built HTTP clients:
/// a short-timeout one for listing and a long-timeout one for chat.
pub struct OllamaClient {
    /// HTTP client for listing and health checks (5s timeout).
    http: HttpClient,
    /// HTTP client for chat requests (300s timeout).
    http_chat: HttpClient,
    /// The resolved runtime base address. Write-once, read-many.
    base_url: String,
}

impl OllamaClient {
    /// Create a client against a resolved base URL.
    ///
    /// Does NOT check connectivity. That happened during endpoint
    /// resolution, and callers of the tool surface get degraded values
    /// rather than errors anyway.
    pub fn new(base_url: String) -> Result<Self, OllamaError> {
        let http = HttpClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(LIST_TIMEOUT)
            .build()
            .map_err(|e| OllamaError::ClientBuild {
                reason: e.to_string(),
            })?;

        let http_chat = HttpClient::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(CHAT_TIMEOUT)
            .build()
            .map_err(|e| OllamaError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            http_chat,
            base_url,
        })
    }

    /// The resolved runtime base address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ─── Health Check ────────────────────────────────────────────────────

    /// Check if the runtime is reachable.
    ///
    /// Unlike [`list_models`](Self::list_models), this tells "unreachable"
    /// apart from "no models installed".
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.http.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    // ─── Model Listing ───────────────────────────────────────────────────

    /// List the models installed in the runtime.
    ///
    /// Any failure yields an empty list. Callers cannot tell "no models"
    /// from "runtime unreachable" here; the warn-level log entry is the
    /// only visible difference.
    pub async fn list_models(&self) -> Vec<ModelDescriptor> {
        match self.try_list_models().await {
            Ok(models) => {
                tracing::info!(count = models.len(), "found Ollama models");
                models
            }
            Err(e) => {
                tracing::error!(url = %self.base_url, error = %e, "could not list Ollama models");
                Vec::new()
            }
        }
    }

    async fn try_list_models(&self) -> Result<Vec<ModelDescriptor>, OllamaError> {
        let url = format!("{}/api/tags", self.base_url);
        tracing::debug!(url = %url, "fetching model catalog");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| OllamaError::from_request(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let tags: TagsResponse =
            response
                .json()
                .await
                .map_err(|e| OllamaError::MalformedResponse {
                    endpoint: url.clone(),
                    reason: e.to_string(),
                })?;

        Ok(tags.models.into_iter().map(ModelDescriptor::from).collect())
    }

    // ─── Chat ────────────────────────────────────────────────────────────

    /// Relay a chat exchange to the runtime.
    ///
    /// A non-empty system instruction is prepended to the user message.
    /// Success returns bare text, or the full stats record when `verbose`.
    /// Any failure returns a structured failure record, never an error.
    pub async fn chat(
        &self,
        model: &str,
        prompt: &str,
        system_prompt: &str,
        verbose: bool,
    ) -> ChatOutcome {
        tracing::info!(model = %model, prompt_len = prompt.len(), "chat request");

        match self.try_chat(model, prompt, system_prompt).await {
            Ok(resp) => {
                let content = resp.message.content;
                tracing::info!(response_len = content.len(), "chat successful");

                if verbose {
                    ChatOutcome::Verbose(ChatStats {
                        success: true,
                        model: model.to_string(),
                        response: content,
                        total_duration: resp.total_duration,
                        load_duration: resp.load_duration,
                        prompt_eval_count: resp.prompt_eval_count,
                        eval_count: resp.eval_count,
                    })
                } else {
                    ChatOutcome::Text(content)
                }
            }
            Err(e) => {
                tracing::error!(model = %model, error = %e, "chat failed");
                ChatOutcome::Failure(ChatFailure {
                    success: false,
                    error: format!("Failed to communicate with Ollama: {e}"),
                    model: model.to_string(),
                    ollama_url: self.base_url.clone(),
                    hint: FAILURE_HINT.to_string(),
                })
            }
        }
    }

    async fn try_chat(
        &self,
        model: &str,
        prompt: &str,
        system_prompt: &str,
    ) -> Result<ChatResponse, OllamaError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            model: model.to_string(),
            messages: build_messages(prompt, system_prompt),
            stream: false,
        };

        let response = self
            .http_chat
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| OllamaError::from_request(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(OllamaError::HttpStatus {
                status: status.as_u16(),
                body: body_text,
            });
        }

        response
            .json()
            .await
            .map_err(|e| OllamaError::MalformedResponse {
                endpoint: url,
                reason: e.to_string(),
            })
    }
}

/// Build the outgoing message sequence. The system instruction, when
/// present, comes before the user message.
fn build_messages(prompt: &str, system_prompt: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(2);
    if !system_prompt.is_empty() {
        messages.push(ChatMessage {
            role: Role::System,
            content: system_prompt.to_string(),
        });
    }
    messages.push(ChatMessage {
        role: Role::User,
        content: prompt.to_string(),
    });
    messages
}

// ─── Tests ───────────────────────────────────────────────────────────────────
