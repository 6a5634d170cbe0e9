//! The `chat_with_model` tool.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::ollama::OllamaClient;

pub const CHAT_WITH_MODEL: &str = "chat_with_model";

/// MCP tool definition.
pub fn definition() -> Value {
    json!({
        "name": CHAT_WITH_MODEL,
        "description": "Send a chat message to a specific Ollama model and return the response.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "model_name": {
                    "type": "string",
                    "description": "Name of the Ollama model to use",
                },
                "prompt": {
                    "type": "string",
                    "description": "The user prompt/message to send",
                },
                "system_prompt": {
                    "type": "string",
                    "description": "Optional system prompt to set context",
                    "default": "",
                },
                "verbose": {
                    "type": "boolean",
                    "description": "If true, return the full record with runtime counters instead of bare response text",
                    "default": false,
                },
            },
            "required": ["model_name", "prompt"],
        },
    })
}

/// Arguments accepted by the chat tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatArgs {
    pub model_name: String,
    pub prompt: String,
    #[serde(default)]
    pub system_prompt: String,
    #[serde(default)]
    pub verbose: bool,
}

/// Relay a chat exchange to the runtime.
///
/// Returns the tool result value and whether it describes a failure.
/// `Err` is reserved for malformed arguments; runtime failures come back
/// as a structured record inside `Ok`.
pub async fn chat_with_model(
    client: &OllamaClient,
    arguments: Value,
) -> Result<(Value, bool), String> {
    let args: ChatArgs = serde_json::from_value(arguments)
        .map_err(|e| format!("invalid arguments for '{CHAT_WITH_MODEL}': {e}"))?;

    let outcome = client
        .chat(&args.model_name, &args.prompt, &args.system_prompt, args.verbose)
        .await;
    let is_error = outcome.is_failure();
    Ok((outcome.into_value(), is_error))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args: ChatArgs = serde_json::from_value(json!({
            "model_name": "llama3:latest",
            "prompt": "hello",
        }))
        .unwrap();
        assert_eq!(args.system_prompt, "");
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_missing_prompt_rejected() {
        let result: Result<ChatArgs, _> =
            serde_json::from_value(json!({ "model_name": "llama3:latest" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_definition_requires_model_and_prompt() {
        let def = definition();
        assert_eq!(def["name"], CHAT_WITH_MODEL);
        assert_eq!(
            def["inputSchema"]["required"],
            json!(["model_name", "prompt"])
        );
    }

    #[tokio::test]
    async fn test_unreachable_runtime_is_a_failure_record_not_an_error() {
        let client = OllamaClient::new("http://127.0.0.1:1".to_string()).unwrap();
        let (value, is_error) = chat_with_model(
            &client,
            json!({ "model_name": "llama3:latest", "prompt": "hi" }),
        )
        .await
        .unwrap();

        assert!(is_error);
        assert_eq!(value["success"], false);
        assert!(!value["error"].as_str().unwrap().is_empty());
        assert!(!value["hint"].as_str().unwrap().is_empty());
    }
}
