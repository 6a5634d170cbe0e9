//! MCP request dispatch.
//!
//! One dispatcher shared by both transports: a line of input comes in, a
//! line of output (or nothing, for notifications) goes out. Tool semantics
//! live in [`crate::tools`].

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::types::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::ollama::OllamaClient;
use crate::tools;

/// MCP protocol revision this server speaks.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name reported to the host.
const SERVER_NAME: &str = "Workshop Assistant";

/// Tool dispatcher for a single resolved runtime endpoint.
pub struct McpServer {
    client: OllamaClient,
}

impl McpServer {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }

    /// Handle one line of input. Returns the serialized response line, or
    /// `None` for notifications and blank input.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let raw: Value = match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "discarding unparsable input line");
                return serialize(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    "parse error",
                ));
            }
        };

        let request: JsonRpcRequest = match serde_json::from_value(raw.clone()) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "input is not a valid JSON-RPC request");
                let id = raw.get("id").cloned().unwrap_or(Value::Null);
                return serialize(JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_REQUEST,
                    "invalid request",
                ));
            }
        };

        let response = self.handle_request(request).await?;
        serialize(response)
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "dispatching request");

        // Notifications get no response, whatever their method.
        if request.method.starts_with("notifications/") {
            return None;
        }
        let JsonRpcRequest {
            id, method, params, ..
        } = request;
        let id = id?;

        let response = match method.as_str() {
            "initialize" => JsonRpcResponse::success(id, initialize_result()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, json!({ "tools": tools::definitions() })),
            "tools/call" => self.handle_tool_call(id, params).await,
            other => {
                warn!(method = %other, "unknown method");
                JsonRpcResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("method not found: {other}"),
                )
            }
        };
        Some(response)
    }

    async fn handle_tool_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params = match params {
            Some(params) => params,
            None => {
                return JsonRpcResponse::error(id, error_codes::INVALID_PARAMS, "missing params")
            }
        };
        let name = match params.get("name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => {
                return JsonRpcResponse::error(id, error_codes::INVALID_PARAMS, "missing tool name")
            }
        };
        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        info!(tool = %name, "tool call");

        let (value, is_error) = match name.as_str() {
            tools::LIST_AVAILABLE_MODELS => {
                (tools::list_available_models(&self.client).await, false)
            }
            tools::CHAT_WITH_MODEL => {
                match tools::chat_with_model(&self.client, arguments).await {
                    Ok(outcome) => outcome,
                    Err(reason) => {
                        return JsonRpcResponse::error(id, error_codes::INVALID_PARAMS, reason)
                    }
                }
            }
            other => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("unknown tool: '{other}'"),
                )
            }
        };

        JsonRpcResponse::success(id, tool_result(value, is_error))
    }
}

/// The `initialize` response payload.
fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

/// Wrap a tool's return value as MCP text content.
///
/// A bare string stays bare text; structured records are JSON-encoded.
fn tool_result(value: Value, is_error: bool) -> Value {
    let text = match value {
        Value::String(text) => text,
        other => other.to_string(),
    };
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error,
    })
}

/// Serialize a response to its output line.
fn serialize(response: JsonRpcResponse) -> Option<String> {
    match serde_json::to_string(&response) {
        Ok(line) => Some(line),
        Err(e) => {
            warn!(error = %e, "failed to serialize response");
            None
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Dispatcher against a refused port: protocol paths are exercised
    /// offline, and any tool that does reach for the network fails fast.
    fn test_server() -> McpServer {
        McpServer::new(OllamaClient::new("http://127.0.0.1:1".to_string()).unwrap())
    }

    async fn roundtrip(server: &McpServer, line: &str) -> Value {
        let response = server.handle_line(line).await.expect("expected a response");
        serde_json::from_str(&response).unwrap()
    }

    #[tokio::test]
    async fn test_initialize_reports_server_info() {
        let server = test_server();
        let resp = roundtrip(
            &server,
            r#"{"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}"#,
        )
        .await;

        assert_eq!(resp["id"], 1);
        assert_eq!(resp["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(resp["result"]["serverInfo"]["name"], SERVER_NAME);
        assert!(resp["result"]["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_tools_list_names_both_tools() {
        let server = test_server();
        let resp = roundtrip(&server, r#"{"jsonrpc": "2.0", "id": 2, "method": "tools/list"}"#)
            .await;

        let names: Vec<&str> = resp["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["list_available_models", "chat_with_model"]);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = test_server();
        let resp = roundtrip(&server, r#"{"jsonrpc": "2.0", "id": 3, "method": "resources/list"}"#)
            .await;
        assert_eq!(resp["error"]["code"], error_codes::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unparsable_line_yields_parse_error() {
        let server = test_server();
        let resp = roundtrip(&server, "{not json").await;
        assert_eq!(resp["error"]["code"], error_codes::PARSE_ERROR);
        assert_eq!(resp["id"], Value::Null);
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let server = test_server();
        let line = r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#;
        assert!(server.handle_line(line).await.is_none());
    }

    #[tokio::test]
    async fn test_blank_line_gets_no_response() {
        let server = test_server();
        assert!(server.handle_line("   \n").await.is_none());
    }

    #[tokio::test]
    async fn test_tool_call_unknown_tool() {
        let server = test_server();
        let line = r#"{"jsonrpc": "2.0", "id": 4, "method": "tools/call",
                       "params": {"name": "delete_everything", "arguments": {}}}"#;
        let resp = roundtrip(&server, line).await;
        assert_eq!(resp["error"]["code"], error_codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tool_call_missing_params() {
        let server = test_server();
        let resp = roundtrip(&server, r#"{"jsonrpc": "2.0", "id": 5, "method": "tools/call"}"#)
            .await;
        assert_eq!(resp["error"]["code"], error_codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_chat_call_with_bad_arguments() {
        let server = test_server();
        // prompt is required; its absence is an arguments error, not a
        // tool failure record.
        let line = r#"{"jsonrpc": "2.0", "id": 6, "method": "tools/call",
                       "params": {"name": "chat_with_model", "arguments": {"model_name": "x"}}}"#;
        let resp = roundtrip(&server, line).await;
        assert_eq!(resp["error"]["code"], error_codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_list_tool_against_unreachable_runtime() {
        let server = test_server();
        let line = r#"{"jsonrpc": "2.0", "id": 7, "method": "tools/call",
                       "params": {"name": "list_available_models", "arguments": {}}}"#;
        let resp = roundtrip(&server, line).await;

        // Unreachable runtime degrades to an empty catalog, not an error.
        assert!(resp["error"].is_null());
        assert_eq!(resp["result"]["isError"], false);
        let text = resp["result"]["content"][0]["text"].as_str().unwrap();
        let payload: Value = serde_json::from_str(text).unwrap();
        assert_eq!(payload["total_models"], 0);
        assert_eq!(payload["models"], json!([]));
        assert!(payload["system_specs"]["cpu_count"].as_u64().unwrap() >= 1);
    }

    #[test]
    fn test_tool_result_bare_text() {
        let result = tool_result(Value::String("hello".to_string()), false);
        assert_eq!(result["content"][0]["text"], "hello");
        assert_eq!(result["isError"], false);
    }

    #[test]
    fn test_tool_result_structured_value_is_json_encoded() {
        let result = tool_result(json!({"success": false}), true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(text).unwrap(),
            json!({"success": false})
        );
        assert_eq!(result["isError"], true);
    }
}
