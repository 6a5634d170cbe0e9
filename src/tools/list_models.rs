//! The `list_available_models` tool.
//!
//! Combines the runtime's model catalog with heuristic usage
//! recommendations and the host's hardware specs.

use serde::Serialize;
use serde_json::{json, Value};

use crate::ollama::{recommend, ModelDescriptor, OllamaClient};
use crate::system;

pub const LIST_AVAILABLE_MODELS: &str = "list_available_models";

/// MCP tool definition.
pub fn definition() -> Value {
    json!({
        "name": LIST_AVAILABLE_MODELS,
        "description": "List all available Ollama models with their specifications and recommended use cases.",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": [],
        },
    })
}

/// A model enriched with size figures and usage recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct ModelRecommendation {
    pub name: String,
    pub size_gb: f64,
    pub recommended_uses: Vec<&'static str>,
    pub memory_requirement_gb: f64,
}

impl From<&ModelDescriptor> for ModelRecommendation {
    fn from(model: &ModelDescriptor) -> Self {
        let size_gb = recommend::size_gb(model.size);
        Self {
            name: model.name.clone(),
            size_gb,
            recommended_uses: recommend::recommended_uses(&model.name),
            memory_requirement_gb: recommend::memory_requirement_gb(size_gb),
        }
    }
}

/// List installed models with recommendations and host specs.
///
/// An unreachable runtime yields an empty model list, indistinguishable
/// from a runtime with nothing installed.
pub async fn list_available_models(client: &OllamaClient) -> Value {
    tracing::info!("listing available models");

    let models = client.list_models().await;
    let recommendations: Vec<ModelRecommendation> =
        models.iter().map(ModelRecommendation::from).collect();
    let system_specs = system::detect_specs();

    json!({
        "models": recommendations,
        "system_specs": system_specs,
        "total_models": models.len(),
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, size: u64) -> ModelDescriptor {
        ModelDescriptor {
            name: name.to_string(),
            size,
            modified_at: String::new(),
            digest: String::new(),
            details: json!({}),
        }
    }

    #[test]
    fn test_recommendation_for_code_instruct_model() {
        let model = descriptor("codellama:7b-instruct", 4_000_000_000);
        let rec = ModelRecommendation::from(&model);

        assert_eq!(rec.name, "codellama:7b-instruct");
        assert!(rec.recommended_uses.contains(&"code generation"));
        assert!(rec.recommended_uses.contains(&"instruction following"));
        assert!(rec.recommended_uses.contains(&"fast generation"));
    }

    #[test]
    fn test_recommendation_size_figures() {
        // 2 GiB on disk: size_gb is exactly 2.0, memory estimate 1.2x.
        let model = descriptor("mistral:latest", 2 * 1024 * 1024 * 1024);
        let rec = ModelRecommendation::from(&model);

        assert_eq!(rec.size_gb, 2.0);
        assert!((rec.memory_requirement_gb - 2.4).abs() < 1e-9);
        assert_eq!(rec.recommended_uses, vec!["general chat"]);
    }

    #[test]
    fn test_definition_takes_no_arguments() {
        let def = definition();
        assert_eq!(def["name"], LIST_AVAILABLE_MODELS);
        assert_eq!(def["inputSchema"]["properties"], json!({}));
    }
}
