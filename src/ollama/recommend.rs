//! Heuristic usage recommendations derived from model names.
//!
//! Pure and stateless: tags come from case-insensitive substring matches
//! only, so the heuristics work on any runtime's naming scheme without
//! consulting the model itself.

/// Size markers that indicate a small, fast model.
const FAST_MARKERS: [&str; 2] = ["7b", "8b"];

/// Size markers that indicate a large, reasoning-capable model.
const LARGE_MARKERS: [&str; 3] = ["13b", "34b", "70b"];

/// Recommended use cases for a model, by name.
///
/// A name matching nothing gets the single `general chat` tag.
pub fn recommended_uses(name: &str) -> Vec<&'static str> {
    let lower = name.to_lowercase();
    let mut uses = Vec::new();

    if lower.contains("code") {
        uses.push("code generation");
        uses.push("code analysis");
    }
    if lower.contains("instruct") {
        uses.push("instruction following");
        uses.push("task completion");
    }
    if FAST_MARKERS.iter().any(|m| lower.contains(m)) {
        uses.push("fast generation");
    }
    if LARGE_MARKERS.iter().any(|m| lower.contains(m)) {
        uses.push("complex reasoning");
    }

    if uses.is_empty() {
        uses.push("general chat");
    }
    uses
}

/// On-disk size in gigabytes, rounded to two decimals.
pub fn size_gb(size_bytes: u64) -> f64 {
    let gb = size_bytes as f64 / (1024.0 * 1024.0 * 1024.0);
    (gb * 100.0).round() / 100.0
}

/// Rough estimate of the memory needed to run a model.
pub fn memory_requirement_gb(size_gb: f64) -> f64 {
    size_gb * 1.2
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_instruct_small_model_tags() {
        let uses = recommended_uses("codellama:7b-instruct");
        assert!(uses.contains(&"code generation"));
        assert!(uses.contains(&"code analysis"));
        assert!(uses.contains(&"instruction following"));
        assert!(uses.contains(&"task completion"));
        assert!(uses.contains(&"fast generation"));
    }

    #[test]
    fn test_large_model_gets_complex_reasoning() {
        assert!(recommended_uses("llama2:70b").contains(&"complex reasoning"));
        assert!(recommended_uses("yi:34b").contains(&"complex reasoning"));
    }

    #[test]
    fn test_unmatched_name_gets_general_chat_only() {
        assert_eq!(recommended_uses("mistral:latest"), vec!["general chat"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let uses = recommended_uses("CodeLlama:13B-Instruct");
        assert!(uses.contains(&"code generation"));
        assert!(uses.contains(&"instruction following"));
        assert!(uses.contains(&"complex reasoning"));
    }

    #[test]
    fn test_size_gb_rounds_to_two_decimals() {
        // 3_600_000_000 / 1024^3 = 3.3527... -> 3.35
        assert_eq!(size_gb(3_600_000_000), 3.35);
        assert_eq!(size_gb(0), 0.0);
    }

    #[test]
    fn test_memory_requirement_is_size_times_1_2() {
        let estimate = memory_requirement_gb(2.0);
        assert!((estimate - 2.4).abs() < 1e-9);
    }
}
