//! Ollama endpoint discovery.
//!
//! Resolves the runtime's base URL once at process startup. The resolved
//! value is immutable for the life of the process; if the runtime moves or
//! dies afterwards, calls fail and are surfaced as empty lists or
//! structured errors by the client.

pub mod resolver;

pub use resolver::{resolve_base_url, DEFAULT_BASE_URL};
