//! Base URL resolution with environment-adaptive fallback.
//!
//! Candidates are tried in strict priority order:
//! 1. The `OLLAMA_HOST` environment variable, returned verbatim (trusted,
//!    never probed).
//! 2. The default localhost address, if it answers a short liveness probe.
//! 3. Under WSL, the Windows host gateway on the default Ollama port, if it
//!    answers the same probe.
//! 4. The default localhost address as a last resort.
//!
//! Every failure along the chain degrades to the next candidate. Resolution
//! never errors.

use std::time::Duration;

use tracing::{debug, info, warn};

/// Default Ollama API address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Timeout for liveness probes. Short on purpose: a probe only has to tell
/// reachable from unreachable, not wait out a slow model load.
const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Resolve the Ollama base URL for this process.
pub async fn resolve_base_url() -> String {
    if let Some(url) = override_from(std::env::var("OLLAMA_HOST").ok()) {
        info!(url = %url, "using OLLAMA_HOST from environment");
        return url;
    }

    let probe_client = match reqwest::Client::builder().timeout(PROBE_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "failed to build probe client, using default URL");
            return DEFAULT_BASE_URL.to_string();
        }
    };

    if probe(&probe_client, DEFAULT_BASE_URL).await {
        info!(url = %DEFAULT_BASE_URL, "connected to Ollama");
        return DEFAULT_BASE_URL.to_string();
    }
    debug!(url = %DEFAULT_BASE_URL, "default endpoint did not respond");

    if wsl_marker_present() {
        if let Some(gateway) = discover_default_gateway() {
            let candidate = gateway_candidate(&gateway);
            if probe(&probe_client, &candidate).await {
                info!(url = %candidate, "connected to Ollama on the WSL host gateway");
                return candidate;
            }
            debug!(url = %candidate, "WSL host gateway did not respond");
        }
    }

    warn!(
        "could not connect to Ollama, using the default URL; \
         set OLLAMA_HOST if the runtime is elsewhere"
    );
    DEFAULT_BASE_URL.to_string()
}

/// Environment override, treating an empty value as unset.
fn override_from(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Liveness probe: does the candidate answer a model-catalog GET in time?
async fn probe(client: &reqwest::Client, base_url: &str) -> bool {
    match client.get(format!("{base_url}/api/tags")).send().await {
        Ok(resp) => resp.status().is_success(),
        Err(_) => false,
    }
}

/// Whether the running kernel carries the WSL vendor marker.
fn wsl_marker_present() -> bool {
    match std::fs::read_to_string("/proc/version") {
        Ok(version) => is_wsl_kernel(&version),
        Err(_) => false,
    }
}

/// WSL kernels report a `microsoft` substring in their version string.
fn is_wsl_kernel(version: &str) -> bool {
    version.to_lowercase().contains("microsoft")
}

/// Discover the default gateway via `ip route show`.
///
/// Under WSL2 the default gateway is the Windows host, which is where a
/// Windows-side Ollama listens.
fn discover_default_gateway() -> Option<String> {
    let output = std::process::Command::new("ip")
        .args(["route", "show"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    parse_default_gateway(&String::from_utf8_lossy(&output.stdout))
}

/// Extract the gateway address from routing table output.
///
/// The default route line reads `default via <gateway> dev <if> ...`; the
/// gateway is the third whitespace-separated field.
fn parse_default_gateway(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.to_lowercase().contains("default"))
        .and_then(|line| line.split_whitespace().nth(2))
        .map(str::to_string)
}

/// Candidate URL for a gateway host on the default Ollama port.
fn gateway_candidate(gateway: &str) -> String {
    format!("http://{gateway}:11434")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
