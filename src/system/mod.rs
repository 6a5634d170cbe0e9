//! Host hardware inspection.
//!
//! Gathers the specs reported alongside the model catalog so a caller can
//! judge which models the machine can actually run.

use serde::Serialize;
use sysinfo::System;

/// Hardware profile of the local machine.
#[derive(Debug, Clone, Serialize)]
pub struct SystemSpecs {
    /// Logical CPU count.
    pub cpu_count: usize,
    /// Total memory in gigabytes, rounded to two decimals.
    pub memory_gb: f64,
    /// Whether an NVIDIA GPU is usable by the runtime.
    pub gpu_available: bool,
}

/// Detect the host's specs. Gathered fresh on every call.
pub fn detect_specs() -> SystemSpecs {
    let mut sys = System::new_all();
    sys.refresh_all();

    let cpu_count = sys.cpus().len();
    let memory_gb =
        (sys.total_memory() as f64 / (1024.0 * 1024.0 * 1024.0) * 100.0).round() / 100.0;

    SystemSpecs {
        cpu_count,
        memory_gb,
        gpu_available: gpu_available(),
    }
}

/// Probe GPU availability via the `nvidia-smi` exit status.
///
/// A missing binary means "no GPU", not an error.
fn gpu_available() -> bool {
    match std::process::Command::new("nvidia-smi").output() {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
