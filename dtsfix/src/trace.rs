use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RunTrace {
    pub schema_version: u32,
    pub mode: String,
    pub source: String,
    pub dest: Option<String>,
    pub changed: Option<bool>,
    pub started_at_unix_ms: Option<u128>,
    pub elapsed_ms: Option<u128>,
    pub warnings: Vec<String>,
}

fn diagnostics_dir() -> Option<PathBuf> {
    std::env::var("DTSFIX_DIAGNOSTICS_DIR")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Writes a JSON run trace when `DTSFIX_DIAGNOSTICS_DIR` is set. Trace
/// write failures are swallowed; diagnostics never fail the run.
pub fn maybe_write_run_trace(
    mode: &str,
    source: &str,
    dest: Option<&str>,
    changed: Option<bool>,
    started_at: Option<Instant>,
    warnings: Vec<String>,
) {
    let Some(dir) = diagnostics_dir() else {
        return;
    };
    let _ = std::fs::create_dir_all(&dir);
    let trace_path = dir.join("run_trace.json");

    let started_at_unix_ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .ok()
        .map(|d| d.as_millis());
    let elapsed_ms = started_at.map(|t| t.elapsed().as_millis());

    let trace = RunTrace {
        schema_version: 1,
        mode: mode.to_string(),
        source: source.to_string(),
        dest: dest.map(str::to_string),
        changed,
        started_at_unix_ms,
        elapsed_ms,
        warnings,
    };

    if let Ok(file) = std::fs::File::create(trace_path) {
        let _ = serde_json::to_writer_pretty(file, &trace);
    }
}
