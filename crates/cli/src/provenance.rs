use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an output ring: the subcommand and its parameters.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, path: &Path) -> Self {
        self.inputs.push(path.to_string_lossy().into_owned());
        self
    }
}

/// Header shared by sidecars and `report`.
pub fn header() -> Value {
    json!({
        "engine": "annogeom",
        "engine_version": annogeom::VERSION,
        "code_rev": current_git_rev(),
    })
}

/// Write `<stem>.provenance.json` next to `artifact`.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    let mut doc = header();
    doc["command"] = json!(payload.command);
    doc["params"] = payload.params;
    doc["inputs"] = json!(payload.inputs);
    doc["outputs"] = json!([artifact.to_string_lossy()]);
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    tracing::debug!(path = %sidecar.display(), "sidecar_written");
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("ring"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` at build or run time, else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_ring() {
        let derived = sidecar_path(Path::new("/tmp/out/brush.json"));
        assert_eq!(derived, Path::new("/tmp/out/brush.provenance.json"));
    }

    #[test]
    fn sidecar_records_command_and_version() {
        let dir = tempdir().unwrap();
        let ring = dir.path().join("hull.json");
        fs::write(&ring, "{}").unwrap();
        let payload = Payload::new("hull", json!({"radius_px": 8.0}))
            .with_input(Path::new("stroke.csv"));
        let path = write_sidecar(&ring, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "hull");
        assert_eq!(parsed["engine_version"], annogeom::VERSION);
        assert_eq!(parsed["params"]["radius_px"], 8.0);
        assert_eq!(parsed["inputs"][0], "stroke.csv");
        assert_eq!(parsed["outputs"][0], ring.to_string_lossy().as_ref());
    }
}
