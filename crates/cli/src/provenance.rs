use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a mesh run records next to its outputs.
pub struct Payload {
    pub params: Value,
    pub stats: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            stats: Value::Null,
        }
    }

    pub fn with_stats(mut self, stats: Value) -> Self {
        self.stats = stats;
        self
    }
}

/// Write `<stem>.provenance.json` beside `artifact`, listing every file in `outputs`.
#[track_caller]
pub fn write_sidecar(artifact: &Path, outputs: &[PathBuf], payload: Payload) -> Result<PathBuf> {
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "quadmesh": quadmesh::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": payload.params,
        "stats": payload.stats,
        "outputs": outputs.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>(),
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("mesh"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit of the running binary: `GIT_COMMIT` at build or run time, else `git rev-parse`.
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
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_stem() {
        let derived = provenance_path(Path::new("/tmp/meshes/l.csv"));
        assert_eq!(derived, Path::new("/tmp/meshes/l.provenance.json"));
    }

    #[test]
    fn sidecar_lists_outputs_and_stats() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("run").join("l.csv");
        let written = vec![
            dir.path().join("run").join("l_vertices.csv"),
            dir.path().join("run").join("l_triangles.csv"),
        ];
        let payload = Payload::new(json!({"source": "L-shape", "size": 16}))
            .with_stats(json!({"triangles": 40}));
        let prov = write_sidecar(&out, &written, payload).unwrap();
        assert!(prov.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov).unwrap()).unwrap();
        assert_eq!(parsed["outputs"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["outputs"][1], written[1].to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["size"], 16);
        assert_eq!(parsed["stats"]["triangles"], 40);
        assert_eq!(parsed["quadmesh"], quadmesh::VERSION);
    }
}
