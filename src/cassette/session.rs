//! Recording session managing the commits cassette recorder.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Manages the `CassetteRecorder` for one recording run.
///
/// The recorder is shared with the recording adapter via `Arc<Mutex<_>>`
/// and written to `<dir>/commits.cassette.yaml` when the session
/// finishes.
pub struct RecordingSession {
    /// Recorder for commit-lookup interactions.
    pub commits: Arc<Mutex<CassetteRecorder>>,
    /// Path of the cassette file written on finish.
    output_path: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session writing into the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: &Path) -> Result<Self, String> {
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create cassette directory {}: {e}", dir.display()))?;

        let output_path = dir.join("commits.cassette.yaml");
        let name = format!("{}-commits", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        let commit = get_commit_hash();
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&output_path, name, commit)));

        Ok(Self { commits: recorder, output_path })
    }

    /// Finish the session and write the cassette file to disk.
    ///
    /// Consumes the session; the recording adapter must have been
    /// dropped first so this holds the only recorder reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder is still shared or the file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.commits)
            .map_err(|_| "Recording adapter for commits still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for commits poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write commits cassette: {e}"))?;
        Ok(self.output_path)
    }
}

/// Get the current git commit hash, or "unknown" with a warning if unavailable.
fn get_commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    if let Some(h) = hash {
        h
    } else {
        eprintln!("Warning: Could not get git commit hash, using 'unknown'");
        "unknown".to_string()
    }
}
