//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveCommitLookup;
use crate::adapters::recording::RecordingCommitLookup;
use crate::adapters::replaying::ReplayingCommitLookup;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::RepoConfig;
use crate::ports::CommitLookup;

/// Bundles the port trait objects behind which external systems live.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// Commit lookup for querying files changed by a commit.
    pub commits: Box<dyn CommitLookup>,
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}

impl ServiceContext {
    /// Creates a live context that queries the real commit API.
    #[must_use]
    pub fn live(config: RepoConfig) -> Self {
        Self { commits: Box::new(LiveCommitLookup::new(config)) }
    }

    /// Creates a recording context: live lookups, captured to the given recorder.
    #[must_use]
    pub fn recording(config: RepoConfig, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        let live = Box::new(LiveCommitLookup::new(config));
        Self { commits: Box::new(RecordingCommitLookup::new(live, recorder)) }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: crate::cassette::format::Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;

        let replayer = Arc::new(Mutex::new(CassetteReplayer::new(&cassette)));
        Ok(Self { commits: Box::new(ReplayingCommitLookup::new(replayer)) })
    }
}
