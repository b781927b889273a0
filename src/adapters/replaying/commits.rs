//! Replaying adapter for the `CommitLookup` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{CommitDetailFuture, CommitLookup};

/// Serves recorded commit lookups from a cassette.
pub struct ReplayingCommitLookup {
    replayer: Option<Arc<Mutex<CassetteReplayer>>>,
}

impl ReplayingCommitLookup {
    /// Create a replaying commit lookup backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer: Some(replayer) }
    }

    /// Create a replaying commit lookup with no cassette. Panics when called.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { replayer: None }
    }
}

impl CommitLookup for ReplayingCommitLookup {
    fn commit_detail(&self, _sha: &str) -> CommitDetailFuture<'_> {
        let output = next_output(self.replayer.as_ref(), "commits", "commit_detail");
        Box::pin(async move { replay_result(output) })
    }
}
