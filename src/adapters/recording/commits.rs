//! Recording adapter for the `CommitLookup` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{CommitDetailFuture, CommitLookup};

/// Records commit lookups while delegating to an inner implementation.
pub struct RecordingCommitLookup {
    inner: Box<dyn CommitLookup>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingCommitLookup {
    /// Creates a new recording commit lookup wrapping the given implementation.
    pub fn new(inner: Box<dyn CommitLookup>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl CommitLookup for RecordingCommitLookup {
    fn commit_detail(&self, sha: &str) -> CommitDetailFuture<'_> {
        let sha = sha.to_string();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.commit_detail(&sha).await;

            record_result(
                &recorder,
                "commits",
                "commit_detail",
                &serde_json::json!({ "sha": sha }),
                &result,
            );

            result
        })
    }
}
