//! Commit lookup port for querying files changed by a commit.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Boxed future type alias used by [`CommitLookup`] to keep the trait dyn-compatible.
pub type CommitDetailFuture<'a> =
    Pin<Box<dyn Future<Output = Result<CommitDetail, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// A single changed file reported for a commit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitFile {
    /// Repository-relative path of the changed file.
    pub filename: String,
}

/// The subset of a commit-detail response this tool consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitDetail {
    /// Files added, modified, or removed by the commit.
    pub files: Vec<CommitFile>,
}

/// Looks up the files changed by a commit.
///
/// Abstracting the lookup allows deterministic replay and testing
/// without touching the real hosting API.
pub trait CommitLookup: Send + Sync {
    /// Fetches the changed-file list for the given commit SHA.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API responds with a
    /// non-success status, or the response body cannot be decoded.
    fn commit_detail(&self, sha: &str) -> CommitDetailFuture<'_>;
}
