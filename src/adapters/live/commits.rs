//! Live adapter for the `CommitLookup` port using the GitHub commits API.

use std::env;

use reqwest::Client;
use serde::Deserialize;

use crate::config::RepoConfig;
use crate::ports::{CommitDetail, CommitDetailFuture, CommitLookup};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// The API rejects requests without a User-Agent header.
const USER_AGENT: &str = concat!("relcheck/", env!("CARGO_PKG_VERSION"));

/// Live commit lookup that calls the configured GitHub-compatible API.
pub struct LiveCommitLookup {
    client: Client,
    config: RepoConfig,
}

impl LiveCommitLookup {
    /// Creates a new live commit lookup for the given repository.
    #[must_use]
    pub fn new(config: RepoConfig) -> Self {
        Self { client: Client::new(), config }
    }
}

/// Error body returned by the GitHub API.
#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl CommitLookup for LiveCommitLookup {
    fn commit_detail(&self, sha: &str) -> CommitDetailFuture<'_> {
        let url = self.config.commit_url(sha);
        let sha = sha.to_string();

        Box::pin(async move {
            let mut request =
                self.client.get(&url).header("User-Agent", USER_AGENT).header("Accept", GITHUB_ACCEPT);

            // Anonymous calls work but are rate-limited; CI normally
            // supplies GITHUB_TOKEN.
            if let Ok(token) = env::var("GITHUB_TOKEN") {
                if !token.is_empty() {
                    request = request.bearer_auth(token);
                }
            }

            let response = request.send().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Commit API request failed for {sha}: {e}").into()
                },
            )?;

            let status = response.status();
            let response_text =
                response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Failed to read commit API response for {sha}: {e}").into()
                })?;

            if !status.is_success() {
                let msg = serde_json::from_str::<ApiError>(&response_text)
                    .map(|e| e.message)
                    .unwrap_or(response_text);
                return Err(format!("Commit API error ({}): {msg}", status.as_u16()).into());
            }

            serde_json::from_str::<CommitDetail>(&response_text).map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Failed to parse commit API response for {sha}: {e}").into()
                },
            )
        })
    }
}
