//! Repository configuration for the commit-detail API.

/// Default base URL of the commit-detail API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default repository owner.
pub const DEFAULT_OWNER: &str = "library-angels";

/// Default repository name.
pub const DEFAULT_REPO: &str = "code-library-backend";

/// Identifies the repository whose commits are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Base URL of the GitHub-compatible API.
    pub api_url: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
        }
    }
}

impl RepoConfig {
    /// Builds the commit-detail endpoint URL for the given SHA.
    #[must_use]
    pub fn commit_url(&self, sha: &str) -> String {
        format!("{}/repos/{}/{}/commits/{sha}", self.api_url, self.owner, self.repo)
    }
}
