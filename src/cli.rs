//! CLI argument definitions.

use clap::Parser;

use crate::config;

/// Top-level CLI parser for `relcheck`.
///
/// Both positional arguments are JSON-encoded arrays of strings, the
/// shape the surrounding CI workflow already has on hand.
#[derive(Debug, Parser)]
#[command(name = "relcheck", version, about = "Report whether commits touched relevant paths")]
pub struct Cli {
    /// JSON array of commit SHAs to inspect (e.g. '["abc123", "def456"]').
    pub commits: String,

    /// JSON array of relevant paths: top-level directories or full
    /// workflow-file paths (e.g. '["api", ".github/workflows/ci.yml"]').
    pub relevant: String,

    /// Base URL of the GitHub-compatible API.
    #[arg(long, default_value = config::DEFAULT_API_URL)]
    pub api_url: String,

    /// Repository owner on the hosting service.
    #[arg(long, default_value = config::DEFAULT_OWNER)]
    pub owner: String,

    /// Repository name on the hosting service.
    #[arg(long, default_value = config::DEFAULT_REPO)]
    pub repo: String,
}
