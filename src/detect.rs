//! Change detection core.
//!
//! Aggregates the files changed by a list of commits, reduces them to
//! top-level path segments, and answers whether any caller-supplied
//! relevant path was touched. Workflow files under `.github/workflows`
//! are matched by their full path instead of collapsing to `.github`;
//! any other `.github/*` change produces no signal at all.

use std::collections::BTreeSet;

use crate::context::ServiceContext;

/// Top-level directory holding CI configuration.
const CI_DIR: &str = ".github";

/// Path prefix of workflow files, matched by full path.
const WORKFLOWS_PREFIX: &str = ".github/workflows";

/// Reports whether any relevant path was touched by the given commits.
///
/// Commits are fetched one at a time, in input order, through the
/// commit-lookup port on `ctx`.
///
/// # Errors
///
/// Returns an error if any commit lookup fails; there is no retry and
/// no partial result, the caller treats failure as "indeterminate".
pub async fn relevant_changed(
    ctx: &ServiceContext,
    commits: &[String],
    relevant: &[String],
) -> Result<bool, String> {
    let files = changed_files(ctx, commits).await?;
    let bases = base_paths(&files);
    Ok(relevant.iter().any(|path| bases.contains(path)))
}

/// Unions the changed-file lists of all commits into one set.
async fn changed_files(
    ctx: &ServiceContext,
    commits: &[String],
) -> Result<BTreeSet<String>, String> {
    let mut files = BTreeSet::new();
    for sha in commits {
        let detail = ctx
            .commits
            .commit_detail(sha)
            .await
            .map_err(|e| format!("commit lookup failed for {sha}: {e}"))?;
        files.extend(detail.files.into_iter().map(|file| file.filename));
    }
    Ok(files)
}

/// Derives the base-path set used for relevance matching.
///
/// Each file contributes the segment before its first `/` (the whole
/// path when it has none). When `.github` shows up, it is replaced by
/// the full paths of the changed workflow files.
#[must_use]
pub fn base_paths(files: &BTreeSet<String>) -> BTreeSet<String> {
    let mut bases: BTreeSet<String> = files
        .iter()
        .map(|file| file.split('/').next().unwrap_or(file.as_str()).to_string())
        .collect();

    if bases.contains(CI_DIR) {
        for file in files {
            if file.starts_with(WORKFLOWS_PREFIX) {
                bases.insert(file.clone());
            }
        }
        bases.remove(CI_DIR);
    }

    bases
}
