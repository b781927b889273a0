//! Command dispatch and handlers.

pub mod check;

use std::env;
use std::path::Path;
use std::sync::Arc;

use crate::cassette::session::RecordingSession;
use crate::cli::Cli;
use crate::config::RepoConfig;
use crate::context::ServiceContext;

/// Dispatch the parsed CLI invocation.
///
/// When `RELCHECK_REPLAY` is set to a cassette file path, commit lookups
/// are served from that cassette instead of the network. When
/// `RELCHECK_RECORD` is set to a directory path, live lookups are
/// recorded to `commits.cassette.yaml` in that directory.
///
/// # Errors
///
/// Returns an error string if input parsing, the commit lookups, or
/// cassette handling fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    // Pick up GITHUB_TOKEN from a local .env when present.
    let _ = dotenvy::dotenv();

    if let Ok(path) = env::var("RELCHECK_REPLAY") {
        let ctx = ServiceContext::replaying(Path::new(&path))?;
        return check::run_with_context(&ctx, cli);
    }

    let config = RepoConfig {
        api_url: cli.api_url.clone(),
        owner: cli.owner.clone(),
        repo: cli.repo.clone(),
    };

    let (ctx, session) = if let Ok(dir) = env::var("RELCHECK_RECORD") {
        let session = RecordingSession::new(Path::new(&dir))?;
        let ctx = ServiceContext::recording(config, Arc::clone(&session.commits));
        (ctx, Some(session))
    } else {
        (ServiceContext::live(config), None)
    };

    let result = check::run_with_context(&ctx, cli);

    // Finish recording after the check completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Finish a recording session and print the cassette path.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_path = session.finish()?;
    eprintln!("Recording saved to: {}", output_path.display());
    Ok(())
}
