//! The relevance-check operation.

use crate::cli::Cli;
use crate::context::ServiceContext;
use crate::detect;

/// Execute the check with the given service context.
///
/// Parses the two JSON-array arguments, runs the detector on a
/// current-thread runtime, and prints `true` or `false` on stdout.
///
/// # Errors
///
/// Returns an error string if either argument is not a JSON array of
/// strings, the runtime cannot start, or a commit lookup fails.
pub fn run_with_context(ctx: &ServiceContext, cli: &Cli) -> Result<(), String> {
    let commits = parse_string_array(&cli.commits, "COMMITS")?;
    let relevant = parse_string_array(&cli.relevant, "RELEVANT")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    let changed = runtime.block_on(detect::relevant_changed(ctx, &commits, &relevant))?;

    println!("{changed}");
    Ok(())
}

/// Parse one CLI argument as a JSON array of strings.
fn parse_string_array(raw: &str, arg_name: &str) -> Result<Vec<String>, String> {
    serde_json::from_str(raw)
        .map_err(|e| format!("{arg_name} must be a JSON array of strings: {e}"))
}
