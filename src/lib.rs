//! Core library entry for the `relcheck` CLI.
//!
//! `relcheck` answers one question for a CI pipeline: did any of the
//! given commits touch a relevant path? The external commit-detail API
//! sits behind the [`ports::CommitLookup`] port so that a detection run
//! can be recorded to a cassette file and replayed without network access.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod detect;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // Help and version output belong on stdout with a zero exit.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_missing_arguments() {
        let result = run(["relcheck"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_malformed_json_argument() {
        let result = run(["relcheck", "not-json", "[\"src\"]"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_treats_help_as_success() {
        let result = run(["relcheck", "--help"]);
        assert!(result.is_ok());
    }
}
