//! Binary entrypoint for the `relcheck` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Recording and replaying are handled in commands::dispatch via
    // RELCHECK_RECORD=<dir> / RELCHECK_REPLAY=<file>.
    match relcheck::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
