//! Replaying adapters that replay recorded interactions.

pub mod commits;

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;

pub use commits::ReplayingCommitLookup;

/// Fetch the next recorded output for the given port and method.
///
/// # Panics
///
/// Panics if the adapter has no cassette configured, or if the cassette
/// has no more interactions for this port/method pair.
pub(crate) fn next_output(
    replayer: Option<&Arc<Mutex<CassetteReplayer>>>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let replayer = replayer.unwrap_or_else(|| {
        panic!("No cassette loaded for port={port:?} — replaying adapter is unconfigured")
    });
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method).output.clone()
}

/// Decode a recorded output using the Ok/Err JSON convention.
///
/// Mirror of `recording::record_result`:
/// - `{"Ok": v}` decodes to `Ok(v)`
/// - `{"Err": msg}` decodes to `Err(msg)`
pub(crate) fn replay_result<T>(
    output: serde_json::Value,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>>
where
    T: DeserializeOwned,
{
    match output {
        serde_json::Value::Object(mut map) => {
            if let Some(ok) = map.remove("Ok") {
                serde_json::from_value(ok).map_err(|e| {
                    Box::<dyn std::error::Error + Send + Sync>::from(format!(
                        "Failed to decode recorded Ok value: {e}"
                    ))
                })
            } else if let Some(err) = map.remove("Err") {
                let msg = err.as_str().map_or_else(|| err.to_string(), ToString::to_string);
                Err(msg.into())
            } else {
                Err("Recorded output object has neither Ok nor Err".into())
            }
        }
        other => Err(format!("Recorded output is not an Ok/Err object: {other}").into()),
    }
}
