//! Port traits defining external boundaries.
//!
//! The only external system this tool talks to is the commit-detail
//! API. Putting it behind a trait keeps the detector testable and lets
//! cassette adapters record and replay real API traffic.
//! Implementations live in `src/adapters/`.

pub mod commits;

pub use commits::{CommitDetail, CommitDetailFuture, CommitFile, CommitLookup};
