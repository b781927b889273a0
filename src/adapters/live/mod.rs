//! Live adapters backed by real external systems.

pub mod commits;

pub use commits::LiveCommitLookup;
