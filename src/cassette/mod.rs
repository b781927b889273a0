//! Cassette recording and replaying of port interactions.
//!
//! A cassette is a YAML file capturing every call through an external
//! port (here, commit-detail lookups) so a detection run can be
//! replayed without network access.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
