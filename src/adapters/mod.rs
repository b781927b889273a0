//! Adapter implementations of the port traits.
//!
//! Live adapters talk to the real hosting API; recording adapters wrap
//! a live adapter and capture traffic to a cassette; replaying adapters
//! serve recorded traffic back without any network access.

pub mod live;
pub mod recording;
pub mod replaying;
