//! Adapter implementations for the random source port.
//!
//! - `live` — thread-local and seeded generators backed by `rand`
//! - `sequence` — fixed draw lists, used for replay and tests
//! - `recording` — captures draws into a cassette

pub mod live;
pub mod recording;
pub mod sequence;
