//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the grid generator and an
//! external capability. Implementations live in `src/adapters/`.

pub mod random_source;

pub use random_source::RandomSource;
