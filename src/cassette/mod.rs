//! Record/replay infrastructure for deterministic grids.

pub mod config;
pub mod format;
pub mod recorder;
