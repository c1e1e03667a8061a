//! Random source that serves a fixed list of draws.

use crate::ports::RandomSource;

/// Returns values from a provided sequence, cycling once exhausted.
///
/// An empty sequence yields `0.0` forever.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// Create a source serving `draws` in order.
    #[must_use]
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
